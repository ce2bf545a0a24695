use anchor_lang::prelude::*;

use crate::constants::{PAYOUT_PERCENT, PERCENT_DENOMINATOR};
use crate::error::LotteryError;

#[account]
#[derive(InitSpace, Debug, Default)]
pub struct Lottery {
    /// The identity that created the lottery and may withdraw the escrow.
    pub admin: Pubkey,

    /// The identity allowed to pick the winning ticket index.
    pub oracle: Pubkey,

    /// The index of the winning ticket.
    /// `None` until the oracle resolves the lottery, immutable afterwards.
    pub winner_index: Option<u32>,

    /// The total number of tickets issued for this lottery.
    /// Also the index the next ticket will be created at.
    pub count: u32,

    /// The price (in lamports) required to purchase a single ticket.
    pub ticket_price: u64,

    /// Lamports collected from ticket sales so far.
    pub total_collected: u64,

    /// Lamports reserved for the winner, fixed at resolution.
    pub payout: u64,

    /// Lamports reserved for the admin, fixed at resolution and
    /// zeroed once withdrawn.
    pub escrow: u64,

    /// `true` once the payout has been sent to the winner.
    pub payout_claimed: bool,
}

impl Lottery {
    pub fn new(admin: Pubkey, oracle: Pubkey, ticket_price: u64) -> Result<Self> {
        require!(ticket_price > 0, LotteryError::InvalidTicketPrice);

        Ok(Self {
            admin,
            oracle,
            winner_index: None,
            count: 0,
            ticket_price,
            total_collected: 0,
            payout: 0,
            escrow: 0,
            payout_claimed: false,
        })
    }

    pub fn is_resolved(&self) -> bool {
        self.winner_index.is_some()
    }

    /// Books one sold ticket and returns the index it was issued at.
    pub fn record_purchase(&mut self) -> Result<u32> {
        require!(!self.is_resolved(), LotteryError::LotteryResolved);

        let idx = self.count;
        let total_collected = self
            .total_collected
            .checked_add(self.ticket_price)
            .ok_or(LotteryError::ArithmeticOverflow)?;
        let count = idx.checked_add(1).ok_or(LotteryError::ArithmeticOverflow)?;

        self.total_collected = total_collected;
        self.count = count;

        Ok(idx)
    }

    /// Fixes the winning index and splits the collected revenue.
    /// Nothing is written unless every check passes.
    pub fn resolve(&mut self, winner_index: u32) -> Result<()> {
        require!(!self.is_resolved(), LotteryError::AlreadyResolved);
        require!(winner_index < self.count, LotteryError::InvalidWinnerIndex);

        let (payout, escrow) = split_revenue(self.total_collected)?;

        self.winner_index = Some(winner_index);
        self.payout = payout;
        self.escrow = escrow;

        Ok(())
    }

    /// Marks the payout as sent and returns the amount to move.
    pub fn claim_payout(&mut self, ticket_idx: u32) -> Result<u64> {
        let winner_index = self
            .winner_index
            .ok_or(LotteryError::WinnerNotChosen)?;
        require!(ticket_idx == winner_index, LotteryError::NotWinningTicket);
        require!(!self.payout_claimed, LotteryError::PayoutAlreadyClaimed);

        self.payout_claimed = true;

        Ok(self.payout)
    }

    /// Drains the escrow, returning what was in it (possibly 0).
    pub fn take_escrow(&mut self) -> u64 {
        std::mem::take(&mut self.escrow)
    }
}

/// Splits `total` into `(payout, escrow)`.
/// The payout is rounded down so any remainder lands in the escrow.
pub fn split_revenue(total: u64) -> Result<(u64, u64)> {
    let payout = (total as u128)
        .checked_mul(PAYOUT_PERCENT as u128)
        .and_then(|v| v.checked_div(PERCENT_DENOMINATOR as u128))
        .and_then(|v| u64::try_from(v).ok())
        .ok_or(LotteryError::ArithmeticOverflow)?;
    let escrow = total
        .checked_sub(payout)
        .ok_or(LotteryError::ArithmeticOverflow)?;

    Ok((payout, escrow))
}

#[account]
#[derive(InitSpace, Debug, Default)]
pub struct Ticket {
    /// The player who bought this ticket.
    pub submitter: Pubkey,

    /// Position of this ticket in the lottery's sequence.
    pub idx: u32,

    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,
}

impl Ticket {
    /// Address of the ticket issued at `idx` in `lottery`.
    /// The index is encoded as a 4 byte big endian integer.
    pub fn address(lottery: &Pubkey, idx: u32) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[&idx.to_be_bytes(), lottery.as_ref()], &crate::ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

    fn code(err: Error) -> u32 {
        match err {
            Error::AnchorError(e) => e.error_code_number,
            Error::ProgramError(e) => panic!("unexpected program error: {e:?}"),
        }
    }

    fn lottery_with_tickets(tickets: u32) -> Lottery {
        let mut lottery =
            Lottery::new(Pubkey::new_unique(), Pubkey::new_unique(), LAMPORTS_PER_SOL).unwrap();
        for _ in 0..tickets {
            lottery.record_purchase().unwrap();
        }
        lottery
    }

    #[test]
    fn test_new_lottery_is_empty() {
        let admin = Pubkey::new_unique();
        let oracle = Pubkey::new_unique();
        let lottery = Lottery::new(admin, oracle, LAMPORTS_PER_SOL).unwrap();

        assert_eq!(lottery.admin, admin);
        assert_eq!(lottery.oracle, oracle);
        assert_eq!(lottery.count, 0);
        assert_eq!(lottery.payout, 0);
        assert_eq!(lottery.escrow, 0);
        assert_eq!(lottery.ticket_price, LAMPORTS_PER_SOL);
        assert!(!lottery.is_resolved());
    }

    #[test]
    fn test_default_accounts() {
        let lottery = Lottery::default();
        assert!(!lottery.is_resolved());
        assert!(format!("{lottery:?}").contains("winner_index: None"));

        let ticket = Ticket::default();
        assert_eq!(ticket.submitter, Pubkey::default());
        assert_eq!(ticket.idx, 0);
    }

    #[test]
    fn test_zero_price_rejected() {
        let err = Lottery::new(Pubkey::new_unique(), Pubkey::new_unique(), 0).unwrap_err();
        assert_eq!(code(err), u32::from(LotteryError::InvalidTicketPrice));
    }

    #[test]
    fn test_purchases_are_sequential() {
        let mut lottery = lottery_with_tickets(0);

        assert_eq!(lottery.record_purchase().unwrap(), 0);
        assert_eq!(lottery.record_purchase().unwrap(), 1);
        assert_eq!(lottery.record_purchase().unwrap(), 2);
        assert_eq!(lottery.count, 3);
        assert_eq!(lottery.total_collected, 3 * LAMPORTS_PER_SOL);
    }

    #[test]
    fn test_count_overflow_leaves_state_untouched() {
        let mut lottery = lottery_with_tickets(0);
        lottery.count = u32::MAX;

        let err = lottery.record_purchase().unwrap_err();
        assert_eq!(code(err), u32::from(LotteryError::ArithmeticOverflow));
        assert_eq!(lottery.count, u32::MAX);
        assert_eq!(lottery.total_collected, 0);
    }

    #[test]
    fn test_resolve_splits_revenue() {
        let mut lottery = lottery_with_tickets(2);
        lottery.resolve(1).unwrap();

        assert_eq!(lottery.winner_index, Some(1));
        assert_eq!(lottery.payout, 1_800_000_000);
        assert_eq!(lottery.escrow, 200_000_000);
    }

    #[test]
    fn test_resolve_twice_fails_without_changes() {
        let mut lottery = lottery_with_tickets(3);
        lottery.resolve(2).unwrap();
        let (payout, escrow) = (lottery.payout, lottery.escrow);

        let err = lottery.resolve(0).unwrap_err();
        assert_eq!(code(err), u32::from(LotteryError::AlreadyResolved));
        assert_eq!(lottery.winner_index, Some(2));
        assert_eq!(lottery.payout, payout);
        assert_eq!(lottery.escrow, escrow);
    }

    #[test]
    fn test_resolve_out_of_range() {
        let mut lottery = lottery_with_tickets(2);

        let err = lottery.resolve(2).unwrap_err();
        assert_eq!(code(err), u32::from(LotteryError::InvalidWinnerIndex));
        assert!(!lottery.is_resolved());

        let mut empty = lottery_with_tickets(0);
        let err = empty.resolve(0).unwrap_err();
        assert_eq!(code(err), u32::from(LotteryError::InvalidWinnerIndex));
    }

    #[test]
    fn test_purchase_after_resolution_rejected() {
        let mut lottery = lottery_with_tickets(1);
        lottery.resolve(0).unwrap();

        let err = lottery.record_purchase().unwrap_err();
        assert_eq!(code(err), u32::from(LotteryError::LotteryResolved));
        assert_eq!(lottery.count, 1);
        assert_eq!(lottery.total_collected, LAMPORTS_PER_SOL);
    }

    #[test]
    fn test_split_keeps_remainder_in_escrow() {
        assert_eq!(split_revenue(0).unwrap(), (0, 0));
        assert_eq!(split_revenue(9).unwrap(), (8, 1));
        assert_eq!(split_revenue(19).unwrap(), (17, 2));

        for total in [1, 7, 99, 1_000_000_001, u64::MAX] {
            let (payout, escrow) = split_revenue(total).unwrap();
            assert_eq!(payout + escrow, total);
            assert_eq!(payout as u128, total as u128 * 90 / 100);
        }
    }

    #[test]
    fn test_claim_payout_once() {
        let mut lottery = lottery_with_tickets(2);
        lottery.resolve(1).unwrap();

        let err = lottery.claim_payout(0).unwrap_err();
        assert_eq!(code(err), u32::from(LotteryError::NotWinningTicket));

        assert_eq!(lottery.claim_payout(1).unwrap(), 1_800_000_000);
        assert!(lottery.payout_claimed);
        assert_eq!(lottery.payout, 1_800_000_000);

        let err = lottery.claim_payout(1).unwrap_err();
        assert_eq!(code(err), u32::from(LotteryError::PayoutAlreadyClaimed));
    }

    #[test]
    fn test_claim_before_resolution() {
        let mut lottery = lottery_with_tickets(2);

        let err = lottery.claim_payout(0).unwrap_err();
        assert_eq!(code(err), u32::from(LotteryError::WinnerNotChosen));
        assert!(!lottery.payout_claimed);
    }

    #[test]
    fn test_take_escrow_drains() {
        let mut lottery = lottery_with_tickets(2);
        lottery.resolve(0).unwrap();

        assert_eq!(lottery.take_escrow(), 200_000_000);
        assert_eq!(lottery.escrow, 0);
        assert_eq!(lottery.take_escrow(), 0);
    }

    #[test]
    fn test_ticket_address_is_deterministic() {
        let lottery = Pubkey::new_unique();
        let other = Pubkey::new_unique();

        assert_eq!(Ticket::address(&lottery, 0), Ticket::address(&lottery, 0));
        assert_ne!(Ticket::address(&lottery, 0).0, Ticket::address(&lottery, 1).0);
        assert_ne!(Ticket::address(&lottery, 0).0, Ticket::address(&other, 0).0);

        let expected = Pubkey::find_program_address(&[&[0, 0, 1, 2], lottery.as_ref()], &crate::ID);
        assert_eq!(Ticket::address(&lottery, 258), expected);
    }

    #[test]
    fn test_space() {
        assert_eq!(Lottery::INIT_SPACE, 32 + 32 + (1 + 4) + 4 + 8 + 8 + 8 + 8 + 1);
        assert_eq!(Ticket::INIT_SPACE, 32 + 4 + 1);
    }
}

use anchor_lang::prelude::*;

#[event]
pub struct LotteryInitialized {
    pub lottery: Pubkey,
    pub admin: Pubkey,
    pub oracle: Pubkey,
    pub ticket_price: u64,
}

#[event]
pub struct TicketPurchased {
    pub lottery: Pubkey,
    pub ticket: Pubkey,
    pub submitter: Pubkey,
    pub idx: u32,
}

#[event]
pub struct WinnerPicked {
    pub lottery: Pubkey,
    pub winner_index: u32,
    pub payout: u64,
    pub escrow: u64,
}

#[event]
pub struct PayoutClaimed {
    pub lottery: Pubkey,
    pub winner: Pubkey,
    pub amount: u64,
}

#[event]
pub struct EscrowWithdrawn {
    pub lottery: Pubkey,
    pub admin: Pubkey,
    pub amount: u64,
}

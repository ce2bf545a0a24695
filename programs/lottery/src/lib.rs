#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

declare_id!("J5ftJMytMb7sYj4wRnv65zjumcQspuuoyuWBDLcqp57i");

#[program]
pub mod lottery {
    use super::*;

    /// Creates a lottery with a fixed ticket price and oracle
    pub fn initialize_lottery(
        ctx: Context<InitializeLottery>,
        ticket_price: u64,
        oracle: Pubkey,
    ) -> Result<()> {
        process_initialize_lottery(ctx, ticket_price, oracle)
    }

    /// Player buys the next ticket at the ticket price
    pub fn buy_ticket(ctx: Context<BuyTicket>) -> Result<()> {
        process_buy_ticket(ctx)
    }

    /// Oracle picks the winning ticket index
    pub fn pick_winner(ctx: Context<PickWinner>, winner_index: u32) -> Result<()> {
        process_pick_winner(ctx, winner_index)
    }

    /// Pays the prize to the winning ticket's submitter
    pub fn claim_payout(ctx: Context<ClaimPayout>) -> Result<()> {
        process_claim_payout(ctx)
    }

    /// Admin withdraws the holdback
    pub fn withdraw_escrow(ctx: Context<WithdrawEscrow>) -> Result<()> {
        process_withdraw_escrow(ctx)
    }
}

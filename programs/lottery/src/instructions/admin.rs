use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::events::{EscrowWithdrawn, LotteryInitialized};
use crate::state::Lottery;

/// Accounts required to create a new lottery.
/// The lottery account lives at a fresh keypair address, so it must sign.
#[derive(Accounts)]
pub struct InitializeLottery<'info> {
    /// The admin paying for account creation and fees.
    #[account(mut)]
    pub admin: Signer<'info>,

    /// The Lottery state account that stores lottery information.
    #[account(
        init,
        payer = admin,
        space = 8 + Lottery::INIT_SPACE,
    )]
    pub lottery: Account<'info, Lottery>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Accounts required for the admin to withdraw the holdback.
#[derive(Accounts)]
pub struct WithdrawEscrow<'info> {
    /// The lottery admin, receiving the escrowed lamports.
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        has_one = admin @ LotteryError::Unauthorized,
    )]
    pub lottery: Account<'info, Lottery>,
}

/// Initializes the Lottery account with its ticket price and oracle,
/// and sets the signer as admin.
///
/// # Arguments
/// * `ctx` - Context holding the InitializeLottery accounts
/// * `ticket_price` - Ticket price in lamports
/// * `oracle` - Identity allowed to pick the winner
pub fn process_initialize_lottery(
    ctx: Context<InitializeLottery>,
    ticket_price: u64,
    oracle: Pubkey,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    ctx.accounts
        .lottery
        .set_inner(Lottery::new(admin, oracle, ticket_price)?);

    msg!("Lottery initialized at: {}", ctx.accounts.lottery.key());
    msg!("Ticket price: {}", ticket_price);

    emit!(LotteryInitialized {
        lottery: ctx.accounts.lottery.key(),
        admin,
        oracle,
        ticket_price,
    });

    Ok(())
}

/// Moves the whole escrow to the admin and zeroes it.
/// An empty escrow is not an error; nothing moves.
pub fn process_withdraw_escrow(ctx: Context<WithdrawEscrow>) -> Result<()> {
    let amount = ctx.accounts.lottery.take_escrow();

    if amount == 0 {
        msg!("Escrow is empty, nothing to withdraw");
    } else {
        **ctx
            .accounts
            .lottery
            .to_account_info()
            .try_borrow_mut_lamports()? -= amount;
        **ctx.accounts.admin.try_borrow_mut_lamports()? += amount;

        msg!("Admin withdrew {} lamports", amount);
    }

    emit!(EscrowWithdrawn {
        lottery: ctx.accounts.lottery.key(),
        admin: ctx.accounts.admin.key(),
        amount,
    });

    Ok(())
}

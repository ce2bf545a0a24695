use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    #[msg("Unauthorized access")]
    Unauthorized,

    #[msg("Ticket price must be greater than 0")]
    InvalidTicketPrice,

    #[msg("Insufficient funds to buy a ticket")]
    InsufficientFunds,

    #[msg("Lottery already has a winner")]
    LotteryResolved,

    #[msg("Winner already picked")]
    AlreadyResolved,

    #[msg("Winner index does not match an issued ticket")]
    InvalidWinnerIndex,

    #[msg("Winner not chosen")]
    WinnerNotChosen,

    #[msg("Ticket is not the winning ticket")]
    NotWinningTicket,

    #[msg("Recipient is not the ticket submitter")]
    NotWinner,

    #[msg("Payout already claimed")]
    PayoutAlreadyClaimed,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}

pub mod admin;
pub mod buy_ticket;
pub mod claim_payout;
pub mod pick_winner;

pub use admin::*;
pub use buy_ticket::*;
pub use claim_payout::*;
pub use pick_winner::*;

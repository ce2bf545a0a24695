/// Share of the collected revenue reserved for the winner, in percent.
/// The rest is held back in escrow for the admin.
pub const PAYOUT_PERCENT: u64 = 90;

pub const PERCENT_DENOMINATOR: u64 = 100;

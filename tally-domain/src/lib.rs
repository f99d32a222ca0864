#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{Friend, FriendId, Money, Roster, RosterError};
pub use services::{compute_delta, BillSplit, Payer, SplitError};

pub mod split_calculator;

pub use split_calculator::{compute_delta, BillSplit, Payer, SplitError};

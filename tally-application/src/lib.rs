#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod session;

pub use error::SessionError;
pub use model::Selection;
pub use session::{Session, SplitOutcome};

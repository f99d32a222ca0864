use tally_domain::{RosterError, SplitError};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no friend is selected")]
    NoSelection,
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error(transparent)]
    Split(#[from] SplitError),
}

#![warn(clippy::uninlined_format_args)]

pub mod roster_presenter;
pub mod split_presenter;

pub use roster_presenter::RosterPresenter;
pub use split_presenter::SplitPresenter;

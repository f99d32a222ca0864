use tally_application::SplitOutcome;
use tally_domain::Friend;

use crate::roster_presenter::RosterPresenter;

pub struct SplitPresenter;

impl SplitPresenter {
    pub fn selection_header(friend: &Friend) -> String {
        format!("Split a bill with {}", friend.name())
    }

    /// Echoes what a completed split changed. `friend` is the roster entry
    /// the outcome was applied to.
    pub fn outcome(friend: &Friend, outcome: &SplitOutcome) -> String {
        let change = match outcome.delta.signum() {
            s if s > 0 => format!("{}€ added to {}'s balance", outcome.delta.abs(), friend.name()),
            s if s < 0 => format!(
                "{}€ taken off {}'s balance",
                outcome.delta.abs(),
                friend.name()
            ),
            _ => format!("no change to {}'s balance", friend.name()),
        };
        format!(
            "Recorded: {change}. {phrase}",
            phrase = RosterPresenter::balance_phrase(friend),
        )
    }
}

use std::fmt::Write as _;

use tally_domain::{Friend, FriendId, Roster};

pub struct RosterPresenter;

impl RosterPresenter {
    /// Renders the roster as one line per friend, in insertion order, with
    /// the selected friend marked.
    pub fn render(roster: &Roster, selection: Option<FriendId>) -> String {
        if roster.is_empty() {
            return "No friends yet. Use `add <name>` to add one.\n".to_string();
        }

        let mut out = String::new();
        for friend in roster.iter() {
            let marker = if selection == Some(friend.id()) {
                '*'
            } else {
                ' '
            };
            let _ = writeln!(
                out,
                "{marker} [{id}] {phrase}",
                id = friend.id(),
                phrase = Self::balance_phrase(friend),
            );
        }
        out
    }

    /// The balance read the way the user thinks about it: who owes whom.
    pub fn balance_phrase(friend: &Friend) -> String {
        let balance = friend.balance();
        match balance.signum() {
            s if s < 0 => format!("You owe {} {}€", friend.name(), balance.abs()),
            s if s > 0 => format!("{} owes you {}€", friend.name(), balance),
            _ => format!("You and {} are even", friend.name()),
        }
    }
}

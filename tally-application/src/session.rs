use tally_domain::{compute_delta, BillSplit, Friend, FriendId, Money, Roster};

use crate::{error::SessionError, model::Selection};

/// What a completed split did to the selected friend's balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitOutcome {
    pub friend_id: FriendId,
    pub delta: Money,
    pub new_balance: Money,
}

/// The single state container for one running session: the roster, the
/// active selection and the add-friend panel flag. All operations take
/// `&mut self`; nothing is shared outside it.
#[derive(Clone, Debug, Default)]
pub struct Session {
    roster: Roster,
    selection: Selection,
    show_add_friend: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roster(roster: Roster) -> Self {
        Self {
            roster,
            ..Self::default()
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn selection(&self) -> Option<FriendId> {
        self.selection.active()
    }

    pub fn add_friend_panel_open(&self) -> bool {
        self.show_add_friend
    }

    /// Shows or hides the add-friend panel. Opening the panel clears the
    /// selection: the add-friend flow and the split flow are exclusive.
    pub fn toggle_add_friend(&mut self) -> bool {
        self.show_add_friend = !self.show_add_friend;
        if self.show_add_friend {
            self.selection.clear();
        }
        self.show_add_friend
    }

    /// Adds a friend to the roster, then closes the panel and clears the
    /// selection. On a validation error the whole session is unchanged.
    pub fn add_friend(&mut self, name: &str, image_ref: &str) -> Result<Friend, SessionError> {
        let friend = self.roster.add_friend(name, image_ref)?.clone();
        self.show_add_friend = false;
        self.selection.clear();
        tracing::debug!(id = %friend.id(), name = friend.name(), "friend added");
        Ok(friend)
    }

    /// Toggles the selection and closes the add-friend panel. The caller
    /// is expected to pass a live roster id.
    pub fn select_friend(&mut self, id: FriendId) -> Option<FriendId> {
        self.show_add_friend = false;
        self.selection.select(id)
    }

    /// Runs one settlement against the selected friend: computes the
    /// delta, applies it, clears the selection. Errors leave the roster
    /// and the selection untouched.
    pub fn split_bill(&mut self, split: BillSplit) -> Result<SplitOutcome, SessionError> {
        let friend_id = self.selection.active().ok_or(SessionError::NoSelection)?;
        let delta = compute_delta(split)?;
        let new_balance = self.roster.apply_settlement(friend_id, delta)?;
        self.selection.clear();
        tracing::debug!(%friend_id, %delta, %new_balance, "bill split recorded");
        Ok(SplitOutcome {
            friend_id,
            delta,
            new_balance,
        })
    }
}

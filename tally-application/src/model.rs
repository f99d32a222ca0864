use tally_domain::FriendId;

/// At most one friend is targeted for a settlement at any time.
/// Selecting the active friend again toggles the selection off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    active: Option<FriendId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle semantics: re-selecting the active friend clears the
    /// selection, anything else replaces it. Returns the new state.
    pub fn select(&mut self, id: FriendId) -> Option<FriendId> {
        self.active = if self.active == Some(id) {
            None
        } else {
            Some(id)
        };
        self.active
    }

    pub fn clear(&mut self) -> Option<FriendId> {
        self.active = None;
        None
    }

    pub fn active(&self) -> Option<FriendId> {
        self.active
    }

    pub fn is_selected(&self, id: FriendId) -> bool {
        self.active == Some(id)
    }
}

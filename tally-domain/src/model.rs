use std::{
    fmt,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use indexmap::IndexMap;
use rust_decimal::Decimal;
use smol_str::SmolStr;
use thiserror::Error;

/// Identifier of a friend within a roster. Never reused for the lifetime
/// of the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FriendId(pub u64);

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Signed exact-decimal amount. Negative means the user owes the friend,
/// positive means the friend owes the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn amount(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn signum(self) -> i64 {
        if self.0.is_zero() {
            0
        } else if self.0.is_sign_positive() {
            1
        } else {
            -1
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// A friend and the running balance against them. Immutable once created,
/// except for the balance, which only [`Roster::apply_settlement`] touches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Friend {
    id: FriendId,
    name: SmolStr,
    image_ref: SmolStr,
    balance: Money,
}

impl Friend {
    pub fn new(
        id: FriendId,
        name: impl Into<SmolStr>,
        image_ref: impl Into<SmolStr>,
        balance: Money,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image_ref: image_ref.into(),
            balance,
        }
    }

    pub fn id(&self) -> FriendId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opaque display-image reference. Stored verbatim, never interpreted.
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    pub fn balance(&self) -> Money {
        self.balance
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("friend name must not be empty")]
    EmptyName,
    #[error("image reference must not be empty")]
    EmptyImageRef,
    #[error("no friend with id {0}")]
    UnknownFriend(FriendId),
}

/// Ordered collection of friends, keyed by id. Insertion order is
/// preserved and ids are unique for the roster's whole lifetime.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    friends: IndexMap<FriendId, Friend>,
    next_id: u64,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from pre-existing friends, e.g. the demo roster the
    /// CLI starts from. Ids allocated later start past the largest seeded id.
    pub fn with_friends<I>(friends: I) -> Self
    where
        I: IntoIterator<Item = Friend>,
    {
        let mut roster = Self::new();
        for friend in friends {
            roster.next_id = roster.next_id.max(friend.id.0 + 1);
            roster.friends.insert(friend.id, friend);
        }
        roster
    }

    /// Adds a zero-balance friend at the end of the roster and returns it.
    /// The roster is unchanged when validation fails.
    pub fn add_friend(&mut self, name: &str, image_ref: &str) -> Result<&Friend, RosterError> {
        if name.trim().is_empty() {
            return Err(RosterError::EmptyName);
        }
        if image_ref.trim().is_empty() {
            return Err(RosterError::EmptyImageRef);
        }

        let id = FriendId(self.next_id);
        self.next_id += 1;

        let friend = Friend::new(id, name, image_ref, Money::ZERO);
        tracing::debug!(%id, name, "friend added to roster");
        Ok(self.friends.entry(id).or_insert(friend))
    }

    /// Adds `delta` to the friend's balance and returns the new balance.
    /// The only way a balance changes.
    pub fn apply_settlement(&mut self, id: FriendId, delta: Money) -> Result<Money, RosterError> {
        let friend = self
            .friends
            .get_mut(&id)
            .ok_or(RosterError::UnknownFriend(id))?;
        friend.balance += delta;
        tracing::debug!(%id, %delta, balance = %friend.balance, "settlement applied");
        Ok(friend.balance)
    }

    pub fn get(&self, id: FriendId) -> Option<&Friend> {
        self.friends.get(&id)
    }

    pub fn contains(&self, id: FriendId) -> bool {
        self.friends.contains_key(&id)
    }

    /// Friends in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Friend> {
        self.friends.values()
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn add_friend_starts_at_zero_balance() {
        let mut roster = Roster::new();
        let friend = roster.add_friend("Mia", "img://x").unwrap();
        assert_eq!(friend.balance(), Money::ZERO);
        assert_eq!(friend.name(), "Mia");
    }

    #[test]
    fn add_friend_twice_same_name_gets_distinct_ids() {
        let mut roster = Roster::new();
        let first = roster.add_friend("Mia", "img://x").unwrap().id();
        let second = roster.add_friend("Mia", "img://x").unwrap().id();
        assert_ne!(first, second);
        assert_eq!(roster.len(), 2);
    }

    #[rstest]
    #[case::empty_name("", "img://x", RosterError::EmptyName)]
    #[case::blank_name("   ", "img://x", RosterError::EmptyName)]
    #[case::empty_image("Mia", "", RosterError::EmptyImageRef)]
    #[case::blank_image("Mia", "  ", RosterError::EmptyImageRef)]
    fn add_friend_rejects_missing_fields(
        #[case] name: &str,
        #[case] image_ref: &str,
        #[case] expected: RosterError,
    ) {
        let mut roster = Roster::new();
        assert_eq!(roster.add_friend(name, image_ref), Err(expected));
        assert!(roster.is_empty());
    }

    #[test]
    fn roster_preserves_insertion_order() {
        let mut roster = Roster::new();
        for name in ["Clark", "Sarah", "Anthony"] {
            roster.add_friend(name, "img://x").unwrap();
        }
        let names: Vec<&str> = roster.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["Clark", "Sarah", "Anthony"]);
        assert!(roster.iter().all(|f| f.balance().is_zero()));
    }

    #[test]
    fn apply_settlement_adds_delta() {
        let mut roster = Roster::with_friends([Friend::new(
            FriendId(933372),
            "Sarah",
            "img://sarah",
            Money::ZERO,
        )]);
        let balance = roster
            .apply_settlement(FriendId(933372), Money::from_i64(20))
            .unwrap();
        assert_eq!(balance, Money::from_i64(20));
    }

    #[test]
    fn apply_settlement_unknown_id_leaves_roster_unchanged() {
        let mut roster = Roster::new();
        roster.add_friend("Clark", "img://clark").unwrap();
        let before: Vec<Friend> = roster.iter().cloned().collect();

        let result = roster.apply_settlement(FriendId(999), Money::from_i64(5));
        assert_eq!(result, Err(RosterError::UnknownFriend(FriendId(999))));

        let after: Vec<Friend> = roster.iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn seeded_roster_allocates_fresh_ids_past_seeds() {
        let mut roster = Roster::with_friends([
            Friend::new(FriendId(118836), "Clark", "img://clark", Money::from_i64(-7)),
            Friend::new(FriendId(933372), "Sarah", "img://sarah", Money::from_i64(20)),
        ]);
        let added = roster.add_friend("Anthony", "img://anthony").unwrap();
        assert!(added.id().0 > 933372);
    }

    #[test]
    fn money_arithmetic_is_exact() {
        let total = Money::from_decimal("100.10".parse().unwrap());
        let paid = Money::from_decimal("40.05".parse().unwrap());
        assert_eq!(total - paid, Money::from_decimal("60.05".parse().unwrap()));
        assert_eq!(-paid + paid, Money::ZERO);
        assert_eq!((total - paid).signum(), 1);
        assert_eq!((-paid).abs(), paid);
    }
}

use rstest::{fixture, rstest};
use tally_application::{Session, SessionError};
use tally_domain::{BillSplit, Friend, FriendId, Money, Payer, Roster, RosterError, SplitError};

const CLARK: FriendId = FriendId(118836);
const SARAH: FriendId = FriendId(933372);
const ANTHONY: FriendId = FriendId(499476);

#[fixture]
fn session() -> Session {
    Session::with_roster(Roster::with_friends([
        Friend::new(CLARK, "Clark", "img://clark", Money::from_i64(-7)),
        Friend::new(SARAH, "Sarah", "img://sarah", Money::from_i64(20)),
        Friend::new(ANTHONY, "Anthony", "img://anthony", Money::ZERO),
    ]))
}

fn split(total: i64, paid: i64, payer: Payer) -> BillSplit {
    BillSplit {
        total: Money::from_i64(total),
        paid_by_user: Money::from_i64(paid),
        payer,
    }
}

fn balance_of(session: &Session, id: FriendId) -> Money {
    session
        .roster()
        .get(id)
        .map(Friend::balance)
        .expect("friend should exist")
}

#[rstest]
fn split_applies_delta_and_clears_selection(mut session: Session) {
    session.select_friend(SARAH);

    let outcome = session.split_bill(split(100, 40, Payer::User)).unwrap();

    assert_eq!(outcome.friend_id, SARAH);
    assert_eq!(outcome.delta, Money::from_i64(60));
    assert_eq!(outcome.new_balance, Money::from_i64(80));
    assert_eq!(balance_of(&session, SARAH), Money::from_i64(80));
    assert_eq!(session.selection(), None);
}

#[rstest]
fn split_with_friend_paying_goes_negative(mut session: Session) {
    session.select_friend(ANTHONY);

    let outcome = session.split_bill(split(100, 40, Payer::Friend)).unwrap();

    assert_eq!(outcome.delta, Money::from_i64(-40));
    assert_eq!(balance_of(&session, ANTHONY), Money::from_i64(-40));
}

#[rstest]
fn split_without_selection_is_rejected(mut session: Session) {
    let result = session.split_bill(split(100, 40, Payer::User));
    assert_eq!(result, Err(SessionError::NoSelection));
}

#[rstest]
fn failed_split_leaves_session_untouched(mut session: Session) {
    session.select_friend(CLARK);

    let result = session.split_bill(split(100, 101, Payer::User));

    assert_eq!(
        result,
        Err(SessionError::Split(SplitError::ExpenseExceedsBill {
            paid: Money::from_i64(101),
            total: Money::from_i64(100),
        }))
    );
    assert_eq!(balance_of(&session, CLARK), Money::from_i64(-7));
    assert_eq!(session.selection(), Some(CLARK));
}

#[rstest]
fn add_friend_closes_panel_and_clears_selection(mut session: Session) {
    session.select_friend(CLARK);
    session.toggle_add_friend();
    assert_eq!(session.selection(), None, "opening the panel deselects");

    let mia = session.add_friend("Mia", "img://mia").unwrap();

    assert!(!session.add_friend_panel_open());
    assert_eq!(session.selection(), None);
    assert_eq!(balance_of(&session, mia.id()), Money::ZERO);
    assert_eq!(session.roster().len(), 4);
    assert_eq!(
        session.roster().iter().last().map(Friend::id),
        Some(mia.id())
    );
}

#[rstest]
fn add_friend_validation_error_keeps_panel_open(mut session: Session) {
    session.toggle_add_friend();

    let result = session.add_friend("", "img://mia");

    assert_eq!(result, Err(SessionError::Roster(RosterError::EmptyName)));
    assert!(session.add_friend_panel_open());
    assert_eq!(session.roster().len(), 3);
}

#[rstest]
fn selecting_closes_add_panel(mut session: Session) {
    session.toggle_add_friend();
    assert!(session.add_friend_panel_open());

    session.select_friend(SARAH);

    assert!(!session.add_friend_panel_open());
    assert_eq!(session.selection(), Some(SARAH));
}

#[rstest]
fn reselecting_toggles_off(mut session: Session) {
    assert_eq!(session.select_friend(SARAH), Some(SARAH));
    assert_eq!(session.select_friend(SARAH), None);
    assert_eq!(session.select_friend(SARAH), Some(SARAH));
    assert_eq!(session.select_friend(CLARK), Some(CLARK));
}

#[test]
fn fresh_session_roster_grows_in_insertion_order() {
    let mut session = Session::new();
    for name in ["Ada", "Grace", "Edsger"] {
        session.add_friend(name, "img://avatar").unwrap();
    }

    let names: Vec<&str> = session.roster().iter().map(Friend::name).collect();
    assert_eq!(names, ["Ada", "Grace", "Edsger"]);
    assert!(session.roster().iter().all(|f| f.balance().is_zero()));
}

use super::*;

#[test]
fn empty_roster_shows_empty_state() {
    assert_eq!(RosterView::from_roster(&[]), RosterView::Empty);
}

#[test]
fn single_user_renders_one_card() {
    let roster = vec![User { id: 1, name: "Ana".to_owned(), email: "a@x.com".to_owned() }];
    let RosterView::Cards(cards) = RosterView::from_roster(&roster) else {
        panic!("expected cards");
    };
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].avatar, "A");
    assert_eq!(cards[0].name, "Ana");
    assert_eq!(cards[0].email, "a@x.com");
    assert_eq!(cards[0].id, "ID: 1");
}

#[test]
fn cards_follow_roster_order() {
    let roster = vec![
        User { id: 2, name: "Bo".to_owned(), email: "b@x.com".to_owned() },
        User { id: 1, name: "Ana".to_owned(), email: "a@x.com".to_owned() },
    ];
    let RosterView::Cards(cards) = RosterView::from_roster(&roster) else {
        panic!("expected cards");
    };
    let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["ID: 2", "ID: 1"]);
}

#[test]
fn empty_state_message_text() {
    assert!(EMPTY_ROSTER_MESSAGE.ends_with("No users registered yet"));
}

//! Algebraic laws of the chart model.
//!
//! These hold for every chart, so they are checked with generated input:
//! - decode(encode(c)) == c
//! - set is idempotent and touches only its own key
//! - remove of an absent key changes nothing
//! - no operation modifies its input

use align_model::{
    parse, remove_user, serialize, set_user, AlignmentCategory, Chart, UserEntry,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn alignment() -> impl Strategy<Value = AlignmentCategory> {
    proptest::sample::select(AlignmentCategory::ALL.to_vec())
}

/// Strings YAML would read as something other than a plain string if
/// written unquoted
const AMBIGUOUS: &[&str] = &[
    "", "null", "~", "true", "no", "0123", "1e3", "0x1F", ".inf", ": ", "- x", "#tag",
    "'quoted'", "\"dq\"", "a: b", "[1]", "{}", "*anchor", "&anchor", "!!str", "  padded ",
    "line\nbreak", "tab\there", "héllo", "名前", "🙂",
];

fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(AMBIGUOUS).prop_map(str::to_string),
        "[A-Za-z][A-Za-z0-9 _]{0,14}",
        any::<String>(),
    ]
}

fn user_id() -> impl Strategy<Value = String> {
    prop_oneof!["[1-9][0-9]{0,18}", text()]
}

fn entry() -> impl Strategy<Value = UserEntry> {
    (alignment(), text(), proptest::option::of(text()))
        .prop_map(|(a, name, avatar)| UserEntry::new(a, name, avatar))
}

fn chart() -> impl Strategy<Value = Chart> {
    (
        proptest::collection::vec((user_id(), entry()), 0..8),
        proptest::collection::vec(user_id(), 0..4),
    )
        .prop_map(|(users, admins)| {
            users
                .into_iter()
                .fold(Chart::new().with_admins(admins), |acc, (id, e)| {
                    set_user(&acc, id, e.alignment, e.display_name, e.avatar_url)
                })
        })
}

#[test]
fn empty_bytes_parse_to_empty_chart() {
    let chart = parse(b"").unwrap();
    assert_eq!(chart, Chart::new());
    assert_eq!(chart.admins().count(), 0);
}

#[test]
fn set_then_remove_scenario() {
    let empty = parse(b"").unwrap();
    let set = set_user(&empty, "123", AlignmentCategory::LawfulGood, "Tester", None);

    assert_eq!(set.len(), 1);
    assert_eq!(
        set.get("123"),
        Some(&UserEntry::new(AlignmentCategory::LawfulGood, "Tester", None))
    );
    assert_eq!(set.admins().count(), 0);

    let removed = remove_user(&set, "123");
    assert_eq!(removed, Chart::new());
    assert!(set.contains_user("123"));
}

#[test]
fn serialized_layout_matches_file_format() {
    let chart = set_user(
        &Chart::new().with_admins(["111"]),
        "111",
        AlignmentCategory::ChaoticGood,
        "EpicUser",
        Some("https://cdn.example/a.png".to_string()),
    );
    let text = String::from_utf8(serialize(&chart).unwrap()).unwrap();

    assert_eq!(
        text,
        "users:\n  '111':\n    alignment: Chaotic Good\n    display_name: EpicUser\n    avatar_url: https://cdn.example/a.png\nadmins:\n- '111'\n"
    );
}

proptest! {
    #[test]
    fn prop_round_trip(c in chart()) {
        let bytes = serialize(&c).unwrap();
        prop_assert_eq!(parse(&bytes).unwrap(), c);
    }

    #[test]
    fn prop_serialize_is_deterministic(c in chart()) {
        prop_assert_eq!(serialize(&c).unwrap(), serialize(&c.clone()).unwrap());
    }

    #[test]
    fn prop_set_is_idempotent(c in chart(), id in user_id(), e in entry()) {
        let once = set_user(&c, id.as_str(), e.alignment, e.display_name.clone(), e.avatar_url.clone());
        let twice = set_user(&once, id.as_str(), e.alignment, e.display_name, e.avatar_url);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_set_does_not_touch_other_keys(c in chart(), id in user_id(), e in entry()) {
        let updated = set_user(&c, id.as_str(), e.alignment, e.display_name, e.avatar_url);
        for (other, before) in c.users().filter(|(other, _)| other.as_str() != id) {
            prop_assert_eq!(updated.get(other.as_str()), Some(before));
        }
        prop_assert_eq!(updated.admins().count(), c.admins().count());
    }

    #[test]
    fn prop_remove_absent_is_noop(c in chart(), id in user_id()) {
        prop_assume!(!c.contains_user(&id));
        prop_assert_eq!(remove_user(&c, &id), c);
    }

    #[test]
    fn prop_mutations_leave_input_unchanged(c in chart(), id in user_id(), e in entry()) {
        let snapshot = c.clone();
        let bytes_before = serialize(&c).unwrap();

        let _ = set_user(&c, id.as_str(), e.alignment, e.display_name, e.avatar_url);
        let _ = remove_user(&c, &id);

        prop_assert_eq!(&c, &snapshot);
        prop_assert_eq!(serialize(&c).unwrap(), bytes_before);
    }
}

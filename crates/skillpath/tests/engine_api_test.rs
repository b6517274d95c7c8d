//! Integration tests for the public engine API.

use skillpath::{
    BuildOrderEngine,
    config::{AppConfig, LimitsConfig},
    group::{Connector, Group},
    icon::{IconRef, NoIcons, SlotIconResolver},
    identifier::Id,
    slot::SlotType,
};

fn engine() -> BuildOrderEngine {
    BuildOrderEngine::default()
}

/// Collect every (slot, level) the diagram contains, in pattern order.
fn leveled_slots(groups: &[Group]) -> Vec<(SlotType, u32)> {
    let mut slots = Vec::new();
    for group in groups {
        match group {
            Group::Single(single) => slots.push((single.event().slot(), single.event().level())),
            Group::Parallel(parallel) => {
                for pair in parallel.pairs() {
                    slots.push((pair.first().slot(), pair.first().level()));
                    slots.push((pair.second().slot(), pair.second().level()));
                }
            }
        }
    }
    slots
}

#[test]
fn test_digit_only_patterns_count_events_and_levels() {
    for pattern in ["0", "0123", "00112233", "3210"] {
        let diagram = engine().evaluate(pattern);
        assert!(diagram.is_valid(), "`{pattern}` should be valid");

        let slots = leveled_slots(diagram.groups());
        assert_eq!(slots.len(), pattern.len(), "one event per digit in `{pattern}`");

        // Each slot's final counter equals the count of its digit.
        for slot in SlotType::ALL {
            let digit_count = pattern.chars().filter(|&c| c == slot.digit()).count() as u32;
            let final_level = slots
                .iter()
                .filter(|(s, _)| *s == slot)
                .map(|(_, level)| *level)
                .max()
                .unwrap_or(0);
            assert_eq!(final_level, digit_count, "counter for {slot} in `{pattern}`");
        }
    }
}

#[test]
fn test_explicit_pair_diagram() {
    let diagram = engine().evaluate("[12]");
    assert!(diagram.is_valid());
    assert_eq!(diagram.groups().len(), 1);

    match &diagram.groups()[0] {
        Group::Parallel(parallel) => {
            assert_eq!(parallel.pairs().len(), 1);
            assert_eq!(parallel.character_level(), 2);
            assert_eq!(parallel.end_character_level(), 3);

            let pair = &parallel.pairs()[0];
            assert_eq!(pair.first().slot(), SlotType::Active);
            assert_eq!(pair.first().level(), 1);
            assert_eq!(pair.second().slot(), SlotType::Weapon1);
            assert_eq!(pair.second().level(), 1);
        }
        other => panic!("expected parallel group, got {other:?}"),
    }
}

#[test]
fn test_implicit_prefix_equivalent_to_explicit() {
    let implicit = engine().evaluate("12XYZ");
    let explicit = engine().evaluate("[12]XYZ");

    assert_eq!(implicit.normalized_pattern(), explicit.normalized_pattern());
    assert_eq!(implicit.groups(), explicit.groups());
    assert_eq!(
        implicit.validation().errors().len(),
        explicit.validation().errors().len()
    );
    assert!(!implicit.is_valid(), "X, Y, Z are not notation characters");
}

#[test]
fn test_delayed_pick_diagram() {
    let diagram = engine().evaluate("(0)1");
    assert!(diagram.is_valid());
    assert_eq!(diagram.groups().len(), 2);

    match &diagram.groups()[0] {
        Group::Single(single) => {
            assert_eq!(single.event().slot(), SlotType::Passive);
            assert!(single.event().event().is_delayed());
            assert_eq!(single.event().level(), 1);
            assert_eq!(single.character_level(), 2);
            assert_eq!(single.connector(), Some(Connector::Straight));
        }
        other => panic!("expected single group, got {other:?}"),
    }

    match &diagram.groups()[1] {
        Group::Single(single) => {
            assert_eq!(single.event().slot(), SlotType::Active);
            assert_eq!(single.event().level(), 1);
            assert_eq!(single.character_level(), 3);
            assert_eq!(single.connector(), None);
        }
        other => panic!("expected single group, got {other:?}"),
    }
}

#[test]
fn test_negative_effect_suppresses_connector() {
    let diagram = engine().evaluate("-012");
    assert!(diagram.is_valid());
    assert_eq!(diagram.groups().len(), 3);

    match &diagram.groups()[0] {
        Group::Single(single) => {
            assert_eq!(single.event().slot(), SlotType::Passive);
            assert!(single.event().has_negative_effect());
            assert_eq!(single.event().level(), 1);
            // No connector from a negative-effect event to what follows.
            assert_eq!(single.connector(), None);
        }
        other => panic!("expected single group, got {other:?}"),
    }
    assert_eq!(diagram.groups()[1].connector(), Some(Connector::Straight));
}

#[test]
fn test_connector_table_full_walk() {
    // single → single → parallel → parallel → single
    let diagram = engine().evaluate("(0)1[23][01]2");
    assert!(diagram.is_valid());

    let connectors: Vec<Option<Connector>> =
        diagram.groups().iter().map(Group::connector).collect();
    assert_eq!(
        connectors,
        vec![
            Some(Connector::Straight),
            Some(Connector::Diverge),
            Some(Connector::ConvergeDiverge),
            Some(Connector::Converge),
            None,
        ]
    );
}

#[test]
fn test_character_levels_step_without_gaps() {
    let diagram = engine().evaluate("[12]0[31]2");
    assert!(diagram.is_valid());

    let groups = diagram.groups();
    assert_eq!(groups[0].character_level(), 2);
    for window in groups.windows(2) {
        assert_eq!(
            window[1].character_level(),
            window[0].end_character_level() + 1,
            "character levels must be gapless"
        );
    }
    assert_eq!(groups[3].character_level(), 7);
}

#[test]
fn test_malformed_brackets_never_fault() {
    for (pattern, position) in [("[1]", 2), ("[123]", 3)] {
        let diagram = engine().evaluate(pattern);

        assert!(!diagram.is_valid(), "`{pattern}` should be invalid");
        let first = diagram.validation().first_error().unwrap();
        assert_eq!(first.position(), Some(position), "position for `{pattern}`");
    }
}

#[test]
fn test_empty_pattern_is_invalid() {
    let diagram = engine().evaluate("");
    assert!(!diagram.is_valid());
    assert!(diagram.groups().is_empty());
}

#[test]
fn test_length_bound_from_config() {
    let config = AppConfig::new(LimitsConfig::new(Some(4)));
    let diagram = BuildOrderEngine::new(config).evaluate("01230123");

    assert!(!diagram.is_valid());
    assert!(diagram.groups().is_empty());
}

#[test]
fn test_evaluation_is_deterministic() {
    let first = engine().evaluate("-0[12](3)012");
    let second = engine().evaluate("-0[12](3)012");

    assert_eq!(first.normalized_pattern(), second.normalized_pattern());
    assert_eq!(first.groups(), second.groups());
    assert_eq!(first.icons(), second.icons());
}

/// Resolver serving one icon per slot from a fixed naming scheme.
struct FixedIcons;

impl SlotIconResolver for FixedIcons {
    fn resolve_slot_icon(&self, character: Id, slot: SlotType, faction: Id) -> Option<IconRef> {
        Some(IconRef::new(format!("{faction}/{character}/{slot}.png")))
    }
}

#[test]
fn test_icon_decoration() {
    let diagram = engine().evaluate_for(
        "[12]0",
        Id::new("ranger"),
        Id::new("wardens"),
        &FixedIcons,
    );

    assert!(diagram.is_valid());
    assert_eq!(
        diagram.icons().get(SlotType::Passive).map(IconRef::key),
        Some("wardens/ranger/passive.png")
    );
}

#[test]
fn test_missing_icons_are_not_an_error() {
    let diagram = engine().evaluate_for("[12]0", Id::new("ranger"), Id::new("wardens"), &NoIcons);

    assert!(diagram.is_valid());
    assert!(diagram.icons().is_empty());
}

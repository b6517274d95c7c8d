//! The grouper and connector topology.
//!
//! Folds the leveled event list into the [`Group`]s the renderer
//! consumes: adjacent pairs sharing a bracket group merge into one
//! parallel block, every group gets its character level numbering, and
//! each adjacent group pair gets its connector classification.
//!
//! Grouping is per bracket group, not "any adjacent parallel events":
//! independently bracketed pairs like `[12][03]` stay two distinct
//! groups with a converge-diverge connector between them.

use skillpath_core::group::{Connector, Group, ParallelGroup, SingleGroup};

use crate::levels::LeveledItem;

/// The character level of the first group.
///
/// Level 1 is pre-granted and not part of the build string.
const FIRST_CHARACTER_LEVEL: u32 = 2;

/// Fold leveled items into groups with character levels and connectors.
pub(crate) fn build_groups(items: Vec<LeveledItem>) -> Vec<Group> {
    let mut groups = Vec::new();
    let mut next_level = FIRST_CHARACTER_LEVEL;

    let mut iter = items.into_iter().peekable();
    while let Some(item) = iter.next() {
        let group = match item {
            LeveledItem::Single(event) => Group::Single(SingleGroup::new(event, next_level)),
            LeveledItem::Pair(pair) => {
                let shared_group = pair.bracket_group();
                let mut pairs = vec![pair];
                while matches!(
                    iter.peek(),
                    Some(LeveledItem::Pair(next)) if next.bracket_group() == shared_group
                ) {
                    if let Some(LeveledItem::Pair(next)) = iter.next() {
                        pairs.push(next);
                    }
                }
                Group::Parallel(ParallelGroup::new(pairs, next_level))
            }
        };

        next_level += group.advance();
        groups.push(group);
    }

    assign_connectors(&mut groups);
    groups
}

/// Classify the connector between every adjacent group pair.
///
/// The final group never has an outgoing connector, and a group whose
/// last event carries the negative-effect marker has its connector
/// suppressed.
fn assign_connectors(groups: &mut [Group]) {
    for index in 0..groups.len() {
        let connector = if index + 1 == groups.len() || groups[index].suppresses_outgoing_connector()
        {
            None
        } else {
            Some(classify(
                groups[index].is_parallel(),
                groups[index + 1].is_parallel(),
            ))
        };
        groups[index].set_connector(connector);
    }
}

fn classify(from_parallel: bool, to_parallel: bool) -> Connector {
    match (from_parallel, to_parallel) {
        (false, false) => Connector::Straight,
        (false, true) => Connector::Diverge,
        (true, false) => Connector::Converge,
        (true, true) => Connector::ConvergeDiverge,
    }
}

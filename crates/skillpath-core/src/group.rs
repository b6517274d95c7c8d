//! Diagram groups and connector classification.
//!
//! The grouper folds the leveled event list into [`Group`]s, the unit the
//! rendering layer consumes. A group is either a single event or a
//! contiguous run of parallel pairs sharing one bracket group, and carries
//! its character level numbering plus the classification of the connector
//! leading to the next group.
//!
//! # Pipeline position
//!
//! ```text
//! Pattern string
//!     ↓ preprocess + tokenize + parse + validate   (skillpath-parser)
//! BuildEvent list
//!     ↓ level counter
//! LeveledEvent / LeveledPair list
//!     ↓ grouper
//! Groups (these types) — consumed by the diagram renderer
//! ```

use serde::Serialize;

use crate::event::{LeveledEvent, LeveledPair};

/// Classification of the connector drawn from one group to the next.
///
/// This is the full contract a renderer implements; the engine emits only
/// the classification, never pixel geometry. A suppressed connector (after
/// a negative-effect event, or after the final group) is represented as
/// `None` on the group itself. Within a parallel group, consecutive pairs
/// connect pairwise with straight lines; that rule is implicit in the
/// group structure and needs no classification here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Connector {
    /// Single event to single event: one straight line.
    Straight,
    /// Single event to parallel group: fan out to two.
    Diverge,
    /// Parallel group to single event: fan in to one.
    Converge,
    /// Parallel group to a different parallel group: fan in, then out.
    ConvergeDiverge,
}

/// The unit of diagram layout passed to the rendering layer.
///
/// Expressed as a tagged variant so every consumer handles both shapes
/// explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    /// A lone event occupying one character level.
    Single(SingleGroup),
    /// A run of parallel pairs occupying two character levels per pair.
    Parallel(ParallelGroup),
}

impl Group {
    /// The character level at which this group starts.
    pub fn character_level(&self) -> u32 {
        match self {
            Group::Single(group) => group.character_level(),
            Group::Parallel(group) => group.character_level(),
        }
    }

    /// The character level at which this group ends.
    ///
    /// Equal to [`Self::character_level`] for single groups.
    pub fn end_character_level(&self) -> u32 {
        match self {
            Group::Single(group) => group.character_level(),
            Group::Parallel(group) => group.end_character_level(),
        }
    }

    /// How many character levels this group consumes.
    pub fn advance(&self) -> u32 {
        match self {
            Group::Single(_) => 1,
            Group::Parallel(group) => 2 * group.pairs().len() as u32,
        }
    }

    /// The outgoing connector classification, `None` if suppressed or last.
    pub fn connector(&self) -> Option<Connector> {
        match self {
            Group::Single(group) => group.connector(),
            Group::Parallel(group) => group.connector(),
        }
    }

    /// Whether this is a parallel group.
    pub fn is_parallel(&self) -> bool {
        matches!(self, Group::Parallel(_))
    }

    /// Whether the outgoing connector must be suppressed because the
    /// group's final event carries the negative-effect marker.
    pub fn suppresses_outgoing_connector(&self) -> bool {
        match self {
            Group::Single(group) => group.event().has_negative_effect(),
            Group::Parallel(group) => group
                .pairs()
                .last()
                .is_some_and(|pair| pair.has_negative_effect()),
        }
    }

    /// Set the outgoing connector classification.
    ///
    /// Called by the topology pass once both neighbours of the group are
    /// known; `None` suppresses the connector.
    pub fn set_connector(&mut self, connector: Option<Connector>) {
        match self {
            Group::Single(group) => group.connector = connector,
            Group::Parallel(group) => group.connector = connector,
        }
    }
}

/// A group holding exactly one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SingleGroup {
    event: LeveledEvent,
    character_level: u32,
    connector: Option<Connector>,
}

impl SingleGroup {
    /// Create a single-event group at the given character level.
    ///
    /// The connector starts unset; the topology pass fills it in.
    pub fn new(event: LeveledEvent, character_level: u32) -> Self {
        Self {
            event,
            character_level,
            connector: None,
        }
    }

    /// The group's one event.
    pub fn event(&self) -> &LeveledEvent {
        &self.event
    }

    /// The character level this event is taken at.
    pub fn character_level(&self) -> u32 {
        self.character_level
    }

    /// The outgoing connector classification.
    pub fn connector(&self) -> Option<Connector> {
        self.connector
    }
}

/// A group holding one or more parallel pairs with a shared bracket group.
///
/// The validated grammar admits exactly one pair per bracket, so groups
/// built from well-formed patterns hold a single pair; the type stays
/// general because character-level accounting extends naturally to longer
/// runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParallelGroup {
    pairs: Vec<LeveledPair>,
    character_level: u32,
    end_character_level: u32,
    connector: Option<Connector>,
}

impl ParallelGroup {
    /// Create a parallel group starting at the given character level.
    ///
    /// The end level is derived from the pair count: each pair spans two
    /// character levels.
    pub fn new(pairs: Vec<LeveledPair>, character_level: u32) -> Self {
        debug_assert!(!pairs.is_empty(), "parallel groups hold at least one pair");
        let end_character_level = character_level + (2 * pairs.len() as u32).max(1) - 1;
        Self {
            pairs,
            character_level,
            end_character_level,
            connector: None,
        }
    }

    /// The pairs in this group, in pattern order.
    pub fn pairs(&self) -> &[LeveledPair] {
        &self.pairs
    }

    /// The character level at which this group starts.
    pub fn character_level(&self) -> u32 {
        self.character_level
    }

    /// The character level at which this group ends.
    pub fn end_character_level(&self) -> u32 {
        self.end_character_level
    }

    /// The outgoing connector classification.
    pub fn connector(&self) -> Option<Connector> {
        self.connector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{BracketGroupId, BuildEvent};
    use crate::slot::SlotType;

    fn single_event(slot: SlotType, source_index: usize, level: u32) -> LeveledEvent {
        LeveledEvent::new(BuildEvent::single(slot, source_index), level)
    }

    fn pair(group: u32, negative_second: bool) -> LeveledPair {
        let id = BracketGroupId::new(group);
        let first = LeveledEvent::new(BuildEvent::paired(SlotType::Active, 1, id), 1);
        let second = LeveledEvent::new(
            BuildEvent::paired(SlotType::Weapon1, 2, id).with_negative_effect(negative_second),
            1,
        );
        LeveledPair::new(first, second)
    }

    #[test]
    fn test_single_group_levels() {
        let group = Group::Single(SingleGroup::new(
            single_event(SlotType::Passive, 0, 1),
            2,
        ));

        assert_eq!(group.character_level(), 2);
        assert_eq!(group.end_character_level(), 2);
        assert_eq!(group.advance(), 1);
        assert!(!group.is_parallel());
    }

    #[test]
    fn test_parallel_group_levels() {
        let group = Group::Parallel(ParallelGroup::new(vec![pair(0, false)], 2));

        assert_eq!(group.character_level(), 2);
        assert_eq!(group.end_character_level(), 3);
        assert_eq!(group.advance(), 2);
        assert!(group.is_parallel());
    }

    #[test]
    fn test_two_pair_group_spans_four_levels() {
        let group = Group::Parallel(ParallelGroup::new(vec![pair(0, false), pair(0, false)], 4));

        assert_eq!(group.character_level(), 4);
        assert_eq!(group.end_character_level(), 7);
        assert_eq!(group.advance(), 4);
    }

    #[test]
    fn test_negative_effect_suppression() {
        let plain = Group::Single(SingleGroup::new(single_event(SlotType::Passive, 0, 1), 2));
        assert!(!plain.suppresses_outgoing_connector());

        let negative = Group::Single(SingleGroup::new(
            LeveledEvent::new(
                BuildEvent::single(SlotType::Passive, 0).with_negative_effect(true),
                1,
            ),
            2,
        ));
        assert!(negative.suppresses_outgoing_connector());

        let negative_pair = Group::Parallel(ParallelGroup::new(vec![pair(0, true)], 2));
        assert!(negative_pair.suppresses_outgoing_connector());
    }

    #[test]
    fn test_set_connector() {
        let mut group = Group::Single(SingleGroup::new(single_event(SlotType::Active, 0, 1), 2));
        assert_eq!(group.connector(), None);

        group.set_connector(Some(Connector::Straight));
        assert_eq!(group.connector(), Some(Connector::Straight));
    }
}

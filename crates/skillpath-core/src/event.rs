//! Build events: the parsed and leveled units of a build-order pattern.
//!
//! A pattern parses into an ordered list of [`BuildEvent`]s. Each event is
//! one level-up pick for one slot; the two halves of a parallel pair are
//! two events sharing a [`BracketGroupId`]. The level counter later
//! augments events into [`LeveledEvent`]s and folds pair halves into
//! [`LeveledPair`]s.

use serde::Serialize;

use crate::slot::SlotType;

/// Identifier shared by the two events that form one parallel pair.
///
/// Ids are allocated left to right during parsing and are unique within a
/// single parsed pattern. They carry no meaning across patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BracketGroupId(u32);

impl BracketGroupId {
    /// Create an id from its raw index.
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// The raw index of this id.
    pub fn index(&self) -> u32 {
        self.0
    }
}

/// One parsed unit of the build sequence.
///
/// Events preserve the original left-to-right pattern order and their
/// `source_index` values are strictly increasing. The index points at the
/// slot digit within the *normalized* pattern (after leading-pair
/// rewriting) and is used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildEvent {
    slot: SlotType,
    is_delayed: bool,
    has_negative_effect: bool,
    bracket_group: Option<BracketGroupId>,
    source_index: usize,
}

impl BuildEvent {
    /// Create a plain single event with default flags.
    pub fn single(slot: SlotType, source_index: usize) -> Self {
        Self {
            slot,
            is_delayed: false,
            has_negative_effect: false,
            bracket_group: None,
            source_index,
        }
    }

    /// Create one half of a parallel pair.
    pub fn paired(slot: SlotType, source_index: usize, group: BracketGroupId) -> Self {
        Self {
            bracket_group: Some(group),
            ..Self::single(slot, source_index)
        }
    }

    /// Mark this event as a delayed (held) pick.
    pub fn with_delayed(mut self, is_delayed: bool) -> Self {
        self.is_delayed = is_delayed;
        self
    }

    /// Mark this event's effect as a net negative.
    pub fn with_negative_effect(mut self, has_negative_effect: bool) -> Self {
        self.has_negative_effect = has_negative_effect;
        self
    }

    /// The slot this event levels up.
    pub fn slot(&self) -> SlotType {
        self.slot
    }

    /// Whether the pick is deliberately held rather than spent immediately.
    pub fn is_delayed(&self) -> bool {
        self.is_delayed
    }

    /// Whether the pick's effect is a net negative.
    ///
    /// Negative-effect events never get an outgoing connector in the
    /// derived diagram topology.
    pub fn has_negative_effect(&self) -> bool {
        self.has_negative_effect
    }

    /// The pair id, present iff this event is one half of a parallel pair.
    pub fn bracket_group(&self) -> Option<BracketGroupId> {
        self.bracket_group
    }

    /// Whether this event is one half of a parallel pair.
    pub fn is_parallel(&self) -> bool {
        self.bracket_group.is_some()
    }

    /// Byte offset of the slot digit in the normalized pattern.
    pub fn source_index(&self) -> usize {
        self.source_index
    }
}

/// A [`BuildEvent`] augmented with the slot's counter value after the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeveledEvent {
    event: BuildEvent,
    level: u32,
}

impl LeveledEvent {
    /// Attach a counter value to an event.
    pub fn new(event: BuildEvent, level: u32) -> Self {
        Self { event, level }
    }

    /// The underlying parsed event.
    pub fn event(&self) -> &BuildEvent {
        &self.event
    }

    /// The slot's running counter value after this event.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// The slot this event levels up.
    pub fn slot(&self) -> SlotType {
        self.event.slot()
    }

    /// Whether the pick's effect is a net negative.
    pub fn has_negative_effect(&self) -> bool {
        self.event.has_negative_effect()
    }
}

/// The two leveled halves of one parallel pair.
///
/// Both halves advance their respective slot counters in lock-step; the
/// partner's counter value plays the role the data model calls the
/// "parallel current level".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeveledPair {
    first: LeveledEvent,
    second: LeveledEvent,
}

impl LeveledPair {
    /// Pair up two leveled events.
    ///
    /// Both events must carry the same [`BracketGroupId`]; the parser only
    /// ever emits pair halves adjacently, so this holds by construction.
    pub fn new(first: LeveledEvent, second: LeveledEvent) -> Self {
        debug_assert_eq!(
            first.event().bracket_group(),
            second.event().bracket_group(),
            "pair halves must share a bracket group"
        );
        Self { first, second }
    }

    /// The left half of the pair.
    pub fn first(&self) -> &LeveledEvent {
        &self.first
    }

    /// The right half of the pair.
    pub fn second(&self) -> &LeveledEvent {
        &self.second
    }

    /// The shared pair id.
    pub fn bracket_group(&self) -> Option<BracketGroupId> {
        self.first.event().bracket_group()
    }

    /// Whether either half carries the negative-effect marker.
    pub fn has_negative_effect(&self) -> bool {
        self.first.has_negative_effect() || self.second.has_negative_effect()
    }
}

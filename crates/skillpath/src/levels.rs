//! The level counter.
//!
//! Walks the validated event list left to right, maintaining one running
//! counter per skill slot. A single event bumps its slot's counter; the
//! two halves of a parallel pair bump both their slots in lock-step.
//! Counters are monotonic and never reset mid-pattern.

use skillpath_core::event::{BuildEvent, LeveledEvent, LeveledPair};

/// One leveled unit: a lone event or a consumed pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LeveledItem {
    Single(LeveledEvent),
    Pair(LeveledPair),
}

/// Assign per-slot level numbers to the event list.
///
/// Pair halves are emitted adjacently by the parser; a half whose partner
/// is missing (possible only in best-effort output for malformed input)
/// is leveled as a single event.
pub(crate) fn assign_levels(events: &[BuildEvent]) -> Vec<LeveledItem> {
    fn bump(counters: &mut [u32; 4], event: BuildEvent) -> LeveledEvent {
        counters[event.slot().index()] += 1;
        LeveledEvent::new(event, counters[event.slot().index()])
    }

    let mut counters = [0u32; 4];
    let mut items = Vec::new();

    let mut index = 0;
    while index < events.len() {
        let event = events[index];
        let partner = events.get(index + 1).copied().filter(|next| {
            event.bracket_group().is_some() && next.bracket_group() == event.bracket_group()
        });

        match partner {
            Some(partner) => {
                let first = bump(&mut counters, event);
                let second = bump(&mut counters, partner);
                items.push(LeveledItem::Pair(LeveledPair::new(first, second)));
                index += 2;
            }
            None => {
                items.push(LeveledItem::Single(bump(&mut counters, event)));
                index += 1;
            }
        }
    }

    items
}

//! The slot icon lookup capability.
//!
//! The engine decorates its output with icon references for the slots a
//! pattern touches, but it never resolves assets itself: the surrounding
//! application supplies a [`SlotIconResolver`]. A missing icon is a normal
//! outcome, never an error.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{identifier::Id, slot::SlotType};

/// Reference to an icon asset, opaque to the engine.
///
/// The key is whatever the application's asset pipeline understands (a
/// sprite path, a CDN key). The engine only carries it through to the
/// rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconRef(String);

impl IconRef {
    /// Create an icon reference from an asset key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The asset key.
    pub fn key(&self) -> &str {
        &self.0
    }
}

/// Capability for resolving the icon of a skill slot.
///
/// Implemented by the surrounding application; the engine only invokes it.
/// Resolution may depend on which character the build belongs to and on
/// the character's faction (factions reskin the shared slots).
pub trait SlotIconResolver {
    /// Look up the icon for `slot` of `character` in `faction`.
    ///
    /// Returning `None` means the slot renders without an icon; it is not
    /// a failure.
    fn resolve_slot_icon(&self, character: Id, slot: SlotType, faction: Id) -> Option<IconRef>;
}

/// Resolver that never finds an icon.
///
/// Used when the caller has no asset context, e.g. in tests or headless
/// validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIcons;

impl SlotIconResolver for NoIcons {
    fn resolve_slot_icon(&self, _character: Id, _slot: SlotType, _faction: Id) -> Option<IconRef> {
        None
    }
}

/// Resolved icon decoration for a diagram, one entry per slot that has one.
///
/// Iteration order follows [`SlotType::ALL`], so renderers see slots in a
/// stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SlotIcons {
    icons: IndexMap<SlotType, IconRef>,
}

impl SlotIcons {
    /// An empty decoration, for output produced without an asset context.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolve icons for all four slots of `character` in `faction`.
    ///
    /// Slots the resolver knows nothing about are simply absent.
    pub fn resolve(character: Id, faction: Id, resolver: &dyn SlotIconResolver) -> Self {
        let mut icons = IndexMap::new();
        for slot in SlotType::ALL {
            if let Some(icon) = resolver.resolve_slot_icon(character, slot, faction) {
                icons.insert(slot, icon);
            }
        }
        Self { icons }
    }

    /// The icon for `slot`, if one resolved.
    pub fn get(&self, slot: SlotType) -> Option<&IconRef> {
        self.icons.get(&slot)
    }

    /// Whether no icons resolved at all.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Iterate over the resolved icons in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotType, &IconRef)> {
        self.icons.iter().map(|(slot, icon)| (*slot, icon))
    }
}

//! Identifier management using string interning for efficient storage and comparison
//!
//! This module provides the [`Id`] type used to name characters and
//! factions when resolving slot icons. Identity keys are compared often
//! and copied freely, so they are interned once and passed around as
//! symbols.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> &'static Mutex<DefaultStringInterner> {
    INTERNER.get_or_init(|| Mutex::new(DefaultStringInterner::new()))
}

/// Efficient identifier type using string interning
///
/// Used for the character and faction identity keys handed to
/// [`SlotIconResolver`](crate::icon::SlotIconResolver).
///
/// # Examples
///
/// ```
/// use skillpath_core::identifier::Id;
///
/// let character = Id::new("ranger");
/// let faction = Id::new("wardens");
///
/// assert_eq!(character, "ranger");
/// assert_ne!(character, faction);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Examples
    ///
    /// ```
    /// use skillpath_core::identifier::Id;
    ///
    /// let character_id = Id::new("ranger");
    /// ```
    pub fn new(name: &str) -> Self {
        let mut interner = interner().lock().expect("Failed to acquire interner lock");
        Self(interner.get_or_intern(name))
    }

    /// Resolve this identifier back to its string representation.
    pub fn resolve(&self) -> String {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        interner
            .resolve(self.0)
            .expect("Symbol should exist in interner")
            .to_string()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice
    ///
    /// This is a convenience implementation that calls `Id::new`.
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    /// Allows direct comparison with string references: `id == &string`
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_same_id() {
        assert_eq!(Id::new("ranger"), Id::new("ranger"));
    }

    #[test]
    fn test_different_names_differ() {
        assert_ne!(Id::new("ranger"), Id::new("warden"));
    }

    #[test]
    fn test_resolve_round_trip() {
        let id = Id::new("ironclad");
        assert_eq!(id.resolve(), "ironclad");
        assert_eq!(id.to_string(), "ironclad");
    }

    #[test]
    fn test_string_comparison() {
        let id = Id::new("wardens");
        assert!(id == "wardens");
        assert!(id != "rangers");
    }

    #[test]
    fn test_from_str_slice() {
        let id: Id = "nomad".into();
        assert_eq!(id, "nomad");
    }
}

//! Leading-pair normalization.
//!
//! A build commonly opens with two simultaneous first picks, written as
//! two bare digits: `12...`. That spelling is ambiguous with two ordinary
//! sequential picks, so the notation defines it to mean a parallel pair.
//! Rather than special-casing the head inside the parser, the rewrite is
//! an explicit pure function applied once before tokenizing: `12...`
//! becomes `[12]...`.
//!
//! All downstream positions (token spans, event source indexes,
//! diagnostic labels) refer to the normalized string this function
//! returns, which makes `12XYZ` and `[12]XYZ` produce byte-identical
//! results.

use std::borrow::Cow;

use skillpath_core::slot::SlotType;

/// Rewrite a leading bare digit pair as an explicit parallel pair.
///
/// Applies at most once, only at the head of the pattern, and only when
/// both of the first two characters are plain slot digits. Everything
/// else is returned unchanged.
///
/// # Examples
///
/// ```
/// # use skillpath_parser::normalize;
///
/// assert_eq!(normalize("120"), "[12]0");
/// assert_eq!(normalize("[12]0"), "[12]0");
/// assert_eq!(normalize("(0)1"), "(0)1");
/// assert_eq!(normalize("-012"), "-012");
/// ```
pub fn normalize(pattern: &str) -> Cow<'_, str> {
    let mut chars = pattern.chars();
    let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
        return Cow::Borrowed(pattern);
    };

    if SlotType::from_digit(first).is_none() || SlotType::from_digit(second).is_none() {
        return Cow::Borrowed(pattern);
    }

    let rest = chars.as_str();
    Cow::Owned(format!("[{first}{second}]{rest}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrites_leading_digit_pair() {
        assert_eq!(normalize("12"), "[12]");
        assert_eq!(normalize("120"), "[12]0");
        assert_eq!(normalize("0123"), "[01]23");
    }

    #[test]
    fn test_applies_only_at_the_head() {
        // The digits at positions 2.. stay sequential picks.
        assert_eq!(normalize("[12]03"), "[12]03");
        assert_eq!(normalize("(0)12"), "(0)12");
    }

    #[test]
    fn test_leaves_short_patterns_alone() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("1"), "1");
    }

    #[test]
    fn test_leaves_non_digit_heads_alone() {
        assert_eq!(normalize("-012"), "-012");
        assert_eq!(normalize("[12]"), "[12]");
        assert_eq!(normalize("(1)2"), "(1)2");
        assert_eq!(normalize("x12"), "x12");
        assert_eq!(normalize("1x2"), "1x2");
    }

    #[test]
    fn test_borrows_when_unchanged() {
        assert!(matches!(normalize("[12]"), Cow::Borrowed(_)));
        assert!(matches!(normalize("12"), Cow::Owned(_)));
    }
}

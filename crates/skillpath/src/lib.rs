//! Skillpath - the skill build-order notation engine.
//!
//! Parsing, validation, level counting, and diagram topology for the
//! compact build-order notation: a pattern string like `(0)1[23]` encodes
//! a recommended per-level upgrade sequence, and the engine derives the
//! structured diagram a rendering layer draws from it.
//!
//! The engine is a pure, synchronous transformation: no I/O, no shared
//! state, and malformed input is always a normal, representable outcome.

pub mod config;

mod error;
mod levels;
mod topology;

pub use skillpath_core::{event, group, icon, identifier, slot};
pub use skillpath_parser::{
    Diagnostic, ErrorCode, ParseError, Severity, Span, ValidationResult, normalize,
};

pub use error::SkillpathError;

use log::{debug, info, trace};
use serde::Serialize;

use skillpath_core::{
    group::Group,
    icon::{SlotIconResolver, SlotIcons},
    identifier::Id,
};

use config::AppConfig;

/// The structured result of evaluating one build-order pattern.
///
/// This is the full contract with the two external consumers: the
/// diagram renderer reads [`Self::groups`] and [`Self::icons`], the
/// error-display surface reads [`Self::validation`]. All positions in
/// the result index [`Self::normalized_pattern`].
#[derive(Debug, Clone, Serialize)]
pub struct BuildDiagram {
    normalized_pattern: String,
    groups: Vec<Group>,
    validation: ValidationResult,
    icons: SlotIcons,
}

impl BuildDiagram {
    /// The pattern after leading-pair normalization.
    pub fn normalized_pattern(&self) -> &str {
        &self.normalized_pattern
    }

    /// The ordered diagram groups, best-effort when the pattern is invalid.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// The validation outcome.
    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    /// The resolved slot icon decoration.
    pub fn icons(&self) -> &SlotIcons {
        &self.icons
    }

    /// Whether the pattern is well-formed enough to render.
    pub fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }
}

/// The build-order engine.
///
/// This provides an API for evaluating build-order patterns through
/// parsing, validation, level counting, and topology derivation.
///
/// # Examples
///
/// ```
/// use skillpath::BuildOrderEngine;
///
/// let engine = BuildOrderEngine::default();
/// let diagram = engine.evaluate("(0)1[23]");
///
/// assert!(diagram.is_valid());
/// assert_eq!(diagram.groups().len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct BuildOrderEngine {
    config: AppConfig,
}

impl BuildOrderEngine {
    /// Create a new engine with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including input bounds
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Evaluate a pattern into its diagram, without icon decoration.
    ///
    /// Never fails: a malformed pattern yields a result whose
    /// [`BuildDiagram::validation`] carries the errors, alongside
    /// whatever best-effort groups could still be derived. The same
    /// pattern always yields the same result.
    ///
    /// # Examples
    ///
    /// ```
    /// use skillpath::BuildOrderEngine;
    ///
    /// let engine = BuildOrderEngine::default();
    ///
    /// let diagram = engine.evaluate("[1]");
    /// assert!(!diagram.is_valid());
    /// let first = diagram.validation().first_error().unwrap();
    /// assert_eq!(first.position(), Some(2));
    /// ```
    pub fn evaluate(&self, pattern: &str) -> BuildDiagram {
        self.evaluate_inner(pattern, SlotIcons::empty())
    }

    /// Evaluate a pattern and decorate it with slot icons.
    ///
    /// Icon resolution is supplied by the caller through the
    /// [`SlotIconResolver`] capability; a slot without an icon is a
    /// normal outcome, never an error.
    ///
    /// # Arguments
    ///
    /// * `pattern` - The build-order pattern
    /// * `character` - Identity of the character the build belongs to
    /// * `faction` - The character's faction
    /// * `resolver` - The application's icon lookup
    pub fn evaluate_for(
        &self,
        pattern: &str,
        character: Id,
        faction: Id,
        resolver: &dyn SlotIconResolver,
    ) -> BuildDiagram {
        let icons = SlotIcons::resolve(character, faction, resolver);
        self.evaluate_inner(pattern, icons)
    }

    fn evaluate_inner(&self, pattern: &str, icons: SlotIcons) -> BuildDiagram {
        info!(pattern_len = pattern.len(); "Evaluating build-order pattern");

        let limits = self.config.limits().pattern_limits();
        let parsed = skillpath_parser::parse(pattern, &limits);
        let (normalized_pattern, events, validation) = parsed.into_parts();

        let items = levels::assign_levels(&events);
        let groups = topology::build_groups(items);

        debug!(
            groups = groups.len(),
            valid = validation.is_valid();
            "Diagram derived"
        );
        trace!(groups:?; "Derived groups");

        BuildDiagram {
            normalized_pattern,
            groups,
            validation,
            icons,
        }
    }
}

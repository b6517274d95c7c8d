//! CLI logic for the Skillpath build-order tool.
//!
//! This module contains the core CLI logic for the Skillpath build-order
//! tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use skillpath::{BuildOrderEngine, SkillpathError};
use skillpath_parser::ParseError;

/// Run the Skillpath CLI application
///
/// This function evaluates the given pattern through the Skillpath
/// pipeline and emits the structured diagram as JSON, to stdout or to
/// the requested output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `SkillpathError` for:
/// - Configuration loading errors
/// - An invalid pattern (every diagnostic is carried in the error)
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), SkillpathError> {
    info!(pattern = args.pattern; "Evaluating build-order pattern");

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Evaluate the pattern
    let engine = BuildOrderEngine::new(app_config);
    let diagram = engine.evaluate(&args.pattern);

    for warning in diagram.validation().warnings() {
        warn!("{warning}");
    }

    if !diagram.is_valid() {
        let err = ParseError::new(diagram.validation().errors().to_vec());
        return Err(SkillpathError::new_parse_error(
            err,
            diagram.normalized_pattern(),
        ));
    }

    // Emit the structured result
    let json = serde_json::to_string_pretty(&diagram)
        .map_err(|err| SkillpathError::Io(std::io::Error::other(err)))?;

    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            info!(output_file = path; "Diagram exported successfully");
        }
        None => println!("{json}"),
    }

    Ok(())
}

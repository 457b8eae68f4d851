//! Error types for the passtretcher library.

use thiserror::Error;

/// Errors produced while turning command-line input into a run configuration.
///
/// The transform engine itself has no failure modes; these variants only
/// arise at the input boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StretchError {
    /// No input string (or an empty one) was supplied with `-s`.
    #[error("You must provide an input string with -s")]
    MissingInput,
}

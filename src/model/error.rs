//! Error types for menu selections.

use thiserror::Error;

/// Errors raised while turning user input into a menu choice.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The text does not name any member of the choice set.
    #[error("Invalid {choice}({input})")]
    InvalidSelection { choice: &'static str, input: String },

    /// The text names a member, but that member is not on offer here.
    #[error("Unacceptable {choice}({input})")]
    UnacceptableSelection { choice: &'static str, input: String },
}

//! Error handling for GeoDraw
//!
//! Errors here cover rule validation. Placement rejections live next to the
//! placement protocol in `geodraw-designer`; file and settings failures in
//! their own crates.

use thiserror::Error;

/// Main error type for GeoDraw core types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A placement rule holds a value the protocol cannot work with
    #[error("Invalid rule '{rule}': {reason}")]
    InvalidRule {
        /// The rule name.
        rule: &'static str,
        /// Why the value was refused.
        reason: String,
    },
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

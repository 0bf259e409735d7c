//! Error types for detector misuse.

use thiserror::Error;

/// Out-of-sequence detector calls.
///
/// These indicate a broken driver, not a data condition. The panicking
/// entry points (`initialize`, `account`) report them by panicking with the
/// message below; the `try_*` forms hand them back instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorError {
    #[error("Detector may only be initialized once")]
    AlreadyInitialized,

    #[error("Detector requires initialization before accounting records")]
    NotInitialized,
}

pub type Result<T> = std::result::Result<T, DetectorError>;

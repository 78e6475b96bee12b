//! # wordcraft-error
//!
//! Unified error handling for wordcraft.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., OracleUnavailable, DuplicateGuess)
//! - **ErrorStatus**: Decide how to handle it (Permanent, Temporary, Persistent)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use wordcraft_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::ScoringUnavailable, "connection refused")
//!         .with_operation("scoring::score")
//!         .with_context("guess", "crane")
//!         .with_context("size", "5"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, wordcraft_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context
//! - Don't abuse `From<OtherError>` to prevent raw error leakage

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using wordcraft Error
pub type Result<T> = std::result::Result<T, Error>;

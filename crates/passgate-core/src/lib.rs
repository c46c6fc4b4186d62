//! passgate Core Library
//!
//! Shared types for passgate.
//!
//! # Modules
//!
//! - [`ids`] - Strongly typed identifiers (UserId, TokenId)
//! - [`error`] - The caller-facing failure taxonomy (PassgateError)
//!
//! # Example
//!
//! ```
//! use passgate_core::{PassgateError, Result, UserId};
//!
//! let user_id = UserId::new();
//!
//! fn example() -> Result<()> {
//!     Err(PassgateError::Unauthenticated)
//! }
//! ```

pub mod error;
pub mod ids;

pub use error::{PassgateError, Result};
pub use ids::{ParseIdError, TokenId, UserId};

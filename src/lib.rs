//! Contract assertions: precondition checks that fail fast with a typed error.
//!
//! Each check takes a value (plus an optional custom message), returns `Ok(())`
//! when the precondition holds, and a [`ContractError`] otherwise. Nothing is
//! stored, nothing is retried, and nothing panics.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐     ┌──────────────────┐
//! │  contracts.rs  │────▶│     error.rs     │
//! │ (greater_than, │     │ (ContractError,  │
//! │  is_not_null…) │     │  ContractErrorKind)
//! └────────────────┘     └──────────────────┘
//!         │
//!         ▼
//! ┌─────────────────────────────────────────┐
//! │              extensions/                │
//! │  (strings, collections, duration, json) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Failure Kinds
//!
//! | Kind              | Meaning                                         |
//! |-------------------|-------------------------------------------------|
//! | `NullArgument`    | the value is absent                             |
//! | `OutOfRange`      | a numeric bound or equality is violated         |
//! | `InvalidArgument` | boolean, identity, default or emptiness failure |
//!
//! # Usage
//!
//! ```ignore
//! use ensure_kit::{greater_or_equal, is_not_null, ContractError};
//!
//! fn schedule(retries: i32, target: Option<&Host>) -> Result<(), ContractError> {
//!     greater_or_equal(retries, 0)?;
//!     is_not_null(target, Some("target host is required"))?;
//!     // ...
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `json` (default): [`extensions::json::to_debug_json`]
//! - `uuid` (default): [`is_empty_id`] and [`is_not_empty_id`]

// Module declarations
pub mod contracts;
pub mod error;
pub mod extensions;

// Re-exports for public API
pub use contracts::{
    equals, greater_or_equal, greater_than, is_default, is_false, is_not_default, is_not_null,
    is_null, is_true, less_or_equal, less_than, reference_equals, reference_not_equals,
    sequence_is_not_null_or_empty, string_is_not_null_or_empty, string_is_null_or_empty,
};
#[cfg(feature = "uuid")]
pub use contracts::{is_empty_id, is_not_empty_id};
pub use error::{ContractError, ContractErrorKind, ContractResult};
pub use extensions::collections::{add_range, AddRange};
pub use extensions::duration::{CheckedSeconds, Seconds};
#[cfg(feature = "json")]
pub use extensions::json::to_debug_json;
pub use extensions::strings::is_null_or_empty;

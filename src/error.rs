// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The failure taxonomy returned by every contract.
//!
//! Three kinds, so callers can match on what went wrong instead of parsing
//! strings:
//!
//! | Kind              | Raised by                                              |
//! |-------------------|--------------------------------------------------------|
//! | `NullArgument`    | `is_not_null` on `None`                                |
//! | `OutOfRange`      | numeric bounds and `equals`                            |
//! | `InvalidArgument` | everything else                                        |
//!
//! The message is either the caller's or a default built from the operation and
//! its operands. `Display` prints it verbatim.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Error returned when a contract does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// The checked value is absent.
    #[error("{message}")]
    NullArgument { message: String },
    /// A numeric value violates a bound or equality condition.
    #[error("{message}")]
    OutOfRange { message: String },
    /// Boolean, identity, default-value or emptiness violation.
    #[error("{message}")]
    InvalidArgument { message: String },
}

/// Discriminant of a [`ContractError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractErrorKind {
    NullArgument,
    OutOfRange,
    InvalidArgument,
}

impl fmt::Display for ContractErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContractErrorKind::NullArgument => "null argument",
            ContractErrorKind::OutOfRange => "out of range",
            ContractErrorKind::InvalidArgument => "invalid argument",
        };
        f.write_str(name)
    }
}

impl ContractError {
    pub fn null_argument(message: impl Into<String>) -> Self {
        ContractError::NullArgument {
            message: message.into(),
        }
    }

    pub fn out_of_range(message: impl Into<String>) -> Self {
        ContractError::OutOfRange {
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ContractError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Build an error of the given kind.
    pub fn new(kind: ContractErrorKind, message: impl Into<String>) -> Self {
        match kind {
            ContractErrorKind::NullArgument => Self::null_argument(message),
            ContractErrorKind::OutOfRange => Self::out_of_range(message),
            ContractErrorKind::InvalidArgument => Self::invalid_argument(message),
        }
    }

    pub fn kind(&self) -> ContractErrorKind {
        match self {
            ContractError::NullArgument { .. } => ContractErrorKind::NullArgument,
            ContractError::OutOfRange { .. } => ContractErrorKind::OutOfRange,
            ContractError::InvalidArgument { .. } => ContractErrorKind::InvalidArgument,
        }
    }

    /// The human-readable message, caller-supplied or generated.
    pub fn message(&self) -> &str {
        match self {
            ContractError::NullArgument { message }
            | ContractError::OutOfRange { message }
            | ContractError::InvalidArgument { message } => message,
        }
    }

    pub fn is_null_argument(&self) -> bool {
        self.kind() == ContractErrorKind::NullArgument
    }

    pub fn is_out_of_range(&self) -> bool {
        self.kind() == ContractErrorKind::OutOfRange
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ContractErrorKind::InvalidArgument
    }
}

/// Result of a single contract check.
pub type ContractResult = Result<(), ContractError>;

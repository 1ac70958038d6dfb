//! Error taxonomy shared by the rental and media domains.
//!
//! None of these are fatal. Callers surface the message and keep going.

use std::fmt;

use thiserror::Error;

use crate::rental::ItemState;

/// Action attempted against an item's availability state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Checkout,
    Return,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Checkout => write!(f, "checkout"),
            Action::Return => write!(f, "return"),
        }
    }
}

/// Errors raised by lookups, state transitions and record parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShelfError {
    #[error("Not found: {what}")]
    NotFound { what: String },

    #[error("{}", transition_message(.title, .action))]
    InvalidTransition {
        title: String,
        state: ItemState,
        action: Action,
    },

    #[error("Malformed record field '{field}': {reason}")]
    MalformedRecord { field: &'static str, reason: String },
}

impl ShelfError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    pub fn malformed(field: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            field,
            reason: reason.into(),
        }
    }
}

fn transition_message(title: &str, action: &Action) -> String {
    match action {
        Action::Checkout => format!("{} is not available for rent.", title),
        Action::Return => format!("You did not rent {}.", title),
    }
}

//! Dispatcher state, requests, and errors.

use std::fmt;

use coach_common::RequestId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    Idle,
    Busy,
}

impl fmt::Display for DispatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Busy => f.write_str("busy"),
        }
    }
}

/// One user submission, consumed by exactly one dispatch cycle.
#[derive(Debug)]
pub struct DispatchRequest {
    pub id: RequestId,
    pub text: String,
}

impl DispatchRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: RequestId::new(),
            text: text.into(),
        }
    }
}

/// Why a dispatch was refused before any work started.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("a request is already in progress")]
    Busy,
    #[error("message cannot be empty")]
    EmptyInput,
}

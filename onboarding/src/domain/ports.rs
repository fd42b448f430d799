//! Domain ports for the submission pipeline.
//!
//! The controller talks to the outside world through [`UserSubmitter`] only.
//! The port exposes strongly typed errors so adapters map their failures into
//! predictable variants instead of returning `anyhow::Result`.

use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use super::values::FormValues;

/// Server-assigned identifier of a created user.
///
/// Backends disagree on the JSON type here (reqres.in sends a string, other
/// mock servers a number); both decode into the same identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RecordIdRepr")]
pub struct RecordId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordIdRepr {
    Number(u64),
    Text(String),
}

impl From<RecordIdRepr> for RecordId {
    fn from(value: RecordIdRepr) -> Self {
        match value {
            RecordIdRepr::Number(id) => Self(id.to_string()),
            RecordIdRepr::Text(id) => Self(id),
        }
    }
}

impl RecordId {
    /// Identifier as text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The server's echo of a successfully created user. Decode-only: the echo
/// is displayed, never re-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmittedUser {
    /// Server-assigned identifier.
    pub id: RecordId,
    /// Echo of the submitted values.
    #[serde(flatten)]
    pub record: FormValues,
}

/// Failures surfaced by a [`UserSubmitter`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The request never completed (connection refused, DNS, TLS, ...).
    #[error("registration transport failed: {message}")]
    Transport {
        /// Adapter diagnostic.
        message: String,
    },
    /// The request timed out.
    #[error("registration request timed out: {message}")]
    Timeout {
        /// Adapter diagnostic.
        message: String,
    },
    /// The endpoint answered with a non-success status.
    #[error("registration endpoint rejected the submission: {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Adapter diagnostic, including a body preview.
        message: String,
    },
    /// The success response body could not be decoded.
    #[error("created-user response could not be decoded: {message}")]
    Decode {
        /// Adapter diagnostic.
        message: String,
    },
}

impl SubmissionError {
    /// Build a [`SubmissionError::Transport`].
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Build a [`SubmissionError::Timeout`].
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Build a [`SubmissionError::Rejected`].
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Build a [`SubmissionError::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Driven port performing the pipeline's single outbound POST.
///
/// Implementations send the JSON-serialised values exactly once per call; the
/// controller layers no retry, dedup, or concurrency guard on top.
#[async_trait]
pub trait UserSubmitter: Send + Sync {
    /// Submit the form values and resolve with the server's echo of the
    /// created record.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError`] when the request fails in transport, is
    /// rejected by the endpoint, or the response cannot be decoded.
    async fn submit(&self, values: &FormValues) -> Result<SubmittedUser, SubmissionError>;
}

/// In-memory submitter for tests.
///
/// Outcomes are consumed in FIFO order; with the queue empty it echoes the
/// submitted values with id `1`, like the default mock endpoint would.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
pub struct FixtureSubmitter {
    outcomes: std::sync::Mutex<std::collections::VecDeque<Result<SubmittedUser, SubmissionError>>>,
    requests: std::sync::Mutex<Vec<FormValues>>,
}

#[cfg(any(test, feature = "test-support"))]
impl FixtureSubmitter {
    /// Empty fixture echoing every submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful outcome.
    pub fn enqueue_ok(&self, user: SubmittedUser) {
        self.outcomes
            .lock()
            .expect("fixture outcome queue poisoned")
            .push_back(Ok(user));
    }

    /// Queue a failed outcome.
    pub fn enqueue_err(&self, error: SubmissionError) {
        self.outcomes
            .lock()
            .expect("fixture outcome queue poisoned")
            .push_back(Err(error));
    }

    /// Every payload submitted so far, in call order.
    pub fn requests(&self) -> Vec<FormValues> {
        self.requests
            .lock()
            .expect("fixture request log poisoned")
            .clone()
    }

    /// Number of submissions performed.
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .expect("fixture request log poisoned")
            .len()
    }
}

#[cfg(any(test, feature = "test-support"))]
#[async_trait]
impl UserSubmitter for FixtureSubmitter {
    async fn submit(&self, values: &FormValues) -> Result<SubmittedUser, SubmissionError> {
        self.requests
            .lock()
            .expect("fixture request log poisoned")
            .push(values.clone());
        let queued = self
            .outcomes
            .lock()
            .expect("fixture outcome queue poisoned")
            .pop_front();
        queued.unwrap_or_else(|| {
            Ok(SubmittedUser {
                id: RecordId::from(1),
                record: values.clone(),
            })
        })
    }
}

use thiserror::Error;

/// Errors reported by console operations. These are returned to the
/// caller as values so the operator can be shown the message without
/// interrupting a running show.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsoleError {
    #[error("{kind} \"{id}\" can't be {verb} because it doesn't exist.")]
    NotFound {
        kind: &'static str,
        id: String,
        verb: &'static str,
    },

    #[error("{kind} \"{id}\" can't be {verb} because Target ID \"{target}\" is already used.")]
    Conflict {
        kind: &'static str,
        id: String,
        verb: &'static str,
        target: String,
    },

    #[error("{kind} {field} must be between {min} and {max}, got {value}.")]
    OutOfRange {
        kind: &'static str,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{0}")]
    ReferenceIntegrity(String),

    #[error("Storage failure: {0}")]
    Storage(String),
}

impl ConsoleError {
    pub fn not_found(kind: &'static str, id: &str, verb: &'static str) -> Self {
        ConsoleError::NotFound {
            kind,
            id: id.to_string(),
            verb,
        }
    }

    pub fn conflict(kind: &'static str, id: &str, verb: &'static str, target: &str) -> Self {
        ConsoleError::Conflict {
            kind,
            id: id.to_string(),
            verb,
            target: target.to_string(),
        }
    }

    pub fn out_of_range(
        kind: &'static str,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    ) -> Self {
        ConsoleError::OutOfRange {
            kind,
            field,
            value,
            min,
            max,
        }
    }

    /// Storage faults are retryable from the caller's point of view;
    /// domain validation errors are not.
    pub fn is_storage(&self) -> bool {
        matches!(self, ConsoleError::Storage(_))
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(e: std::io::Error) -> Self {
        ConsoleError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(e: serde_json::Error) -> Self {
        ConsoleError::Storage(e.to_string())
    }
}

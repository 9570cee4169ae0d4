use thiserror::Error;

/// Failure reported by the parse/format operations. Errors are always
/// returned as values; nothing in this crate panics across the public
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonError {
    /// Input was blank or whitespace-only. No repair is attempted.
    #[error("input is empty")]
    EmptyInput,
    /// The strict parser rejected the text. When repair was attempted and
    /// also failed, this carries the error from the original input, not the
    /// repaired text.
    #[error("{message}")]
    Syntax {
        message: String,
        /// 1-indexed line of the failure, when the parser reported one.
        line: Option<usize>,
    },
    /// A parsed value could not be re-serialized.
    #[error("serialize error: {0}")]
    Serialize(String),
}

impl JsonError {
    /// 1-indexed line number of a syntax failure, if known.
    pub fn line(&self) -> Option<usize> {
        match self {
            JsonError::Syntax { line, .. } => *line,
            _ => None,
        }
    }

    pub(crate) fn from_parse(err: serde_json::Error) -> Self {
        // serde_json reports line 0 for errors that carry no position.
        let line = match err.line() {
            0 => None,
            n => Some(n),
        };
        JsonError::Syntax {
            message: err.to_string(),
            line,
        }
    }

    pub(crate) fn from_serialize(err: serde_json::Error) -> Self {
        JsonError::Serialize(err.to_string())
    }
}

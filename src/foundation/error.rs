/// Result alias for the fallible parts of segue.
pub type SegueResult<T> = Result<T, SegueError>;

/// Why a transition could not be described or loaded.
///
/// Producing frames never fails; errors only come out of parsing and validation.
#[derive(thiserror::Error, Debug)]
pub enum SegueError {
    /// A value that can never describe a transition (unknown name, zero duration, ...).
    #[error("invalid value: {0}")]
    Validation(String),

    /// A transition config that is valid JSON but has a field that does not parse.
    #[error("transition config field `{field}`: {reason}")]
    Config { field: &'static str, reason: String },

    /// Config text that is not a JSON transition description.
    #[error("malformed transition config: {0}")]
    Json(#[from] serde_json::Error),

    /// The config could not be read at all.
    #[error(transparent)]
    Load(#[from] anyhow::Error),
}

impl SegueError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Attribute a parse failure to one config field.
    pub(crate) fn in_field(field: &'static str, err: SegueError) -> Self {
        Self::Config {
            field,
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

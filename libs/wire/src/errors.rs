//! Error type shared by parsing and serialization.

use thiserror::Error;

/// Failure while mapping JSON to or from a typed model.
#[derive(Debug, Error)]
pub enum Error {
    /// A value had a different JSON shape than the field expects.
    #[error("expected {expected}, found {found}")]
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A string did not name any variant of the target enumeration.
    #[error("unknown value `{value}` for {type_name}")]
    UnknownEnumValue {
        type_name: &'static str,
        value: String,
    },

    /// A GUID field carried a malformed value.
    #[error("invalid guid: {0}")]
    Guid(#[from] uuid::Error),

    /// A timestamp field was not valid RFC 3339.
    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),

    /// An integer did not fit into the declared width.
    #[error("{value} does not fit into {target}")]
    OutOfRange { value: i64, target: &'static str },

    /// Wraps an inner error with the JSON field it occurred under.
    #[error("field `{field}`: {source}")]
    Field {
        field: String,
        #[source]
        source: Box<Error>,
    },

    /// The payload was not syntactically valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Attaches the field name under which the error was raised.
    #[must_use]
    pub fn in_field(field: &str, source: Error) -> Self {
        Error::Field {
            field: field.to_owned(),
            source: Box::new(source),
        }
    }
}

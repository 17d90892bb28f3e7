use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues indicating unexpected behavior in the store or the codebase.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a document identity from String
    ///
    /// Identities are assigned by the store, so an identity that does not parse
    /// is treated as a store-level fault rather than a validation failure.
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored dance class holds a nested value that no longer deserializes.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Dance class {id} has a malformed `{field}` value: {source}")]
    MalformedDocument {
        /// Identity of the stored document
        id: i32,
        /// Column holding the malformed JSON
        field: &'static str,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}

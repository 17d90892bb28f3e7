//! Signed-in user identity.

use serde::{Deserialize, Serialize};

/// Verified profile returned by the identity provider and kept in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Provider subject identifier
    pub id: String,
    pub name: String,
    pub email: Option<String>,
}

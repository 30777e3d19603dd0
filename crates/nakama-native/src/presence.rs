//! User presence record

use serde::{Deserialize, Serialize};

/// A user session connected to the realtime socket.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NUserPresence {
    /// The user this presence belongs to.
    pub user_id: String,
    /// A unique session ID identifying the particular connection.
    pub session_id: String,
    /// The username for display purposes.
    pub username: String,
    /// Whether this presence generates persistent data/messages.
    pub persistence: bool,
    /// A user-set status message for this stream, if applicable.
    pub status: String,
}

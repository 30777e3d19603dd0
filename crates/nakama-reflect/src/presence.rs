//! User presence

use nakama_native::NUserPresence;
use serde::{Deserialize, Serialize};

/// A user session connected to the realtime socket.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct UserPresence {
    pub user_id: String,
    pub session_id: String,
    pub username: String,
    pub persistence: bool,
    pub status: String,
}

/// Map a native presence.
pub fn user_presence_from_native(native: &NUserPresence) -> UserPresence {
    UserPresence {
        user_id: native.user_id.clone(),
        session_id: native.session_id.clone(),
        username: native.username.clone(),
        persistence: native.persistence,
        status: native.status.clone(),
    }
}

/// Map a sequence of native presences, keeping order and cardinality.
pub fn user_presences_from_native(native: &[NUserPresence]) -> Vec<UserPresence> {
    native.iter().map(user_presence_from_native).collect()
}

impl From<&NUserPresence> for UserPresence {
    fn from(native: &NUserPresence) -> Self {
        user_presence_from_native(native)
    }
}

//! Party, party matchmaking and party event records

use serde::{Deserialize, Serialize};

use crate::presence::NUserPresence;

/// A party snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NParty {
    /// The unique party identifier.
    pub id: String,
    /// True, if the party is open to join.
    pub open: bool,
    /// The maximum number of party members.
    pub max_size: i32,
    /// The current user in this party.
    #[serde(rename = "self")]
    pub self_presence: NUserPresence,
    /// The current party leader.
    pub leader: NUserPresence,
    /// All members currently in the party.
    pub presences: Vec<NUserPresence>,
}

/// Presences attempting to join, or who have joined, a party.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NPartyJoinRequest {
    pub party_id: String,
    pub presences: Vec<NUserPresence>,
}

/// A party-scoped matchmaking ticket.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NPartyMatchmakerTicket {
    pub party_id: String,
    /// The ticket that can be used to cancel matchmaking.
    pub ticket: String,
}

/// A party close event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NPartyClose {
    /// The unique party identifier of the closing party.
    pub id: String,
}

/// Application data delivered within a party.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NPartyData {
    pub party_id: String,
    /// The presence that sent this data.
    pub presence: NUserPresence,
    /// Application-defined operation code.
    pub op_code: i64,
    /// Opaque payload.
    pub data: String,
}

/// Announcement of a new party leader.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NPartyLeader {
    pub party_id: String,
    /// The presence of the new party leader.
    pub presence: NUserPresence,
}

/// Presence update for a party.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NPartyPresenceEvent {
    pub party_id: String,
    /// Presences that have just joined.
    pub joins: Vec<NUserPresence>,
    /// Presences that have just left.
    pub leaves: Vec<NUserPresence>,
}

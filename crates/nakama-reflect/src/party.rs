//! Party records
//!
//! Each record is a one-shot snapshot of something that already happened
//! upstream. Nothing here tracks party lifecycle or membership history.

use nakama_native::{
    NParty, NPartyClose, NPartyData, NPartyJoinRequest, NPartyLeader, NPartyMatchmakerTicket,
    NPartyPresenceEvent,
};
use serde::{Deserialize, Serialize};

use crate::presence::{UserPresence, user_presence_from_native, user_presences_from_native};

/// A party snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Party {
    /// The unique party identifier.
    pub id: String,
    /// True, if the party is open to join.
    pub open: bool,
    /// The maximum number of party members.
    pub max_size: i32,
    /// The current user in this party. Shown as "Self".
    pub me: UserPresence,
    /// The current party leader.
    pub leader: UserPresence,
    /// All members currently in the party.
    pub presences: Vec<UserPresence>,
}

impl Party {
    /// Number of members in the snapshot
    pub fn member_count(&self) -> usize {
        self.presences.len()
    }

    /// Whether `presence` is the leader in this snapshot
    pub fn is_leader(&self, presence: &UserPresence) -> bool {
        self.leader.session_id == presence.session_id && self.leader.user_id == presence.user_id
    }
}

/// Presences attempting to join, or who have joined, a party.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PartyJoinRequest {
    pub party_id: String,
    pub presences: Vec<UserPresence>,
}

/// Ticket that can cancel a party-scoped matchmaking search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PartyMatchmakerTicket {
    pub party_id: String,
    pub ticket: String,
}

/// A party was closed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PartyClose {
    pub id: String,
}

/// Application data delivered within a party.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PartyData {
    pub party_id: String,
    /// The presence that sent this data.
    pub presence: UserPresence,
    pub op_code: i64,
    /// Opaque application payload, never decoded here.
    pub data: String,
}

/// Announcement of a new party leader.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PartyLeader {
    pub party_id: String,
    pub presence: UserPresence,
}

/// Presence update for a party.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PartyPresenceEvent {
    pub party_id: String,
    pub joins: Vec<UserPresence>,
    pub leaves: Vec<UserPresence>,
}

/// Self, leader and members are mapped independently; one presence may
/// appear in all three.
pub fn party_from_native(native: &NParty) -> Party {
    Party {
        id: native.id.clone(),
        open: native.open,
        max_size: native.max_size,
        me: user_presence_from_native(&native.self_presence),
        leader: user_presence_from_native(&native.leader),
        presences: user_presences_from_native(&native.presences),
    }
}

pub fn party_join_request_from_native(native: &NPartyJoinRequest) -> PartyJoinRequest {
    PartyJoinRequest {
        party_id: native.party_id.clone(),
        presences: user_presences_from_native(&native.presences),
    }
}

/// The SDK hands tickets over by value, so this takes ownership.
pub fn party_matchmaker_ticket_from_native(
    native: NPartyMatchmakerTicket,
) -> PartyMatchmakerTicket {
    PartyMatchmakerTicket {
        party_id: native.party_id,
        ticket: native.ticket,
    }
}

pub fn party_close_from_native(native: &NPartyClose) -> PartyClose {
    PartyClose {
        id: native.id.clone(),
    }
}

pub fn party_data_from_native(native: &NPartyData) -> PartyData {
    PartyData {
        party_id: native.party_id.clone(),
        presence: user_presence_from_native(&native.presence),
        op_code: native.op_code,
        data: native.data.clone(),
    }
}

pub fn party_leader_from_native(native: &NPartyLeader) -> PartyLeader {
    PartyLeader {
        party_id: native.party_id.clone(),
        presence: user_presence_from_native(&native.presence),
    }
}

pub fn party_presence_event_from_native(native: &NPartyPresenceEvent) -> PartyPresenceEvent {
    PartyPresenceEvent {
        party_id: native.party_id.clone(),
        joins: user_presences_from_native(&native.joins),
        leaves: user_presences_from_native(&native.leaves),
    }
}

impl From<&NParty> for Party {
    fn from(native: &NParty) -> Self {
        party_from_native(native)
    }
}

impl From<&NPartyJoinRequest> for PartyJoinRequest {
    fn from(native: &NPartyJoinRequest) -> Self {
        party_join_request_from_native(native)
    }
}

impl From<NPartyMatchmakerTicket> for PartyMatchmakerTicket {
    fn from(native: NPartyMatchmakerTicket) -> Self {
        party_matchmaker_ticket_from_native(native)
    }
}

impl From<&NPartyMatchmakerTicket> for PartyMatchmakerTicket {
    fn from(native: &NPartyMatchmakerTicket) -> Self {
        party_matchmaker_ticket_from_native(native.clone())
    }
}

impl From<&NPartyClose> for PartyClose {
    fn from(native: &NPartyClose) -> Self {
        party_close_from_native(native)
    }
}

impl From<&NPartyData> for PartyData {
    fn from(native: &NPartyData) -> Self {
        party_data_from_native(native)
    }
}

impl From<&NPartyLeader> for PartyLeader {
    fn from(native: &NPartyLeader) -> Self {
        party_leader_from_native(native)
    }
}

impl From<&NPartyPresenceEvent> for PartyPresenceEvent {
    fn from(native: &NPartyPresenceEvent) -> Self {
        party_presence_event_from_native(native)
    }
}

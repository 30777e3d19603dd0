//! JSON envelope for native records on the host callback path
//!
//! Records are serialized as JSON with an internally-tagged enum.
//! Format: {"Type": "RecordType", ...record fields}

use serde::{Deserialize, Serialize};

use crate::error::{NativeError, Result};
use crate::party::{
    NParty, NPartyClose, NPartyData, NPartyJoinRequest, NPartyLeader, NPartyMatchmakerTicket,
    NPartyPresenceEvent,
};
use crate::presence::NUserPresence;
use crate::storage::{
    NDeleteStorageObjectId, NReadStorageObjectId, NStorageObject, NStorageObjectAck,
    NStorageObjectAcks, NStorageObjectList, NStorageObjectWrite,
};

/// One native record delivered by the SDK.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "Type", rename_all = "PascalCase")]
pub enum NativeEvent {
    // === Storage ===
    StorageObject(NStorageObject),
    StorageObjectWrite(NStorageObjectWrite),
    ReadStorageObjectId(NReadStorageObjectId),
    DeleteStorageObjectId(NDeleteStorageObjectId),
    StorageObjectAck(NStorageObjectAck),
    /// Acks are a bare sequence in the SDK, so they travel under a field
    StorageObjectAcks {
        #[serde(default)]
        acks: NStorageObjectAcks,
    },
    StorageObjectList(NStorageObjectList),

    // === Parties ===
    UserPresence(NUserPresence),
    Party(NParty),
    PartyJoinRequest(NPartyJoinRequest),
    PartyMatchmakerTicket(NPartyMatchmakerTicket),
    PartyClose(NPartyClose),
    PartyData(NPartyData),
    PartyLeader(NPartyLeader),
    PartyPresenceEvent(NPartyPresenceEvent),
}

impl NativeEvent {
    /// Envelope tag of this record
    pub fn kind(&self) -> &'static str {
        match self {
            NativeEvent::StorageObject(_) => "StorageObject",
            NativeEvent::StorageObjectWrite(_) => "StorageObjectWrite",
            NativeEvent::ReadStorageObjectId(_) => "ReadStorageObjectId",
            NativeEvent::DeleteStorageObjectId(_) => "DeleteStorageObjectId",
            NativeEvent::StorageObjectAck(_) => "StorageObjectAck",
            NativeEvent::StorageObjectAcks { .. } => "StorageObjectAcks",
            NativeEvent::StorageObjectList(_) => "StorageObjectList",
            NativeEvent::UserPresence(_) => "UserPresence",
            NativeEvent::Party(_) => "Party",
            NativeEvent::PartyJoinRequest(_) => "PartyJoinRequest",
            NativeEvent::PartyMatchmakerTicket(_) => "PartyMatchmakerTicket",
            NativeEvent::PartyClose(_) => "PartyClose",
            NativeEvent::PartyData(_) => "PartyData",
            NativeEvent::PartyLeader(_) => "PartyLeader",
            NativeEvent::PartyPresenceEvent(_) => "PartyPresenceEvent",
        }
    }
}

/// Serialize a native record to JSON bytes
pub fn serialize(event: &NativeEvent) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(event)?)
}

/// Deserialize a native record from JSON bytes
pub fn deserialize(bytes: &[u8]) -> Result<NativeEvent> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(NativeError::EmptyPayload);
    }
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_event_from_callback() {
        let json = r#"{"Type":"PartyPresenceEvent","partyId":"p1","joins":[{"userId":"a","sessionId":"s-a","username":"alice"}],"leaves":[]}"#;

        let event = deserialize(json.as_bytes()).unwrap();
        assert_eq!(event.kind(), "PartyPresenceEvent");
        match event {
            NativeEvent::PartyPresenceEvent(diff) => {
                assert_eq!(diff.party_id, "p1");
                assert_eq!(diff.joins.len(), 1);
                assert_eq!(diff.joins[0].username, "alice");
                assert!(diff.leaves.is_empty());
            }
            other => panic!("Wrong record type: {:?}", other),
        }
    }

    #[test]
    fn test_acks_envelope() {
        let json = r#"{"Type":"StorageObjectAcks","acks":[{"collection":"c","key":"k1","version":"v1"},{"collection":"c","key":"k2","version":"v2"}]}"#;

        match deserialize(json.as_bytes()).unwrap() {
            NativeEvent::StorageObjectAcks { acks } => {
                let keys: Vec<&str> = acks.iter().map(|a| a.key.as_str()).collect();
                assert_eq!(keys, ["k1", "k2"]);
            }
            other => panic!("Wrong record type: {:?}", other),
        }
    }

    #[test]
    fn test_type_tag_is_pascal_case() {
        let event = NativeEvent::PartyClose(NPartyClose { id: "p9".into() });
        let bytes = serialize(&event).unwrap();
        let json = String::from_utf8_lossy(&bytes);

        assert!(json.contains("\"Type\":\"PartyClose\""));
        assert_eq!(deserialize(&bytes).unwrap(), event);
    }

    #[test]
    fn test_acks_missing_field_is_empty() {
        match deserialize(br#"{"Type":"StorageObjectAcks"}"#).unwrap() {
            NativeEvent::StorageObjectAcks { acks } => assert!(acks.is_empty()),
            other => panic!("Wrong record type: {:?}", other),
        }
    }

    #[test]
    fn test_empty_payload() {
        assert!(matches!(deserialize(b"  \n"), Err(NativeError::EmptyPayload)));
    }

    #[test]
    fn test_unknown_type_is_serialization_error() {
        let result = deserialize(br#"{"Type":"MatchData"}"#);
        assert!(matches!(result, Err(NativeError::SerializationError(_))));
    }
}

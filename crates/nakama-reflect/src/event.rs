//! Rendering of native callback events

use nakama_native::NativeEvent;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::party::{
    self, Party, PartyClose, PartyData, PartyJoinRequest, PartyLeader, PartyMatchmakerTicket,
    PartyPresenceEvent,
};
use crate::presence::{UserPresence, user_presence_from_native};
use crate::storage::{
    self, DeleteStorageObjectId, ReadStorageObjectId, StorageObjectList, StoreObjectAck,
    StoreObjectAcks, StoreObjectData, StoreObjectWrite,
};

/// A presentation record rendered from one native event.
///
/// Format: {"Type": "RecordType", ...record fields}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "Type", rename_all = "PascalCase")]
pub enum ReflectedEvent {
    // === Storage ===
    StoreObjectData(StoreObjectData),
    StoreObjectWrite(StoreObjectWrite),
    ReadStorageObjectId(ReadStorageObjectId),
    DeleteStorageObjectId(DeleteStorageObjectId),
    StoreObjectAck(StoreObjectAck),
    StoreObjectAcks(StoreObjectAcks),
    StorageObjectList(StorageObjectList),

    // === Parties ===
    UserPresence(UserPresence),
    Party(Party),
    PartyJoinRequest(PartyJoinRequest),
    PartyMatchmakerTicket(PartyMatchmakerTicket),
    PartyClose(PartyClose),
    PartyData(PartyData),
    PartyLeader(PartyLeader),
    PartyPresenceEvent(PartyPresenceEvent),
}

/// Render one native event. Stateless: each call depends only on `event`.
pub fn render(event: &NativeEvent) -> ReflectedEvent {
    debug!("[Native→Reflected] {}", event.kind());

    match event {
        NativeEvent::StorageObject(native) => {
            ReflectedEvent::StoreObjectData(storage::store_object_data_from_native(native))
        }
        NativeEvent::StorageObjectWrite(native) => {
            ReflectedEvent::StoreObjectWrite(storage::store_object_write_from_native(native))
        }
        NativeEvent::ReadStorageObjectId(native) => {
            ReflectedEvent::ReadStorageObjectId(storage::read_object_id_from_native(native))
        }
        NativeEvent::DeleteStorageObjectId(native) => {
            ReflectedEvent::DeleteStorageObjectId(storage::delete_object_id_from_native(native))
        }
        NativeEvent::StorageObjectAck(native) => {
            ReflectedEvent::StoreObjectAck(storage::store_object_ack_from_native(native))
        }
        NativeEvent::StorageObjectAcks { acks } => {
            ReflectedEvent::StoreObjectAcks(storage::store_object_acks_from_native(acks))
        }
        NativeEvent::StorageObjectList(native) => {
            ReflectedEvent::StorageObjectList(storage::storage_object_list_from_native(native))
        }
        NativeEvent::UserPresence(native) => {
            ReflectedEvent::UserPresence(user_presence_from_native(native))
        }
        NativeEvent::Party(native) => ReflectedEvent::Party(party::party_from_native(native)),
        NativeEvent::PartyJoinRequest(native) => {
            ReflectedEvent::PartyJoinRequest(party::party_join_request_from_native(native))
        }
        NativeEvent::PartyMatchmakerTicket(native) => ReflectedEvent::PartyMatchmakerTicket(
            party::party_matchmaker_ticket_from_native(native.clone()),
        ),
        NativeEvent::PartyClose(native) => {
            ReflectedEvent::PartyClose(party::party_close_from_native(native))
        }
        NativeEvent::PartyData(native) => {
            ReflectedEvent::PartyData(party::party_data_from_native(native))
        }
        NativeEvent::PartyLeader(native) => {
            ReflectedEvent::PartyLeader(party::party_leader_from_native(native))
        }
        NativeEvent::PartyPresenceEvent(native) => {
            ReflectedEvent::PartyPresenceEvent(party::party_presence_event_from_native(native))
        }
    }
}

//! # nakama-native
//!
//! Native record model of the Nakama client SDK.
//!
//! These are the records the SDK hands to the host application on its
//! request/response and event-callback surface:
//! - Storage objects, writes, read/delete identifiers and acknowledgements
//! - Party snapshots and party events (join requests, data, leader changes)
//! - User presences
//! - A JSON envelope for native records arriving on the callback path
//!
//! Field names and raw codes follow the SDK. No protocol logic lives here.

pub mod error;
pub mod event;
pub mod party;
pub mod presence;
pub mod storage;

pub use error::{NativeError, Result};
pub use event::{NativeEvent, deserialize, serialize};
pub use party::{
    NParty, NPartyClose, NPartyData, NPartyJoinRequest, NPartyLeader, NPartyMatchmakerTicket,
    NPartyPresenceEvent,
};
pub use presence::NUserPresence;
pub use storage::{
    NDeleteStorageObjectId, NReadStorageObjectId, NStorageObject, NStorageObjectAck,
    NStorageObjectAcks, NStorageObjectList, NStorageObjectWrite, VersionPrecondition,
    permission_codes, version,
};

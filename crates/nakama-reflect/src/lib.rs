//! # nakama-reflect
//!
//! Presentation records for the Nakama client SDK, mapped one-way from the
//! native records in `nakama-native`.
//!
//! This crate provides:
//! - Storage records (objects, writes, read/delete ids, acks, pages)
//! - Party records (snapshots, join requests, tickets, party events)
//! - Permission and timestamp coercions
//! - Reflection schemas describing every record to a scripting layer
//! - Stateless rendering of native callback events
//!
//! Every mapping is a pure function of its native input. Nothing here holds
//! state, so any function may be called from any callback thread.

pub mod event;
pub mod party;
pub mod permission;
pub mod presence;
pub mod reflect;
pub mod schema;
pub mod storage;
pub mod time;

pub use event::{ReflectedEvent, render};
pub use party::{
    Party, PartyClose, PartyData, PartyJoinRequest, PartyLeader, PartyMatchmakerTicket,
    PartyPresenceEvent,
};
pub use permission::{StoragePermissionRead, StoragePermissionWrite};
pub use presence::UserPresence;
pub use reflect::{Access, FieldKind, FieldSchema, Reflected, TypeSchema};
pub use schema::{all_schemas, schema_by_name};
pub use storage::{
    DeleteStorageObjectId, ReadStorageObjectId, StorageObjectList, StoreObjectAck,
    StoreObjectAcks, StoreObjectData, StoreObjectWrite,
};
pub use time::calendar_from_unix;

//! Storage records
//!
//! Collection, key, version, value and cursor strings are copied verbatim.
//! Permission codes and epoch timestamps are the only coerced fields.

use chrono::{DateTime, Utc};
use nakama_native::{
    NDeleteStorageObjectId, NReadStorageObjectId, NStorageObject, NStorageObjectAck,
    NStorageObjectList, NStorageObjectWrite, VersionPrecondition,
};
use serde::{Deserialize, Serialize};

use crate::permission::{StoragePermissionRead, StoragePermissionWrite};
use crate::time::calendar_from_unix;

/// An object within the storage engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct StoreObjectData {
    /// The collection which stores the object.
    pub collection: String,
    /// The key of the object within the collection.
    pub key: String,
    /// The user owner of the object.
    pub user_id: String,
    /// The value of the object, JSON text.
    pub value: String,
    /// The version hash of the object.
    pub version: String,
    pub permission_read: StoragePermissionRead,
    pub permission_write: StoragePermissionWrite,
    /// When the object was created.
    pub create_time: DateTime<Utc>,
    /// When the object was last updated.
    pub update_time: DateTime<Utc>,
}

/// The object to store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct StoreObjectWrite {
    pub collection: String,
    pub key: String,
    /// The value of the object. Must be JSON.
    pub value: String,
    /// The version hash to check: `""`, `"*"` or a hash.
    pub version: String,
    pub permission_read: StoragePermissionRead,
    pub permission_write: StoragePermissionWrite,
}

impl StoreObjectWrite {
    /// What the version string asks the server to check
    pub fn precondition(&self) -> VersionPrecondition<'_> {
        VersionPrecondition::of(&self.version)
    }
}

/// Storage object to read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ReadStorageObjectId {
    pub collection: String,
    pub key: String,
    pub user_id: String,
}

/// Storage object to delete.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteStorageObjectId {
    pub collection: String,
    pub key: String,
    /// The version hash to check: `""`, `"*"` or a hash.
    pub version: String,
}

impl DeleteStorageObjectId {
    /// What the version string asks the server to check
    pub fn precondition(&self) -> VersionPrecondition<'_> {
        VersionPrecondition::of(&self.version)
    }
}

/// A storage acknowledgement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct StoreObjectAck {
    pub collection: String,
    pub key: String,
    /// The version hash resulting from the write.
    pub version: String,
    pub user_id: String,
}

/// Batch of acknowledgements, in request order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct StoreObjectAcks {
    pub storage_objects: Vec<StoreObjectAck>,
}

/// One page of storage objects.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct StorageObjectList {
    pub objects: Vec<StoreObjectData>,
    /// Cursor for the next page; empty when there are no more.
    pub cursor: String,
}

impl StorageObjectList {
    /// Whether another page can be requested with `cursor`
    pub fn has_more(&self) -> bool {
        !self.cursor.is_empty()
    }
}

pub fn store_object_data_from_native(native: &NStorageObject) -> StoreObjectData {
    StoreObjectData {
        collection: native.collection.clone(),
        key: native.key.clone(),
        user_id: native.user_id.clone(),
        value: native.value.clone(),
        version: native.version.clone(),
        permission_read: StoragePermissionRead::from_code(native.permission_read),
        permission_write: StoragePermissionWrite::from_code(native.permission_write),
        create_time: calendar_from_unix(native.create_time),
        update_time: calendar_from_unix(native.update_time),
    }
}

pub fn store_object_write_from_native(native: &NStorageObjectWrite) -> StoreObjectWrite {
    StoreObjectWrite {
        collection: native.collection.clone(),
        key: native.key.clone(),
        value: native.value.clone(),
        version: native.version.clone(),
        permission_read: StoragePermissionRead::from_code(native.permission_read),
        permission_write: StoragePermissionWrite::from_code(native.permission_write),
    }
}

pub fn read_object_id_from_native(native: &NReadStorageObjectId) -> ReadStorageObjectId {
    ReadStorageObjectId {
        collection: native.collection.clone(),
        key: native.key.clone(),
        user_id: native.user_id.clone(),
    }
}

pub fn delete_object_id_from_native(native: &NDeleteStorageObjectId) -> DeleteStorageObjectId {
    DeleteStorageObjectId {
        collection: native.collection.clone(),
        key: native.key.clone(),
        version: native.version.clone(),
    }
}

pub fn store_object_ack_from_native(native: &NStorageObjectAck) -> StoreObjectAck {
    StoreObjectAck {
        collection: native.collection.clone(),
        key: native.key.clone(),
        version: native.version.clone(),
        user_id: native.user_id.clone(),
    }
}

/// Map an ack batch. Takes a slice so both `NStorageObjectAcks` and
/// borrowed sub-batches work.
pub fn store_object_acks_from_native(native: &[NStorageObjectAck]) -> StoreObjectAcks {
    StoreObjectAcks {
        storage_objects: native.iter().map(store_object_ack_from_native).collect(),
    }
}

pub fn storage_object_list_from_native(native: &NStorageObjectList) -> StorageObjectList {
    StorageObjectList {
        objects: native
            .objects
            .iter()
            .map(store_object_data_from_native)
            .collect(),
        cursor: native.cursor.clone(),
    }
}

impl From<&NStorageObject> for StoreObjectData {
    fn from(native: &NStorageObject) -> Self {
        store_object_data_from_native(native)
    }
}

impl From<&NStorageObjectWrite> for StoreObjectWrite {
    fn from(native: &NStorageObjectWrite) -> Self {
        store_object_write_from_native(native)
    }
}

impl From<&NReadStorageObjectId> for ReadStorageObjectId {
    fn from(native: &NReadStorageObjectId) -> Self {
        read_object_id_from_native(native)
    }
}

impl From<&NDeleteStorageObjectId> for DeleteStorageObjectId {
    fn from(native: &NDeleteStorageObjectId) -> Self {
        delete_object_id_from_native(native)
    }
}

impl From<&NStorageObjectAck> for StoreObjectAck {
    fn from(native: &NStorageObjectAck) -> Self {
        store_object_ack_from_native(native)
    }
}

impl From<&[NStorageObjectAck]> for StoreObjectAcks {
    fn from(native: &[NStorageObjectAck]) -> Self {
        store_object_acks_from_native(native)
    }
}

impl From<&NStorageObjectList> for StorageObjectList {
    fn from(native: &NStorageObjectList) -> Self {
        storage_object_list_from_native(native)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn native_object(key: &str) -> NStorageObject {
        NStorageObject {
            collection: "saves".into(),
            key: key.into(),
            user_id: "u1".into(),
            value: r#"{"hp":10}"#.into(),
            version: "abc123".into(),
            permission_read: 1,
            permission_write: 1,
            create_time: 1000,
            update_time: 2000,
        }
    }

    fn native_ack(key: &str, version: &str) -> NStorageObjectAck {
        NStorageObjectAck {
            collection: "saves".into(),
            key: key.into(),
            version: version.into(),
            user_id: "u1".into(),
        }
    }

    #[test]
    fn test_stored_object_example() {
        let object = store_object_data_from_native(&native_object("slot1"));

        assert_eq!(object.collection, "saves");
        assert_eq!(object.key, "slot1");
        assert_eq!(object.user_id, "u1");
        assert_eq!(object.value, r#"{"hp":10}"#);
        assert_eq!(object.version, "abc123");
        assert_eq!(object.permission_read, StoragePermissionRead::OwnerRead);
        assert_eq!(object.permission_write, StoragePermissionWrite::OwnerWrite);
        assert_eq!(object.create_time, calendar_from_unix(1000));
        assert_eq!(object.update_time, calendar_from_unix(2000));
        assert_eq!(object.create_time.timestamp(), 1000);
        assert_eq!(object.update_time.timestamp(), 2000);
    }

    #[test]
    fn test_from_matches_mapping_function() {
        let native = native_object("slot1");
        assert_eq!(StoreObjectData::from(&native), store_object_data_from_native(&native));
    }

    #[test]
    fn test_unknown_permission_codes() {
        let mut native = native_object("slot1");
        native.permission_read = 9;
        native.permission_write = -4;

        let object = store_object_data_from_native(&native);
        assert_eq!(object.permission_read, StoragePermissionRead::NoRead);
        assert_eq!(object.permission_write, StoragePermissionWrite::NoWrite);
    }

    #[test]
    fn test_strings_copied_verbatim() {
        let mut native = native_object("  spaced key  ");
        native.value = "not json at all".into();
        native.version = String::new();

        let object = store_object_data_from_native(&native);
        assert_eq!(object.key, "  spaced key  ");
        assert_eq!(object.value, "not json at all");
        assert_eq!(object.version, "");
    }

    #[test]
    fn test_write_request() {
        let native = NStorageObjectWrite {
            collection: "saves".into(),
            key: "slot1".into(),
            value: "{}".into(),
            version: "*".into(),
            permission_read: 2,
            permission_write: 0,
        };
        let write = store_object_write_from_native(&native);

        assert_eq!(write.collection, "saves");
        assert_eq!(write.key, "slot1");
        assert_eq!(write.value, "{}");
        assert_eq!(write.version, "*");
        assert_eq!(write.permission_read, StoragePermissionRead::PublicRead);
        assert_eq!(write.permission_write, StoragePermissionWrite::NoWrite);
        assert_eq!(write.precondition(), VersionPrecondition::MustNotExist);
    }

    #[test]
    fn test_read_and_delete_ids() {
        let read = read_object_id_from_native(&NReadStorageObjectId {
            collection: "saves".into(),
            key: "slot1".into(),
            user_id: "u1".into(),
        });
        assert_eq!(
            (read.collection.as_str(), read.key.as_str(), read.user_id.as_str()),
            ("saves", "slot1", "u1")
        );

        let delete = delete_object_id_from_native(&NDeleteStorageObjectId {
            collection: "saves".into(),
            key: "slot1".into(),
            version: "abc123".into(),
        });
        assert_eq!(delete.version, "abc123");
        assert_eq!(delete.precondition(), VersionPrecondition::MustMatch("abc123"));

        let unconditional = DeleteStorageObjectId::default();
        assert_eq!(unconditional.precondition(), VersionPrecondition::Unconditional);
    }

    #[test]
    fn test_ack_batch_keeps_order() {
        let native = vec![native_ack("k3", "v3"), native_ack("k1", "v1"), native_ack("k2", "v2")];
        let acks = store_object_acks_from_native(&native);

        assert_eq!(acks.storage_objects.len(), native.len());
        for (ack, native) in acks.storage_objects.iter().zip(&native) {
            assert_eq!(ack.key, native.key);
            assert_eq!(ack.version, native.version);
            assert_eq!(ack.user_id, native.user_id);
        }
        assert_eq!(StoreObjectAcks::from(native.as_slice()), acks);
    }

    #[test]
    fn test_object_list_page() {
        let native = NStorageObjectList {
            objects: vec![native_object("b"), native_object("a")],
            cursor: "next-page".into(),
        };
        let list = storage_object_list_from_native(&native);

        let keys: Vec<&str> = list.objects.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(list.cursor, "next-page");
        assert!(list.has_more());

        let last = storage_object_list_from_native(&NStorageObjectList::default());
        assert!(last.objects.is_empty());
        assert!(!last.has_more());
    }

    #[test]
    fn test_defaults_are_safe_empty() {
        let object = StoreObjectData::default();
        assert!(object.collection.is_empty());
        assert!(object.key.is_empty());
        assert!(object.user_id.is_empty());
        assert!(object.value.is_empty());
        assert!(object.version.is_empty());
        assert_eq!(object.permission_read, StoragePermissionRead::NoRead);
        assert_eq!(object.permission_write, StoragePermissionWrite::NoWrite);
        assert_eq!(object.create_time, DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(object.update_time, DateTime::<Utc>::UNIX_EPOCH);

        let write = StoreObjectWrite::default();
        assert_eq!(write.permission_read, StoragePermissionRead::NoRead);
        assert_eq!(write.permission_write, StoragePermissionWrite::NoWrite);

        assert!(StoreObjectAcks::default().storage_objects.is_empty());
        let list = StorageObjectList::default();
        assert!(list.objects.is_empty());
        assert!(list.cursor.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(store_object_data_from_native(&native_object("slot1"))).unwrap();

        assert_eq!(json["Collection"], "saves");
        assert_eq!(json["PermissionRead"], "OwnerRead");
        assert_eq!(json["PermissionWrite"], "OwnerWrite");
        assert_eq!(json["CreateTime"], "1970-01-01T00:16:40Z");
        assert_eq!(json["UpdateTime"], "1970-01-01T00:33:20Z");
    }
}

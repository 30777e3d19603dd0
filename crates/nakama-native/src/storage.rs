//! Storage engine records

use serde::{Deserialize, Serialize};

/// Raw permission codes used by the storage engine.
pub mod permission_codes {
    /// Only the server can read the object.
    pub const NO_READ: i32 = 0;
    /// Only the owning user can read the object.
    pub const OWNER_READ: i32 = 1;
    /// Any user can read the object.
    pub const PUBLIC_READ: i32 = 2;

    /// Only the server can write the object.
    pub const NO_WRITE: i32 = 0;
    /// Only the owning user can write the object.
    pub const OWNER_WRITE: i32 = 1;
}

/// Version sentinels accepted by writes and deletes.
pub mod version {
    /// Write or delete unconditionally.
    pub const ANY: &str = "";
    /// Write only if no object exists under the key.
    pub const MUST_NOT_EXIST: &str = "*";
}

/// What a version string asks the server to check before a write or delete.
///
/// This only names the sentinel; nothing is validated or rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPrecondition<'a> {
    /// `""`: no version check.
    Unconditional,
    /// `"*"`: the object must not exist yet.
    MustNotExist,
    /// Any other string: the stored version hash must match.
    MustMatch(&'a str),
}

impl<'a> VersionPrecondition<'a> {
    /// Classify a version string.
    pub fn of(version: &'a str) -> Self {
        match version {
            version::ANY => VersionPrecondition::Unconditional,
            version::MUST_NOT_EXIST => VersionPrecondition::MustNotExist,
            hash => VersionPrecondition::MustMatch(hash),
        }
    }
}

/// An object within the storage engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NStorageObject {
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
    /// Raw read permission code.
    pub permission_read: i32,
    /// Raw write permission code.
    pub permission_write: i32,
    /// UNIX time in seconds when the object was created.
    pub create_time: i64,
    /// UNIX time in seconds when the object was last updated.
    pub update_time: i64,
}

/// The object to store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NStorageObjectWrite {
    pub collection: String,
    pub key: String,
    /// The value of the object. Must be JSON.
    pub value: String,
    /// Version precondition: `""`, `"*"` or a hash.
    pub version: String,
    pub permission_read: i32,
    pub permission_write: i32,
}

/// Storage object to read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NReadStorageObjectId {
    pub collection: String,
    pub key: String,
    pub user_id: String,
}

/// Storage object to delete.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NDeleteStorageObjectId {
    pub collection: String,
    pub key: String,
    /// Version precondition: `""`, `"*"` or a hash.
    pub version: String,
}

/// A storage acknowledgement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NStorageObjectAck {
    pub collection: String,
    pub key: String,
    /// The version hash of the object after the write.
    pub version: String,
    /// The owner of the object.
    pub user_id: String,
}

/// Batch of acknowledgements, in request order.
pub type NStorageObjectAcks = Vec<NStorageObjectAck>;

/// List of storage objects.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NStorageObjectList {
    /// The list of storage objects.
    pub objects: Vec<NStorageObject>,
    /// Cursor for the next page of results; empty when there are no more.
    pub cursor: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_precondition_sentinels() {
        assert_eq!(VersionPrecondition::of(""), VersionPrecondition::Unconditional);
        assert_eq!(VersionPrecondition::of("*"), VersionPrecondition::MustNotExist);
        assert_eq!(
            VersionPrecondition::of("abc123"),
            VersionPrecondition::MustMatch("abc123")
        );
        // Whitespace is a hash like any other
        assert_eq!(VersionPrecondition::of(" "), VersionPrecondition::MustMatch(" "));
    }

    #[test]
    fn test_storage_object_from_sdk_json() {
        let json = r#"{"collection":"saves","key":"slot1","userId":"u1","value":"{\"hp\":10}","version":"abc123","permissionRead":1,"permissionWrite":1,"createTime":1000,"updateTime":2000}"#;
        let object: NStorageObject = serde_json::from_str(json).unwrap();

        assert_eq!(object.collection, "saves");
        assert_eq!(object.user_id, "u1");
        assert_eq!(object.value, r#"{"hp":10}"#);
        assert_eq!(object.permission_read, permission_codes::OWNER_READ);
        assert_eq!(object.update_time, 2000);
    }

    #[test]
    fn test_missing_fields_default() {
        let list: NStorageObjectList = serde_json::from_str("{}").unwrap();
        assert!(list.objects.is_empty());
        assert!(list.cursor.is_empty());
    }
}

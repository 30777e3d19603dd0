//! Storage permission levels
//!
//! The SDK carries permissions as raw integer codes. Decoding goes through an
//! explicit table; any code outside it falls back to the most restrictive
//! level.

use nakama_native::permission_codes;
use serde::{Deserialize, Serialize};

/// Who may read a storage object.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "PascalCase")]
pub enum StoragePermissionRead {
    /// Only the server can read
    #[default]
    NoRead,
    /// Only the owning user can read
    OwnerRead,
    /// Any user can read
    PublicRead,
}

impl StoragePermissionRead {
    /// Every level, most restrictive first
    pub const ALL: [StoragePermissionRead; 3] = [
        StoragePermissionRead::NoRead,
        StoragePermissionRead::OwnerRead,
        StoragePermissionRead::PublicRead,
    ];

    /// Decode a raw read permission code. Unknown codes decode to `NoRead`.
    pub fn from_code(code: i32) -> Self {
        match code {
            permission_codes::NO_READ => StoragePermissionRead::NoRead,
            permission_codes::OWNER_READ => StoragePermissionRead::OwnerRead,
            permission_codes::PUBLIC_READ => StoragePermissionRead::PublicRead,
            _ => StoragePermissionRead::NoRead,
        }
    }

    /// Variant name as shown to the scripting layer
    pub fn name(&self) -> &'static str {
        match self {
            StoragePermissionRead::NoRead => "NoRead",
            StoragePermissionRead::OwnerRead => "OwnerRead",
            StoragePermissionRead::PublicRead => "PublicRead",
        }
    }
}

/// Who may write a storage object.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "PascalCase")]
pub enum StoragePermissionWrite {
    /// Only the server can write
    #[default]
    NoWrite,
    /// Only the owning user can write
    OwnerWrite,
}

impl StoragePermissionWrite {
    /// Every level, most restrictive first
    pub const ALL: [StoragePermissionWrite; 2] = [
        StoragePermissionWrite::NoWrite,
        StoragePermissionWrite::OwnerWrite,
    ];

    /// Decode a raw write permission code. Unknown codes decode to `NoWrite`.
    pub fn from_code(code: i32) -> Self {
        match code {
            permission_codes::NO_WRITE => StoragePermissionWrite::NoWrite,
            permission_codes::OWNER_WRITE => StoragePermissionWrite::OwnerWrite,
            _ => StoragePermissionWrite::NoWrite,
        }
    }

    /// Variant name as shown to the scripting layer
    pub fn name(&self) -> &'static str {
        match self {
            StoragePermissionWrite::NoWrite => "NoWrite",
            StoragePermissionWrite::OwnerWrite => "OwnerWrite",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_decode_table() {
        let table = [
            (0, StoragePermissionRead::NoRead),
            (1, StoragePermissionRead::OwnerRead),
            (2, StoragePermissionRead::PublicRead),
        ];
        for (code, expected) in table {
            assert_eq!(StoragePermissionRead::from_code(code), expected, "code {code}");
        }
    }

    #[test]
    fn test_write_decode_table() {
        assert_eq!(StoragePermissionWrite::from_code(0), StoragePermissionWrite::NoWrite);
        assert_eq!(StoragePermissionWrite::from_code(1), StoragePermissionWrite::OwnerWrite);
    }

    #[test]
    fn test_unknown_codes_are_most_restrictive() {
        for code in [-1, 3, 42, i32::MIN, i32::MAX] {
            assert_eq!(StoragePermissionRead::from_code(code), StoragePermissionRead::NoRead);
        }
        // 2 is PUBLIC_READ for reads but has no write counterpart
        for code in [-1, 2, 7, i32::MIN, i32::MAX] {
            assert_eq!(StoragePermissionWrite::from_code(code), StoragePermissionWrite::NoWrite);
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(StoragePermissionRead::default(), StoragePermissionRead::NoRead);
        assert_eq!(StoragePermissionWrite::default(), StoragePermissionWrite::NoWrite);
        assert_eq!(StoragePermissionRead::ALL[0], StoragePermissionRead::default());
        assert_eq!(StoragePermissionWrite::ALL[0], StoragePermissionWrite::default());
    }

    #[test]
    fn test_serialized_names_match_name() {
        for level in StoragePermissionRead::ALL {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.name()));
        }
        for level in StoragePermissionWrite::ALL {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.name()));
        }
    }
}

//! Reflection schemas for every presentation record

use crate::party::{
    Party, PartyClose, PartyData, PartyJoinRequest, PartyLeader, PartyMatchmakerTicket,
    PartyPresenceEvent,
};
use crate::permission::{StoragePermissionRead, StoragePermissionWrite};
use crate::presence::UserPresence;
use crate::reflect::{
    CATEGORY_PARTIES, CATEGORY_PRESENCE, CATEGORY_STORAGE, FieldKind, FieldSchema, Reflected,
    TypeSchema,
};
use crate::storage::{
    DeleteStorageObjectId, ReadStorageObjectId, StorageObjectList, StoreObjectAck,
    StoreObjectAcks, StoreObjectData, StoreObjectWrite,
};

fn permission_read_kind() -> FieldKind {
    FieldKind::Enum {
        name: "StoragePermissionRead",
        variants: StoragePermissionRead::ALL.iter().map(|p| p.name()).collect(),
    }
}

fn permission_write_kind() -> FieldKind {
    FieldKind::Enum {
        name: "StoragePermissionWrite",
        variants: StoragePermissionWrite::ALL.iter().map(|p| p.name()).collect(),
    }
}

// Shared storage fields
fn collection(access: fn(&'static str, &'static str, FieldKind) -> FieldSchema) -> FieldSchema {
    access("Collection", CATEGORY_STORAGE, FieldKind::String)
        .describe("The collection which stores the object.")
}

fn key(access: fn(&'static str, &'static str, FieldKind) -> FieldSchema) -> FieldSchema {
    access("Key", CATEGORY_STORAGE, FieldKind::String)
        .describe("The key of the object within the collection.")
}

impl Reflected for UserPresence {
    const TYPE_NAME: &'static str = "UserPresence";

    fn schema() -> TypeSchema {
        let field = |name, kind| FieldSchema::read_only(name, CATEGORY_PRESENCE, kind);
        TypeSchema {
            name: Self::TYPE_NAME,
            description: "A user session connected to the realtime socket.",
            fields: vec![
                field("UserId", FieldKind::String).describe("The user this presence belongs to."),
                field("SessionId", FieldKind::String)
                    .describe("A unique session ID identifying the particular connection."),
                field("Username", FieldKind::String).describe("The username for display purposes."),
                field("Persistence", FieldKind::Bool)
                    .describe("Whether this presence generates persistent data/messages."),
                field("Status", FieldKind::String)
                    .describe("A user-set status message for this stream, if applicable."),
            ],
        }
    }
}

impl Reflected for StoreObjectData {
    const TYPE_NAME: &'static str = "StoreObjectData";

    fn schema() -> TypeSchema {
        TypeSchema {
            name: Self::TYPE_NAME,
            description: "An object within the storage engine.",
            fields: vec![
                collection(FieldSchema::read_write),
                key(FieldSchema::read_write),
                FieldSchema::read_write("UserId", CATEGORY_STORAGE, FieldKind::String)
                    .describe("The user owner of the object."),
                FieldSchema::read_write("Value", CATEGORY_STORAGE, FieldKind::String)
                    .describe("The value of the object."),
                FieldSchema::read_write("Version", CATEGORY_STORAGE, FieldKind::String)
                    .describe("The version hash of the object."),
                FieldSchema::read_write("PermissionRead", CATEGORY_STORAGE, permission_read_kind())
                    .describe("The read access permissions for the object."),
                FieldSchema::read_write(
                    "PermissionWrite",
                    CATEGORY_STORAGE,
                    permission_write_kind(),
                )
                .describe("The write access permissions for the object."),
                FieldSchema::read_only("CreateTime", CATEGORY_STORAGE, FieldKind::DateTime)
                    .describe("The UNIX time when the object was created."),
                FieldSchema::read_only("UpdateTime", CATEGORY_STORAGE, FieldKind::DateTime)
                    .describe("The UNIX time when the object was last updated."),
            ],
        }
    }
}

impl Reflected for StoreObjectWrite {
    const TYPE_NAME: &'static str = "StoreObjectWrite";

    fn schema() -> TypeSchema {
        TypeSchema {
            name: Self::TYPE_NAME,
            description: "The object to store.",
            fields: vec![
                collection(FieldSchema::read_write),
                key(FieldSchema::read_write),
                FieldSchema::read_write("Value", CATEGORY_STORAGE, FieldKind::String)
                    .describe("The value of the object. Must be JSON."),
                FieldSchema::read_write("Version", CATEGORY_STORAGE, FieldKind::String).describe(
                    "The version hash of the object to check. Possible values are: [\"\", \"*\", \"#hash#\"].",
                ),
                FieldSchema::read_write("PermissionRead", CATEGORY_STORAGE, permission_read_kind())
                    .describe("The read access permissions for the object."),
                FieldSchema::read_write(
                    "PermissionWrite",
                    CATEGORY_STORAGE,
                    permission_write_kind(),
                )
                .describe("The write access permissions for the object."),
            ],
        }
    }
}

impl Reflected for ReadStorageObjectId {
    const TYPE_NAME: &'static str = "ReadStorageObjectId";

    fn schema() -> TypeSchema {
        TypeSchema {
            name: Self::TYPE_NAME,
            description: "Storage object to read.",
            fields: vec![
                collection(FieldSchema::read_write),
                key(FieldSchema::read_write),
                FieldSchema::read_write("UserId", CATEGORY_STORAGE, FieldKind::String)
                    .describe("The user owner of the object."),
            ],
        }
    }
}

impl Reflected for DeleteStorageObjectId {
    const TYPE_NAME: &'static str = "DeleteStorageObjectId";

    fn schema() -> TypeSchema {
        TypeSchema {
            name: Self::TYPE_NAME,
            description: "Storage object to delete.",
            fields: vec![
                collection(FieldSchema::read_write),
                key(FieldSchema::read_write),
                FieldSchema::read_write("Version", CATEGORY_STORAGE, FieldKind::String)
                    .describe("The version hash of the object."),
            ],
        }
    }
}

impl Reflected for StoreObjectAck {
    const TYPE_NAME: &'static str = "StoreObjectAck";

    fn schema() -> TypeSchema {
        TypeSchema {
            name: Self::TYPE_NAME,
            description: "A storage acknowledgement.",
            fields: vec![
                collection(FieldSchema::read_only),
                key(FieldSchema::read_only),
                FieldSchema::read_only("Version", CATEGORY_STORAGE, FieldKind::String)
                    .describe("The version hash of the object."),
                FieldSchema::read_only("UserId", CATEGORY_STORAGE, FieldKind::String)
                    .describe("The owner of the object."),
            ],
        }
    }
}

impl Reflected for StoreObjectAcks {
    const TYPE_NAME: &'static str = "StoreObjectAcks";

    fn schema() -> TypeSchema {
        TypeSchema {
            name: Self::TYPE_NAME,
            description: "Batch of acknowledgements.",
            fields: vec![FieldSchema::read_only(
                "StorageObjects",
                CATEGORY_STORAGE,
                FieldKind::records::<StoreObjectAck>(),
            )],
        }
    }
}

impl Reflected for StorageObjectList {
    const TYPE_NAME: &'static str = "StorageObjectList";

    fn schema() -> TypeSchema {
        TypeSchema {
            name: Self::TYPE_NAME,
            description: "List of storage objects.",
            fields: vec![
                FieldSchema::read_only(
                    "Objects",
                    CATEGORY_STORAGE,
                    FieldKind::records::<StoreObjectData>(),
                )
                .describe("The list of storage objects."),
                FieldSchema::read_only("Cursor", CATEGORY_STORAGE, FieldKind::String)
                    .describe("For the next page results, if any."),
            ],
        }
    }
}

impl Reflected for Party {
    const TYPE_NAME: &'static str = "Party";

    fn schema() -> TypeSchema {
        let field = |name, kind| FieldSchema::read_only(name, CATEGORY_PARTIES, kind);
        TypeSchema {
            name: Self::TYPE_NAME,
            description: "A party snapshot.",
            fields: vec![
                field("Id", FieldKind::String).describe("The unique party identifier."),
                field("Open", FieldKind::Bool).describe("True, if the party is open to join."),
                field("MaxSize", FieldKind::Int32)
                    .describe("The maximum number of party members."),
                field("Me", FieldKind::record::<UserPresence>())
                    .display_as("Self")
                    .describe("The current user in this party. i.e. Yourself."),
                field("Leader", FieldKind::record::<UserPresence>())
                    .describe("The current party leader."),
                field("Presences", FieldKind::records::<UserPresence>())
                    .describe("All members currently in the party."),
            ],
        }
    }
}

impl Reflected for PartyJoinRequest {
    const TYPE_NAME: &'static str = "PartyJoinRequest";

    fn schema() -> TypeSchema {
        let field = |name, kind| FieldSchema::read_only(name, CATEGORY_PARTIES, kind);
        TypeSchema {
            name: Self::TYPE_NAME,
            description: "Incoming notification for one or more new presences attempting to join the party.",
            fields: vec![
                field("PartyId", FieldKind::String)
                    .describe("The ID of the party to get a list of join requests for."),
                field("Presences", FieldKind::records::<UserPresence>())
                    .describe("Presences attempting to join, or who have joined."),
            ],
        }
    }
}

impl Reflected for PartyMatchmakerTicket {
    const TYPE_NAME: &'static str = "PartyMatchmakerTicket";

    fn schema() -> TypeSchema {
        let field = |name, kind| FieldSchema::read_only(name, CATEGORY_PARTIES, kind);
        TypeSchema {
            name: Self::TYPE_NAME,
            description: "A party-scoped matchmaking ticket.",
            fields: vec![
                field("PartyId", FieldKind::String).describe("The ID of the party."),
                field("Ticket", FieldKind::String)
                    .describe("The ticket that can be used to cancel matchmaking."),
            ],
        }
    }
}

impl Reflected for PartyClose {
    const TYPE_NAME: &'static str = "PartyClose";

    fn schema() -> TypeSchema {
        TypeSchema {
            name: Self::TYPE_NAME,
            description: "Information about a party close event.",
            fields: vec![
                FieldSchema::read_only("Id", CATEGORY_PARTIES, FieldKind::String)
                    .describe("The unique party identifier of the closing party."),
            ],
        }
    }
}

impl Reflected for PartyData {
    const TYPE_NAME: &'static str = "PartyData";

    fn schema() -> TypeSchema {
        let field = |name, kind| FieldSchema::read_only(name, CATEGORY_PARTIES, kind);
        TypeSchema {
            name: Self::TYPE_NAME,
            description: "Incoming party data delivered from the server.",
            fields: vec![
                field("PartyId", FieldKind::String).describe("The ID of the party."),
                field("Presence", FieldKind::record::<UserPresence>())
                    .describe("A reference to the user presence that sent this data, if any."),
                field("OpCode", FieldKind::Int64).describe("The operation code the message was sent with."),
                field("Data", FieldKind::String).describe("Data payload, if any."),
            ],
        }
    }
}

impl Reflected for PartyLeader {
    const TYPE_NAME: &'static str = "PartyLeader";

    fn schema() -> TypeSchema {
        let field = |name, kind| FieldSchema::read_only(name, CATEGORY_PARTIES, kind);
        TypeSchema {
            name: Self::TYPE_NAME,
            description: "Announcement of a new party leader.",
            fields: vec![
                field("PartyId", FieldKind::String)
                    .describe("The ID of the party to announce the new leader for."),
                field("Presence", FieldKind::record::<UserPresence>())
                    .describe("The presence of the new party leader."),
            ],
        }
    }
}

impl Reflected for PartyPresenceEvent {
    const TYPE_NAME: &'static str = "PartyPresenceEvent";

    fn schema() -> TypeSchema {
        let field = |name, kind| FieldSchema::read_only(name, CATEGORY_PARTIES, kind);
        TypeSchema {
            name: Self::TYPE_NAME,
            description: "Presence update for a particular party.",
            fields: vec![
                field("PartyId", FieldKind::String).describe("The ID of the party."),
                field("Joins", FieldKind::records::<UserPresence>())
                    .describe("The user presences that have just joined the party."),
                field("Leaves", FieldKind::records::<UserPresence>())
                    .describe("The user presences that have just left the party."),
            ],
        }
    }
}

/// Schemas of every presentation record. Built on each call.
pub fn all_schemas() -> Vec<TypeSchema> {
    vec![
        UserPresence::schema(),
        StoreObjectData::schema(),
        StoreObjectWrite::schema(),
        ReadStorageObjectId::schema(),
        DeleteStorageObjectId::schema(),
        StoreObjectAck::schema(),
        StoreObjectAcks::schema(),
        StorageObjectList::schema(),
        Party::schema(),
        PartyJoinRequest::schema(),
        PartyMatchmakerTicket::schema(),
        PartyClose::schema(),
        PartyData::schema(),
        PartyLeader::schema(),
        PartyPresenceEvent::schema(),
    ]
}

/// Schema of the record registered as `name`
pub fn schema_by_name(name: &str) -> Option<TypeSchema> {
    all_schemas().into_iter().find(|s| s.name == name)
}

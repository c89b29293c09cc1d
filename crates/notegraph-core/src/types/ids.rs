//! Entity ids and graph nodes
//!
//! Each entity kind gets its own id newtype so a tag id can never be passed
//! where a note id is expected. [`NodeId`] unions them; its canonical string
//! form `"<entity_type>:<ref_id>"` is what crosses serialization boundaries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::GraphError;

macro_rules! ref_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

ref_id!(
    /// Note identifier as assigned by the note registry
    NoteId
);
ref_id!(
    /// Person identifier from the people index
    PersonId
);
ref_id!(
    /// Tag name, e.g. `project` or `area/health`
    TagId
);
ref_id!(
    /// Slash-joined folder path relative to the vault root, e.g. `work/clients`
    FolderId
);
ref_id!(
    /// Heading identifier from the heading index
    HeadingId
);

/// Kinds of entity a node can represent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Note,
    Person,
    Tag,
    Folder,
    Heading,
}

impl EntityType {
    pub const ALL: [EntityType; 5] = [
        EntityType::Note,
        EntityType::Person,
        EntityType::Tag,
        EntityType::Folder,
        EntityType::Heading,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Note => "note",
            EntityType::Person => "person",
            EntityType::Tag => "tag",
            EntityType::Folder => "folder",
            EntityType::Heading => "heading",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| GraphError::UnknownEntityType(s.to_string()))
    }
}

/// Globally unique node identifier, namespaced by entity kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeId {
    Note(NoteId),
    Person(PersonId),
    Tag(TagId),
    Folder(FolderId),
    Heading(HeadingId),
}

impl NodeId {
    /// Build a node id from an entity kind and a raw ref id
    pub fn new(entity_type: EntityType, ref_id: impl Into<String>) -> Self {
        let ref_id = ref_id.into();
        match entity_type {
            EntityType::Note => NodeId::Note(NoteId(ref_id)),
            EntityType::Person => NodeId::Person(PersonId(ref_id)),
            EntityType::Tag => NodeId::Tag(TagId(ref_id)),
            EntityType::Folder => NodeId::Folder(FolderId(ref_id)),
            EntityType::Heading => NodeId::Heading(HeadingId(ref_id)),
        }
    }

    pub fn entity_type(&self) -> EntityType {
        match self {
            NodeId::Note(_) => EntityType::Note,
            NodeId::Person(_) => EntityType::Person,
            NodeId::Tag(_) => EntityType::Tag,
            NodeId::Folder(_) => EntityType::Folder,
            NodeId::Heading(_) => EntityType::Heading,
        }
    }

    /// The entity's own id, without the kind prefix
    pub fn ref_id(&self) -> &str {
        match self {
            NodeId::Note(id) => id.as_str(),
            NodeId::Person(id) => id.as_str(),
            NodeId::Tag(id) => id.as_str(),
            NodeId::Folder(id) => id.as_str(),
            NodeId::Heading(id) => id.as_str(),
        }
    }

    pub fn as_note(&self) -> Option<&NoteId> {
        match self {
            NodeId::Note(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.entity_type(), self.ref_id())
    }
}

impl FromStr for NodeId {
    type Err = GraphError;

    /// Parse `"<entity_type>:<ref_id>"`, splitting at the first colon so ref
    /// ids may themselves contain colons.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, ref_id) = s
            .split_once(':')
            .ok_or_else(|| GraphError::InvalidNodeId(s.to_string()))?;
        if ref_id.is_empty() {
            return Err(GraphError::InvalidNodeId(s.to_string()));
        }
        let entity_type = kind
            .parse::<EntityType>()
            .map_err(|_| GraphError::InvalidNodeId(s.to_string()))?;
        Ok(NodeId::new(entity_type, ref_id))
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl From<NoteId> for NodeId {
    fn from(id: NoteId) -> Self {
        NodeId::Note(id)
    }
}

impl From<PersonId> for NodeId {
    fn from(id: PersonId) -> Self {
        NodeId::Person(id)
    }
}

impl From<TagId> for NodeId {
    fn from(id: TagId) -> Self {
        NodeId::Tag(id)
    }
}

impl From<FolderId> for NodeId {
    fn from(id: FolderId) -> Self {
        NodeId::Folder(id)
    }
}

impl From<HeadingId> for NodeId {
    fn from(id: HeadingId) -> Self {
        NodeId::Heading(id)
    }
}

/// A graph node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,

    /// Display title, when the indexer knows one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Node {
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn entity_type(&self) -> EntityType {
        self.id.entity_type()
    }

    pub fn ref_id(&self) -> &str {
        self.id.ref_id()
    }
}

//! Typed, directed edges

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::NodeId;
use crate::error::GraphError;

/// The closed vocabulary of relations between entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeKind {
    /// folder → note
    FolderContainsNote,
    /// note → tag
    NoteHasTag,
    /// note → person
    NoteMentionsPerson,
    /// note → note
    NoteLinksNote,
    /// note → heading
    NoteLinksHeading,
    /// note → note
    NoteEmbedsNote,
}

impl EdgeKind {
    pub const ALL: [EdgeKind; 6] = [
        EdgeKind::FolderContainsNote,
        EdgeKind::NoteHasTag,
        EdgeKind::NoteMentionsPerson,
        EdgeKind::NoteLinksNote,
        EdgeKind::NoteLinksHeading,
        EdgeKind::NoteEmbedsNote,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::FolderContainsNote => "folder-contains-note",
            EdgeKind::NoteHasTag => "note-has-tag",
            EdgeKind::NoteMentionsPerson => "note-mentions-person",
            EdgeKind::NoteLinksNote => "note-links-note",
            EdgeKind::NoteLinksHeading => "note-links-heading",
            EdgeKind::NoteEmbedsNote => "note-embeds-note",
        }
    }

    /// Whether an incoming edge of this kind counts as a note backlink
    pub fn is_backlink(&self) -> bool {
        matches!(self, EdgeKind::NoteLinksNote | EdgeKind::NoteEmbedsNote)
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgeKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EdgeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| GraphError::UnknownEdgeKind(s.to_string()))
    }
}

/// A directed edge. Parallel and duplicate edges are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
}

impl Edge {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, kind: EdgeKind) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind,
        }
    }

    /// True if either endpoint is `id`
    pub fn touches(&self, id: &NodeId) -> bool {
        &self.from == id || &self.to == id
    }
}

/// Which adjacency side a query reads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    Outgoing,
    Incoming,
    #[default]
    Both,
}

impl Direction {
    pub fn includes_outgoing(&self) -> bool {
        matches!(self, Direction::Outgoing | Direction::Both)
    }

    pub fn includes_incoming(&self) -> bool {
        matches!(self, Direction::Incoming | Direction::Both)
    }
}

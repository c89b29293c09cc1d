//! Idempotent node materialization
//!
//! Each helper computes the node id for an entity, adds the node only if it
//! is absent, and returns the id. Existing nodes (labels, adjacency) are
//! never touched.

use crate::graph::store::GraphIndex;
use crate::types::{FolderId, HeadingId, Node, NodeId, NoteId, PersonId, TagId};

fn ensure_node(graph: &mut GraphIndex, id: NodeId) -> NodeId {
    if !graph.has_node(&id) {
        graph.add_node(Node::new(id.clone()));
    }
    id
}

pub fn ensure_note_node(graph: &mut GraphIndex, note: impl Into<NoteId>) -> NodeId {
    ensure_node(graph, NodeId::Note(note.into()))
}

pub fn ensure_person_node(graph: &mut GraphIndex, person: impl Into<PersonId>) -> NodeId {
    ensure_node(graph, NodeId::Person(person.into()))
}

pub fn ensure_tag_node(graph: &mut GraphIndex, tag: impl Into<TagId>) -> NodeId {
    ensure_node(graph, NodeId::Tag(tag.into()))
}

pub fn ensure_folder_node(graph: &mut GraphIndex, folder: impl Into<FolderId>) -> NodeId {
    ensure_node(graph, NodeId::Folder(folder.into()))
}

pub fn ensure_heading_node(graph: &mut GraphIndex, heading: impl Into<HeadingId>) -> NodeId {
    ensure_node(graph, NodeId::Heading(heading.into()))
}

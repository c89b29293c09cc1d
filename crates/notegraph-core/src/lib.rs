//! # Notegraph Core
//!
//! In-memory directed multigraph relating notes, folders, tags, people and
//! headings, built incrementally as notes are parsed.
//!
//! ## Key Components
//!
//! - **GraphIndex** ([`graph::store`]): node table, edge arena and the two
//!   adjacency indices kept in mirror
//! - **Node helpers** ([`graph::factory`]): idempotent `ensure_*_node` calls
//! - **Edge derivation** ([`indexing::builder`]): turns a [`ParsedNote`] into
//!   typed edges using caller-supplied resolvers
//! - **Queries** ([`graph::query`]): neighbors, edges by kind, backlinks
//!
//! ## Example
//!
//! ```rust
//! use notegraph_core::{get_backlinks, Edge, EdgeKind, GraphIndex, Node, NodeId, NoteId};
//!
//! let mut graph = GraphIndex::new();
//! let a = NodeId::from(NoteId::new("A"));
//! let b = NodeId::from(NoteId::new("B"));
//! graph.add_node(Node::new(a.clone()));
//! graph.add_node(Node::new(b.clone()));
//! graph.add_edge(Edge::new(a, b.clone(), EdgeKind::NoteLinksNote)).unwrap();
//!
//! assert_eq!(get_backlinks(&graph, &b).len(), 1);
//! ```

pub mod error;
pub mod graph;
pub mod indexing;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;

pub use error::{GraphError, GraphResult};
pub use graph::factory::{
    ensure_folder_node, ensure_heading_node, ensure_note_node, ensure_person_node,
    ensure_tag_node,
};
pub use graph::query::{
    get_backlinks, get_backlinks_with, get_edges_by_type, get_neighbors, BacklinkPolicy,
};
pub use graph::store::{create_graph_index, EdgeId, GraphIndex, GraphStats};
pub use indexing::builder::{build_edges_for_note, reindex_note, BuildReport, SkippedReference};
pub use indexing::resolve::{ReferenceResolver, Resolution, ResolutionStatus, ResolverContext};
pub use types::{
    Direction, Edge, EdgeKind, EntityType, FolderId, HeadingId, Node, NodeId, NoteEmbed, NoteId,
    NoteLink, ParsedNote, PersonId, PersonMention, TagId,
};

pub use notegraph_config::ReindexStrategy;

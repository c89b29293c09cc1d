//! Read-only queries over a [`GraphIndex`]

use std::collections::HashSet;

use notegraph_config::QueryConfig;

use crate::graph::store::GraphIndex;
use crate::types::{Direction, Edge, EdgeKind, NodeId};

/// Which incoming edge kinds count as backlinks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BacklinkPolicy {
    /// Also report `note-links-heading` edges. Those point at heading nodes,
    /// so this only changes results when querying a heading id.
    pub include_heading_links: bool,
}

impl BacklinkPolicy {
    fn accepts(&self, kind: EdgeKind) -> bool {
        kind.is_backlink() || (self.include_heading_links && kind == EdgeKind::NoteLinksHeading)
    }
}

impl From<&QueryConfig> for BacklinkPolicy {
    fn from(config: &QueryConfig) -> Self {
        Self {
            include_heading_links: config.include_heading_links_in_backlinks,
        }
    }
}

/// Distinct nodes one hop away in either direction
///
/// Multi-edges to the same neighbor collapse to one entry.
pub fn get_neighbors<'g>(graph: &'g GraphIndex, id: &NodeId) -> HashSet<&'g NodeId> {
    graph
        .outgoing(id)
        .map(|edge| &edge.to)
        .chain(graph.incoming(id).map(|edge| &edge.from))
        .collect()
}

/// Edges of exactly `kind` on the requested side(s) of `id`
///
/// Outgoing edges come first when `direction` is [`Direction::Both`].
pub fn get_edges_by_type<'g>(
    graph: &'g GraphIndex,
    id: &NodeId,
    kind: EdgeKind,
    direction: Direction,
) -> Vec<&'g Edge> {
    let mut edges = Vec::new();
    if direction.includes_outgoing() {
        edges.extend(graph.outgoing(id).filter(|edge| edge.kind == kind));
    }
    if direction.includes_incoming() {
        edges.extend(graph.incoming(id).filter(|edge| edge.kind == kind));
    }
    edges
}

/// Incoming `note-links-note` and `note-embeds-note` edges, in insertion order
pub fn get_backlinks<'g>(graph: &'g GraphIndex, note_id: &NodeId) -> Vec<&'g Edge> {
    get_backlinks_with(graph, note_id, BacklinkPolicy::default())
}

pub fn get_backlinks_with<'g>(
    graph: &'g GraphIndex,
    id: &NodeId,
    policy: BacklinkPolicy,
) -> Vec<&'g Edge> {
    graph
        .incoming(id)
        .filter(|edge| policy.accepts(edge.kind))
        .collect()
}

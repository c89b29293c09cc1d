//! In-memory graph index
//!
//! Edges live once in an arena; `outgoing` and `incoming` map each node to
//! the arena slots of the edges leaving and entering it, in insertion order.
//! Both maps always agree: an edge id sits in `outgoing[edge.from]` exactly
//! when it sits in `incoming[edge.to]`.
//!
//! Freed arena slots are recycled through a free list. Adjacency order is
//! the order ids were appended to a node's list, never the slot number, so
//! reuse does not reorder anything. Each slot carries a generation that is
//! bumped when its edge is removed, so an [`EdgeId`] for a removed edge never
//! resolves to the edge that later reuses the slot.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;
use tracing::trace;

use crate::error::{GraphError, GraphResult};
use crate::types::{Edge, EdgeKind, EntityType, Node, NodeId};

/// Generational handle to an edge stored in a [`GraphIndex`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId {
    index: usize,
    generation: u32,
}

impl EdgeId {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Slot {
    generation: u32,
    edge: Option<Edge>,
}

/// Node and edge counts, broken down by kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub nodes_by_type: BTreeMap<EntityType, usize>,
    pub edges_by_kind: BTreeMap<EdgeKind, usize>,
}

/// Directed multigraph over notes, people, tags, folders and headings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphIndex {
    nodes: HashMap<NodeId, Node>,
    slots: Vec<Slot>,
    free: Vec<usize>,
    outgoing: HashMap<NodeId, Vec<EdgeId>>,
    incoming: HashMap<NodeId, Vec<EdgeId>>,
}

/// Create an empty graph index
pub fn create_graph_index() -> GraphIndex {
    GraphIndex::new()
}

impl GraphIndex {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Nodes
    // ------------------------------------------------------------------

    /// Insert or overwrite a node, returning the previous entry
    ///
    /// Adjacency for an existing node is left as it was.
    pub fn add_node(&mut self, node: Node) -> Option<Node> {
        self.outgoing.entry(node.id.clone()).or_default();
        self.incoming.entry(node.id.clone()).or_default();
        trace!(node = %node.id, "add node");
        self.nodes.insert(node.id.clone(), node)
    }

    pub fn has_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Remove a node and every edge touching it
    ///
    /// Unknown ids are a no-op and return `None`.
    pub fn remove_node(&mut self, id: &NodeId) -> Option<Node> {
        let node = self.nodes.remove(id)?;
        let removed = self.remove_node_edges(id);
        self.outgoing.remove(id);
        self.incoming.remove(id);
        trace!(node = %id, edges = removed, "remove node");
        Some(node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    pub fn nodes_of_type(&self, entity_type: EntityType) -> impl Iterator<Item = &Node> + '_ {
        self.nodes
            .values()
            .filter(move |node| node.entity_type() == entity_type)
    }

    // ------------------------------------------------------------------
    // Edges
    // ------------------------------------------------------------------

    /// Append an edge to both adjacency sides
    ///
    /// Both endpoints must already be nodes. If either is missing nothing is
    /// mutated and [`GraphError::MissingEndpoint`] names the absent one.
    /// Duplicates are not collapsed.
    pub fn add_edge(&mut self, edge: Edge) -> GraphResult<EdgeId> {
        let missing = [&edge.from, &edge.to]
            .into_iter()
            .find(|id| !self.nodes.contains_key(*id))
            .cloned();
        if let Some(missing) = missing {
            return Err(GraphError::MissingEndpoint {
                from: edge.from,
                to: edge.to,
                kind: edge.kind,
                missing,
            });
        }

        trace!(from = %edge.from, to = %edge.to, kind = %edge.kind, "add edge");

        let from = edge.from.clone();
        let to = edge.to.clone();
        let edge_id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.edge = Some(edge);
                EdgeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    edge: Some(edge),
                });
                EdgeId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        };

        self.outgoing.entry(from).or_default().push(edge_id);
        self.incoming.entry(to).or_default().push(edge_id);
        Ok(edge_id)
    }

    /// Look up a live edge; ids of removed edges yield `None`
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.edge.as_ref())
    }

    pub fn edge_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.slots.iter().filter_map(|slot| slot.edge.as_ref())
    }

    /// Edges leaving `id`, in insertion order
    pub fn outgoing(&self, id: &NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.resolve(self.outgoing.get(id))
    }

    /// Edges entering `id`, in insertion order
    pub fn incoming(&self, id: &NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.resolve(self.incoming.get(id))
    }

    pub fn get_outgoing_edges(&self, id: &NodeId) -> Vec<&Edge> {
        self.outgoing(id).collect()
    }

    pub fn get_incoming_edges(&self, id: &NodeId) -> Vec<&Edge> {
        self.incoming(id).collect()
    }

    /// Remove every edge touching `id` but keep the node
    ///
    /// Only those exact edges go; other edges between the same neighbors,
    /// of any kind, survive. Returns the number of edges removed.
    pub fn remove_node_edges(&mut self, id: &NodeId) -> usize {
        let mut ids = self.outgoing.get_mut(id).map(std::mem::take).unwrap_or_default();
        ids.extend(self.incoming.get_mut(id).map(std::mem::take).unwrap_or_default());
        self.detach(ids)
    }

    /// Remove only the edges leaving `id`
    ///
    /// Backlinks from other notes are kept. Used to clear a note's derived
    /// edges before it is rebuilt.
    pub fn remove_outgoing_edges(&mut self, id: &NodeId) -> usize {
        let ids = self.outgoing.get_mut(id).map(std::mem::take).unwrap_or_default();
        self.detach(ids)
    }

    /// Remove the edges of `kind` entering `id`
    pub fn remove_incoming_edges(&mut self, id: &NodeId, kind: EdgeKind) -> usize {
        let ids: Vec<EdgeId> = self
            .incoming
            .get(id)
            .into_iter()
            .flatten()
            .copied()
            .filter(|edge_id| self.edge(*edge_id).is_some_and(|edge| edge.kind == kind))
            .collect();
        self.detach(ids)
    }

    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            nodes: self.node_count(),
            edges: self.edge_count(),
            ..Default::default()
        };
        for node in self.nodes() {
            *stats.nodes_by_type.entry(node.entity_type()).or_default() += 1;
        }
        for edge in self.edges() {
            *stats.edges_by_kind.entry(edge.kind).or_default() += 1;
        }
        stats
    }

    fn resolve<'a>(
        &'a self,
        ids: Option<&'a Vec<EdgeId>>,
    ) -> impl Iterator<Item = &'a Edge> + 'a {
        ids.into_iter()
            .flatten()
            .filter_map(move |edge_id| self.edge(*edge_id))
    }

    /// Free the given arena slots and unlink them from both sides.
    ///
    /// Each touched adjacency list is filtered once, so removing all edges of
    /// a node costs time linear in the lists involved. A self-loop shows up
    /// twice in `ids`; the second visit sees a bumped generation and skips it.
    fn detach(&mut self, ids: Vec<EdgeId>) -> usize {
        let mut removed = HashSet::new();
        let mut sources = HashSet::new();
        let mut targets = HashSet::new();
        for edge_id in ids {
            let Some(slot) = self
                .slots
                .get_mut(edge_id.index)
                .filter(|slot| slot.generation == edge_id.generation)
            else {
                continue;
            };
            let Some(edge) = slot.edge.take() else {
                continue;
            };
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(edge_id.index);
            removed.insert(edge_id);
            sources.insert(edge.from);
            targets.insert(edge.to);
        }

        for source in &sources {
            if let Some(list) = self.outgoing.get_mut(source) {
                list.retain(|id| !removed.contains(id));
            }
        }
        for target in &targets {
            if let Some(list) = self.incoming.get_mut(target) {
                list.retain(|id| !removed.contains(id));
            }
        }
        removed.len()
    }
}

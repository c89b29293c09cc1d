//! Graph Error Types

use thiserror::Error;

use crate::types::{EdgeKind, NodeId};

/// Error type for graph operations
///
/// None of these abort indexing. `add_edge` reports [`GraphError::MissingEndpoint`]
/// so callers can observe the drop; the edge builder logs it and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("cannot add {kind} edge {from} -> {to}: node {missing} is not in the graph")]
    MissingEndpoint {
        from: NodeId,
        to: NodeId,
        kind: EdgeKind,
        missing: NodeId,
    },

    #[error("invalid node id '{0}': expected '<entity_type>:<ref_id>'")]
    InvalidNodeId(String),

    #[error("unknown entity type '{0}'")]
    UnknownEntityType(String),

    #[error("unknown edge kind '{0}'")]
    UnknownEdgeKind(String),
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NoteId;

    #[test]
    fn test_missing_endpoint_message() {
        let a = NodeId::from(NoteId::new("A"));
        let b = NodeId::from(NoteId::new("B"));
        let err = GraphError::MissingEndpoint {
            from: a,
            to: b.clone(),
            kind: EdgeKind::NoteLinksNote,
            missing: b,
        };

        assert_eq!(
            err.to_string(),
            "cannot add note-links-note edge note:A -> note:B: node note:B is not in the graph"
        );
    }
}

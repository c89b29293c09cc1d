//! Graph data model: typed ids, nodes, edges and parsed note input

mod edge;
mod ids;
mod note;

pub use edge::{Direction, Edge, EdgeKind};
pub use ids::{EntityType, FolderId, HeadingId, Node, NodeId, NoteId, PersonId, TagId};
pub use note::{NoteEmbed, NoteLink, ParsedNote, PersonMention};

//! Edge derivation for a single note
//!
//! [`build_edges_for_note`] runs five independent passes over a
//! [`ParsedNote`]: folder containment, tags, person mentions, links and
//! embeds. Each pass ensures its target node before adding the edge, so
//! references to notes that have not been indexed yet still land in the
//! graph and are filled in when those notes arrive.
//!
//! Nothing here fails. References the resolver cannot settle are skipped,
//! logged at debug level and listed in the returned [`BuildReport`]. Tracking
//! them as unlinked mentions is the caller's concern.
//!
//! Empty names never become nodes: a note with an empty id derives nothing,
//! empty tags are dropped and empty reference names count as unresolved. An
//! empty heading text is a plain note link.

use tracing::debug;

use crate::graph::factory::{
    ensure_folder_node, ensure_heading_node, ensure_note_node, ensure_person_node,
    ensure_tag_node,
};
use crate::graph::store::GraphIndex;
use crate::indexing::path::folder_for_path;
use crate::indexing::resolve::{
    ReferenceResolver, Resolution, ResolutionStatus, ResolverContext,
};
use crate::types::{Edge, EdgeKind, NodeId, ParsedNote};
use notegraph_config::ReindexStrategy;

/// A reference that produced no edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkippedReference {
    Mention {
        person_name: String,
        status: ResolutionStatus,
    },
    Link {
        note_name: String,
        heading_text: Option<String>,
        status: ResolutionStatus,
    },
    Embed {
        note_name: String,
        status: ResolutionStatus,
    },
}

impl SkippedReference {
    pub fn status(&self) -> ResolutionStatus {
        match self {
            SkippedReference::Mention { status, .. }
            | SkippedReference::Link { status, .. }
            | SkippedReference::Embed { status, .. } => *status,
        }
    }
}

/// What one derivation pass did to the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub note: NodeId,
    pub folder: Option<NodeId>,
    pub edges_added: usize,
    /// Edges the graph refused. Every endpoint is ensured right before its
    /// edge is added, so this only counts if that ordering is broken.
    pub edges_dropped: usize,
    pub skipped: Vec<SkippedReference>,
}

impl BuildReport {
    fn new(note: NodeId) -> Self {
        Self {
            note,
            folder: None,
            edges_added: 0,
            edges_dropped: 0,
            skipped: Vec::new(),
        }
    }

    fn record(&mut self, graph: &mut GraphIndex, edge: Edge) {
        match graph.add_edge(edge) {
            Ok(_) => self.edges_added += 1,
            Err(e) => {
                debug!("dropping edge: {}", e);
                self.edges_dropped += 1;
            }
        }
    }
}

/// Derive every edge for `note` and add it to `graph`
///
/// Purely additive: edges from an earlier pass for the same note are kept,
/// so calling this twice doubles them. Use [`reindex_note`] with
/// [`ReindexStrategy::ClearOutgoing`] to rebuild in place.
pub fn build_edges_for_note<R: ReferenceResolver + ?Sized>(
    graph: &mut GraphIndex,
    note: &ParsedNote,
    ctx: &ResolverContext<'_, R>,
) -> BuildReport {
    if note.id.as_str().is_empty() {
        debug!(path = %note.path, "skipping note with empty id");
        return BuildReport::new(NodeId::from(note.id.clone()));
    }

    let from = ensure_note_node(graph, note.id.clone());
    let mut report = BuildReport::new(from.clone());

    // Folder containment runs folder -> note, the only pass not rooted at the note
    if let Some(folder) = folder_for_path(&note.path) {
        let folder = ensure_folder_node(graph, folder);
        report.record(
            graph,
            Edge::new(folder.clone(), from.clone(), EdgeKind::FolderContainsNote),
        );
        report.folder = Some(folder);
    }

    for tag in &note.all_tags {
        if tag.as_str().is_empty() {
            debug!(note = %report.note, "skipping empty tag");
            continue;
        }
        let tag = ensure_tag_node(graph, tag.clone());
        report.record(graph, Edge::new(from.clone(), tag, EdgeKind::NoteHasTag));
    }

    for mention in &note.people_mentions {
        let resolution = unless_empty(&mention.person_name, || {
            ctx.resolve_person_mention(&mention.person_name)
        });
        let status = resolution.status();
        match resolution.resolved() {
            Some(person) => {
                let person = ensure_person_node(graph, person);
                report.record(
                    graph,
                    Edge::new(from.clone(), person, EdgeKind::NoteMentionsPerson),
                );
            }
            None => {
                debug!(
                    note = %report.note,
                    person = %mention.person_name,
                    ?status,
                    "skipping person mention"
                );
                report.skipped.push(SkippedReference::Mention {
                    person_name: mention.person_name.clone(),
                    status,
                });
            }
        }
    }

    for link in &note.links {
        let heading_text = link.heading_text.as_deref().filter(|text| !text.is_empty());
        let (status, target) = match heading_text {
            Some(heading_text) => {
                let resolution = unless_empty(&link.note_name, || {
                    ctx.resolve_heading_link(&link.note_name, heading_text)
                });
                let status = resolution.status();
                let target = resolution.resolved().map(|heading| {
                    (ensure_heading_node(graph, heading), EdgeKind::NoteLinksHeading)
                });
                (status, target)
            }
            None => {
                let resolution =
                    unless_empty(&link.note_name, || ctx.resolve_note_link(&link.note_name));
                let status = resolution.status();
                let target = resolution
                    .resolved()
                    .map(|target| (ensure_note_node(graph, target), EdgeKind::NoteLinksNote));
                (status, target)
            }
        };

        match target {
            Some((to, kind)) => report.record(graph, Edge::new(from.clone(), to, kind)),
            None => {
                debug!(
                    note = %report.note,
                    target = %link.note_name,
                    heading = ?link.heading_text,
                    ?status,
                    "skipping link"
                );
                report.skipped.push(SkippedReference::Link {
                    note_name: link.note_name.clone(),
                    heading_text: link.heading_text.clone(),
                    status,
                });
            }
        }
    }

    for embed in &note.embeds {
        let resolution =
            unless_empty(&embed.note_name, || ctx.resolve_note_link(&embed.note_name));
        let status = resolution.status();
        match resolution.resolved() {
            Some(target) => {
                let target = ensure_note_node(graph, target);
                report.record(
                    graph,
                    Edge::new(from.clone(), target, EdgeKind::NoteEmbedsNote),
                );
            }
            None => {
                debug!(
                    note = %report.note,
                    target = %embed.note_name,
                    ?status,
                    "skipping embed"
                );
                report.skipped.push(SkippedReference::Embed {
                    note_name: embed.note_name.clone(),
                    status,
                });
            }
        }
    }

    debug!(
        note = %report.note,
        added = report.edges_added,
        skipped = report.skipped.len(),
        "built edges for note"
    );
    report
}

fn unless_empty<T>(name: &str, resolve: impl FnOnce() -> Resolution<T>) -> Resolution<T> {
    if name.is_empty() {
        Resolution::Unresolved
    } else {
        resolve()
    }
}

/// Reindex `note` according to `strategy`
///
/// With [`ReindexStrategy::ClearOutgoing`] every edge the note derived for
/// itself is removed first: its outgoing edges plus the folder edge pointing
/// into it. Backlinks from other notes stay.
pub fn reindex_note<R: ReferenceResolver + ?Sized>(
    graph: &mut GraphIndex,
    note: &ParsedNote,
    ctx: &ResolverContext<'_, R>,
    strategy: ReindexStrategy,
) -> BuildReport {
    if strategy == ReindexStrategy::ClearOutgoing {
        let note_id = NodeId::from(note.id.clone());
        let cleared = graph.remove_outgoing_edges(&note_id)
            + graph.remove_incoming_edges(&note_id, EdgeKind::FolderContainsNote);
        debug!(note = %note_id, cleared, "cleared outgoing edges before reindex");
    }
    build_edges_for_note(graph, note, ctx)
}

//! Driving a derivation pass through the exact-match test resolver

use notegraph_core::test_support::{MapResolver, NameTable};
use notegraph_core::{
    build_edges_for_note, EdgeKind, GraphIndex, HeadingId, NodeId, NoteId, ParsedNote, PersonId,
    ResolutionStatus,
};

#[test]
fn test_map_resolver_drives_build() {
    let notes = NameTable::new().with("B", NoteId::new("B"));
    let headings = NameTable::new().with("B#Intro", HeadingId::new("B#intro"));
    let people: NameTable<PersonId> = NameTable::new();
    let resolver = MapResolver::new();
    let ctx = resolver.context(&notes, &headings, &people);

    let mut graph = GraphIndex::new();
    let note = ParsedNote::new("A", "a.md")
        .with_link("B")
        .with_heading_link("B", "Intro")
        .with_mention("Ada");
    let report = build_edges_for_note(&mut graph, &note, &ctx);

    assert_eq!(report.edges_added, 2);
    assert_eq!(resolver.calls(), 3);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].status(), ResolutionStatus::Unresolved);

    let targets: Vec<_> = graph
        .outgoing(&NodeId::from(NoteId::new("A")))
        .map(|edge| (edge.to.to_string(), edge.kind))
        .collect();
    assert_eq!(
        targets,
        vec![
            ("note:B".to_string(), EdgeKind::NoteLinksNote),
            ("heading:B#intro".to_string(), EdgeKind::NoteLinksHeading),
        ]
    );
}

#[test]
fn test_name_table_reports_ambiguity() {
    let notes = NameTable::new()
        .with("Twin", NoteId::new("twin-1"))
        .with("Twin", NoteId::new("twin-2"));
    let headings = NameTable::new();
    let people = NameTable::new();
    let resolver = MapResolver::new();
    let ctx = resolver.context(&notes, &headings, &people);

    let mut graph = GraphIndex::new();
    let report = build_edges_for_note(&mut graph, &ParsedNote::new("A", "a.md").with_embed("Twin"), &ctx);

    assert_eq!(report.edges_added, 0);
    assert_eq!(report.skipped[0].status(), ResolutionStatus::Ambiguous);
    assert_eq!(graph.node_count(), 1);
}

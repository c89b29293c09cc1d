//! End-to-end edge derivation scenarios
//!
//! Drives `build_edges_for_note` through the public API with the exact-match
//! resolver from `test_support`, then checks the graph with the query API.

use notegraph_config::GraphConfig;
use notegraph_core::test_support::{MapResolver, NameTable};
use notegraph_core::{
    build_edges_for_note, get_backlinks, get_backlinks_with, get_neighbors, reindex_note,
    BacklinkPolicy, Edge, EdgeKind, EntityType, GraphIndex, HeadingId, NodeId, NoteId,
    ParsedNote, PersonId,
};

fn id(raw: &str) -> NodeId {
    raw.parse().expect("valid node id")
}

#[test]
fn test_work_note_with_tag_and_link() {
    let notes = NameTable::new().with("B", NoteId::new("B"));
    let headings = NameTable::new();
    let people = NameTable::new();
    let resolver = MapResolver::new();
    let ctx = resolver.context(&notes, &headings, &people);

    let mut graph = GraphIndex::new();
    let note = ParsedNote::new("A", "work/b.md")
        .with_tag("project")
        .with_link("B");
    let report = build_edges_for_note(&mut graph, &note, &ctx);

    for node in ["note:A", "folder:work", "tag:project", "note:B"] {
        assert!(graph.has_node(&id(node)), "missing {node}");
    }
    assert_eq!(graph.node_count(), 4);

    assert_eq!(
        graph.get_outgoing_edges(&id("folder:work")),
        vec![&Edge::new(id("folder:work"), id("note:A"), EdgeKind::FolderContainsNote)]
    );
    assert_eq!(
        graph.get_outgoing_edges(&id("note:A")),
        vec![
            &Edge::new(id("note:A"), id("tag:project"), EdgeKind::NoteHasTag),
            &Edge::new(id("note:A"), id("note:B"), EdgeKind::NoteLinksNote),
        ]
    );
    assert_eq!(report.edges_added, 3);
    assert!(report.skipped.is_empty());
}

#[test]
fn test_direct_edge_shows_up_as_backlink() {
    let mut graph = GraphIndex::new();
    graph.add_node(notegraph_core::Node::new(id("note:A")));
    graph.add_node(notegraph_core::Node::new(id("note:B")));
    graph
        .add_edge(Edge::new(id("note:A"), id("note:B"), EdgeKind::NoteLinksNote))
        .expect("both endpoints exist");

    assert_eq!(
        get_backlinks(&graph, &id("note:B")),
        vec![&Edge::new(id("note:A"), id("note:B"), EdgeKind::NoteLinksNote)]
    );
}

#[test]
fn test_building_twice_doubles_every_edge() {
    let notes = NameTable::new().with("B", NoteId::new("B"));
    let headings = NameTable::new().with("B#Plan", HeadingId::new("B#plan"));
    let people = NameTable::new().with("Ada", PersonId::new("ada"));
    let resolver = MapResolver::new();
    let ctx = resolver.context(&notes, &headings, &people);

    let note = ParsedNote::new("A", "work/a.md")
        .with_tag("project")
        .with_mention("Ada")
        .with_link("B")
        .with_heading_link("B", "Plan")
        .with_embed("B");

    let mut graph = GraphIndex::new();
    build_edges_for_note(&mut graph, &note, &ctx);
    let once = graph.stats();
    build_edges_for_note(&mut graph, &note, &ctx);
    let twice = graph.stats();

    assert_eq!(once.edges, 6);
    assert_eq!(twice.nodes, once.nodes);
    for kind in EdgeKind::ALL {
        assert_eq!(
            twice.edges_by_kind.get(&kind).copied().unwrap_or(0),
            2 * once.edges_by_kind.get(&kind).copied().unwrap_or(0),
            "{kind} should double"
        );
    }
    assert_eq!(get_backlinks(&graph, &id("note:B")).len(), 4);
}

#[test]
fn test_clearing_before_rebuild_avoids_duplicates() {
    let notes = NameTable::new().with("B", NoteId::new("B"));
    let headings = NameTable::new();
    let people = NameTable::new();
    let resolver = MapResolver::new();
    let ctx = resolver.context(&notes, &headings, &people);

    let note = ParsedNote::new("A", "work/a.md").with_link("B");
    let mut graph = GraphIndex::new();
    build_edges_for_note(&mut graph, &note, &ctx);

    graph.remove_node_edges(&id("note:A"));
    build_edges_for_note(&mut graph, &note, &ctx);

    assert_eq!(graph.edge_count(), 2);
    assert!(graph.has_node(&id("note:A")));
}

#[test]
fn test_link_to_unindexed_note_materializes_target() {
    let notes = NameTable::new().with("Later", NoteId::new("later"));
    let headings = NameTable::new();
    let people = NameTable::new();
    let resolver = MapResolver::new();
    let ctx = resolver.context(&notes, &headings, &people);

    let mut graph = GraphIndex::new();
    build_edges_for_note(&mut graph, &ParsedNote::new("A", "a.md").with_link("Later"), &ctx);

    // The target exists as a bare node until its own note is indexed
    let later = graph.get_node(&id("note:later")).expect("target node");
    assert_eq!(later.entity_type(), EntityType::Note);
    assert!(graph.get_outgoing_edges(&id("note:later")).is_empty());

    build_edges_for_note(&mut graph, &ParsedNote::new("later", "later.md").with_tag("t"), &ctx);

    let neighbors = get_neighbors(&graph, &id("note:later"));
    assert!(neighbors.contains(&id("note:A")));
    assert!(neighbors.contains(&id("tag:t")));
    assert_eq!(get_backlinks(&graph, &id("note:later")).len(), 1);
}

#[test]
fn test_removing_note_cleans_up_everything_it_touched() {
    let notes = NameTable::new().with("B", NoteId::new("B"));
    let headings = NameTable::new();
    let people = NameTable::new().with("Ada", PersonId::new("ada"));
    let resolver = MapResolver::new();
    let ctx = resolver.context(&notes, &headings, &people);

    let mut graph = GraphIndex::new();
    build_edges_for_note(
        &mut graph,
        &ParsedNote::new("A", "work/a.md")
            .with_tag("t")
            .with_mention("Ada")
            .with_link("B"),
        &ctx,
    );

    graph.remove_node(&id("note:A"));

    assert_eq!(graph.edge_count(), 0);
    assert!(graph.edges().all(|edge| !edge.touches(&id("note:A"))));
    // Entity nodes stay; there is no garbage collection
    assert!(graph.has_node(&id("tag:t")));
    assert!(graph.has_node(&id("person:ada")));
    assert!(graph.has_node(&id("folder:work")));
}

#[test]
fn test_config_drives_reindex_and_backlinks() {
    let config = GraphConfig::from_toml_str(
        r#"
        [indexing]
        reindex_strategy = "clear_outgoing"

        [query]
        include_heading_links_in_backlinks = true
        "#,
    )
    .expect("valid config");

    let notes = NameTable::new();
    let headings = NameTable::new().with("B#Plan", HeadingId::new("B#plan"));
    let people = NameTable::new();
    let resolver = MapResolver::new();
    let ctx = resolver.context(&notes, &headings, &people);

    let note = ParsedNote::new("A", "a.md").with_heading_link("B", "Plan");
    let mut graph = GraphIndex::new();
    for _ in 0..3 {
        reindex_note(&mut graph, &note, &ctx, config.indexing.reindex_strategy);
    }

    let heading = id("heading:B#plan");
    assert!(get_backlinks(&graph, &heading).is_empty());
    let backlinks = get_backlinks_with(&graph, &heading, BacklinkPolicy::from(&config.query));
    assert_eq!(backlinks.len(), 1);
    assert_eq!(resolver.calls(), 3);
}

#[test]
fn test_parsed_note_from_json() {
    let note: ParsedNote = serde_json::from_value(serde_json::json!({
        "id": "A",
        "path": "journal\\2024\\a.md",
        "all_tags": ["daily"],
        "people_mentions": [{"person_name": "Ada"}],
        "links": [],
        "embeds": []
    }))
    .expect("valid parsed note");

    let notes = NameTable::new();
    let headings = NameTable::new();
    let people = NameTable::new().with("Ada", PersonId::new("ada"));
    let resolver = MapResolver::new();
    let ctx = resolver.context(&notes, &headings, &people);

    let mut graph = GraphIndex::new();
    let report = build_edges_for_note(&mut graph, &note, &ctx);

    assert_eq!(report.folder, Some(id("folder:journal/2024")));
    assert_eq!(report.edges_added, 3);
}

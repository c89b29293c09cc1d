//! Exact-match resolver for tests
//!
//! [`MapResolver`] resolves names by exact lookup in [`NameTable`]s:
//! no entry is unresolved, one entry is resolved, several are ambiguous.
//! Heading links are looked up under the key `"<note name>#<heading text>"`.
//!
//! See `tests/map_resolver_tests.rs` for a full derivation pass driven by it.

use std::cell::Cell;
use std::collections::HashMap;

use crate::indexing::resolve::{ReferenceResolver, Resolution, ResolverContext};
use crate::types::{HeadingId, NoteId, PersonId};

/// Name → candidate ids
#[derive(Debug, Clone)]
pub struct NameTable<T> {
    entries: HashMap<String, Vec<T>>,
}

impl<T> Default for NameTable<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T: Clone> NameTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`NameTable::insert`]
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, id: T) -> Self {
        self.insert(name, id);
        self
    }

    /// Add a candidate for `name`; a second candidate makes it ambiguous
    pub fn insert(&mut self, name: impl Into<String>, id: T) {
        self.entries.entry(name.into()).or_default().push(id);
    }

    pub fn lookup(&self, name: &str) -> Resolution<T> {
        match self.entries.get(name).map(Vec::as_slice) {
            None | Some([]) => Resolution::Unresolved,
            Some([only]) => Resolution::Resolved(only.clone()),
            Some(many) => Resolution::Ambiguous(many.to_vec()),
        }
    }
}

/// Resolver backed by [`NameTable`]s, counting how often it is consulted
#[derive(Debug, Default)]
pub struct MapResolver {
    calls: Cell<usize>,
}

impl MapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of resolve calls made so far
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn context<'a>(
        &'a self,
        notes: &'a NameTable<NoteId>,
        headings: &'a NameTable<HeadingId>,
        people: &'a NameTable<PersonId>,
    ) -> ResolverContext<'a, Self> {
        ResolverContext::new(self, notes, headings, people, &())
    }

    fn bump(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl ReferenceResolver for MapResolver {
    type NoteRegistry = NameTable<NoteId>;
    type HeadingIndex = NameTable<HeadingId>;
    type PeopleIndex = NameTable<PersonId>;
    type FolderRegistry = ();

    fn resolve_note_link(&self, note_name: &str, notes: &Self::NoteRegistry) -> Resolution<NoteId> {
        self.bump();
        notes.lookup(note_name)
    }

    fn resolve_heading_link(
        &self,
        note_name: &str,
        heading_text: &str,
        _notes: &Self::NoteRegistry,
        headings: &Self::HeadingIndex,
    ) -> Resolution<HeadingId> {
        self.bump();
        headings.lookup(&format!("{}#{}", note_name, heading_text))
    }

    fn resolve_person_mention(
        &self,
        person_name: &str,
        people: &Self::PeopleIndex,
    ) -> Resolution<PersonId> {
        self.bump();
        people.lookup(person_name)
    }
}

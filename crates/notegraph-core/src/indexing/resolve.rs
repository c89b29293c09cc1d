//! Reference resolution contract
//!
//! Mapping a textual reference (note name, heading text, person name) to an
//! entity id is done by the host application against its own registries.
//! This crate only calls into it through [`ReferenceResolver`] and never
//! looks inside the registries.

use serde::Serialize;

use crate::types::{HeadingId, NoteId, PersonId};

/// Outcome of resolving one reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    Resolved(T),
    /// Several candidates matched; the caller decides how to surface this
    Ambiguous(Vec<T>),
    Unresolved,
}

/// Status of a [`Resolution`] without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionStatus {
    Resolved,
    Ambiguous,
    Unresolved,
}

impl<T> Resolution<T> {
    pub fn status(&self) -> ResolutionStatus {
        match self {
            Resolution::Resolved(_) => ResolutionStatus::Resolved,
            Resolution::Ambiguous(_) => ResolutionStatus::Ambiguous,
            Resolution::Unresolved => ResolutionStatus::Unresolved,
        }
    }

    pub fn resolved(self) -> Option<T> {
        match self {
            Resolution::Resolved(target) => Some(target),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

/// Synchronous lookups against caller-built registries
///
/// Implementations must not block or perform I/O; they run inside the
/// indexing call path.
pub trait ReferenceResolver {
    type NoteRegistry: ?Sized;
    type HeadingIndex: ?Sized;
    type PeopleIndex: ?Sized;
    type FolderRegistry: ?Sized;

    fn resolve_note_link(&self, note_name: &str, notes: &Self::NoteRegistry) -> Resolution<NoteId>;

    fn resolve_heading_link(
        &self,
        note_name: &str,
        heading_text: &str,
        notes: &Self::NoteRegistry,
        headings: &Self::HeadingIndex,
    ) -> Resolution<HeadingId>;

    fn resolve_person_mention(
        &self,
        person_name: &str,
        people: &Self::PeopleIndex,
    ) -> Resolution<PersonId>;
}

/// A resolver plus the registries it reads, borrowed for one indexing call
///
/// Registries are passed through to the resolver unmodified.
pub struct ResolverContext<'a, R: ReferenceResolver + ?Sized> {
    pub resolver: &'a R,
    pub note_registry: &'a R::NoteRegistry,
    pub heading_index: &'a R::HeadingIndex,
    pub people_index: &'a R::PeopleIndex,
    /// Not consulted by edge derivation today; folders come from the note path
    pub folder_registry: &'a R::FolderRegistry,
}

impl<'a, R: ReferenceResolver + ?Sized> ResolverContext<'a, R> {
    pub fn new(
        resolver: &'a R,
        note_registry: &'a R::NoteRegistry,
        heading_index: &'a R::HeadingIndex,
        people_index: &'a R::PeopleIndex,
        folder_registry: &'a R::FolderRegistry,
    ) -> Self {
        Self {
            resolver,
            note_registry,
            heading_index,
            people_index,
            folder_registry,
        }
    }

    pub fn resolve_note_link(&self, note_name: &str) -> Resolution<NoteId> {
        self.resolver
            .resolve_note_link(note_name, self.note_registry)
    }

    pub fn resolve_heading_link(&self, note_name: &str, heading_text: &str) -> Resolution<HeadingId> {
        self.resolver.resolve_heading_link(
            note_name,
            heading_text,
            self.note_registry,
            self.heading_index,
        )
    }

    pub fn resolve_person_mention(&self, person_name: &str) -> Resolution<PersonId> {
        self.resolver
            .resolve_person_mention(person_name, self.people_index)
    }
}

impl<R: ReferenceResolver + ?Sized> Clone for ResolverContext<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ReferenceResolver + ?Sized> Copy for ResolverContext<'_, R> {}

//! Parsed note input
//!
//! The parser lives outside this crate; these types are the shape it hands
//! over. They deserialize from JSON so an indexer in another process can
//! feed notes in directly.

use serde::{Deserialize, Serialize};

use super::{NoteId, TagId};

/// `@Name` style mention of a person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonMention {
    pub person_name: String,
}

/// `[[Note]]` or `[[Note#Heading]]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteLink {
    pub note_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_text: Option<String>,
}

/// `![[Note]]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEmbed {
    pub note_name: String,
}

/// Structured extraction of one note's content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedNote {
    pub id: NoteId,

    /// Path relative to the vault root, `/` or `\` separated
    pub path: String,

    /// Inline and frontmatter tags, in document order, possibly repeated
    #[serde(default)]
    pub all_tags: Vec<TagId>,

    #[serde(default)]
    pub people_mentions: Vec<PersonMention>,

    #[serde(default)]
    pub links: Vec<NoteLink>,

    #[serde(default)]
    pub embeds: Vec<NoteEmbed>,
}

impl ParsedNote {
    pub fn new(id: impl Into<NoteId>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<TagId>) -> Self {
        self.all_tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn with_mention(mut self, person_name: impl Into<String>) -> Self {
        self.people_mentions.push(PersonMention {
            person_name: person_name.into(),
        });
        self
    }

    #[must_use]
    pub fn with_link(mut self, note_name: impl Into<String>) -> Self {
        self.links.push(NoteLink {
            note_name: note_name.into(),
            heading_text: None,
        });
        self
    }

    #[must_use]
    pub fn with_heading_link(
        mut self,
        note_name: impl Into<String>,
        heading_text: impl Into<String>,
    ) -> Self {
        self.links.push(NoteLink {
            note_name: note_name.into(),
            heading_text: Some(heading_text.into()),
        });
        self
    }

    #[must_use]
    pub fn with_embed(mut self, note_name: impl Into<String>) -> Self {
        self.embeds.push(NoteEmbed {
            note_name: note_name.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_json() {
        let note: ParsedNote =
            serde_json::from_str(r#"{"id": "A", "path": "work/b.md"}"#).unwrap();
        assert_eq!(note, ParsedNote::new("A", "work/b.md"));
    }

    #[test]
    fn test_deserialize_full_json() {
        let note: ParsedNote = serde_json::from_str(
            r#"{
                "id": "A",
                "path": "a.md",
                "all_tags": ["project", "project"],
                "people_mentions": [{"person_name": "Ada"}],
                "links": [{"note_name": "B"}, {"note_name": "C", "heading_text": "Intro"}],
                "embeds": [{"note_name": "D"}]
            }"#,
        )
        .unwrap();

        let expected = ParsedNote::new("A", "a.md")
            .with_tag("project")
            .with_tag("project")
            .with_mention("Ada")
            .with_link("B")
            .with_heading_link("C", "Intro")
            .with_embed("D");
        assert_eq!(note, expected);
    }
}

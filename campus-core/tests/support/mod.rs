#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use campus_core::record::{field_contains, field_eq, text_contains};
use campus_core::{CrudService, Latency, MemoryRepository, Record, RecordFilter, Repository};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: String,
    pub class_id: String,
    pub tags: Vec<String>,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

pub struct NoteDraft {
    pub class_id: String,
    pub tags: Vec<String>,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    pub class_id: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
}

impl Record for Note {
    type Draft = NoteDraft;
    type Patch = NotePatch;

    const PREFIX: &'static str = "note";
    const LABEL: &'static str = "Note";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: NoteDraft) -> Self {
        Self {
            id,
            class_id: draft.class_id,
            tags: draft.tags,
            title: draft.title,
            body: draft.body,
            created_at,
        }
    }

    fn apply(&mut self, patch: NotePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
    }
}

impl RecordFilter<Note> for NoteFilter {
    fn matches(&self, note: &Note) -> bool {
        field_eq(self.class_id.as_deref(), &note.class_id)
            && field_contains(self.tag.as_deref(), &note.tags)
            && text_contains(self.search.as_deref(), &note.title)
    }
}

pub fn note(id: &str, class_id: &str, title: &str) -> Note {
    Note {
        id: id.to_string(),
        class_id: class_id.to_string(),
        tags: vec![],
        title: title.to_string(),
        body: String::new(),
        created_at: Utc::now(),
    }
}

pub fn draft(class_id: &str, title: &str) -> NoteDraft {
    NoteDraft {
        class_id: class_id.to_string(),
        tags: vec!["general".to_string()],
        title: title.to_string(),
        body: "body".to_string(),
    }
}

pub fn service_with(notes: Vec<Note>) -> CrudService<Note> {
    CrudService::new(
        "notes",
        Arc::new(MemoryRepository::with_records(notes)),
        Latency::none(),
    )
}

/// A backend whose every read blows up.
pub struct BrokenRepository;

#[async_trait]
impl Repository<Note> for BrokenRepository {
    async fn list(&self, _filter: &dyn RecordFilter<Note>) -> anyhow::Result<Vec<Note>> {
        Err(anyhow::anyhow!("connection reset"))
    }
}

use campus_core::{merge_fields, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Document,
    Video,
    Link,
    Presentation,
    Image,
}

/// Learning material shared with one or more classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: ResourceKind,
    pub url: String,
    pub class_ids: Vec<String>,
    pub subject_id: String,
    pub teacher_id: String,
    pub school_id: String,
    pub size_bytes: Option<u64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub kind: ResourceKind,
    pub url: String,
    pub class_ids: Vec<String>,
    pub subject_id: String,
    pub teacher_id: String,
    pub school_id: String,
    #[serde(default)]
    pub size_bytes: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub kind: Option<ResourceKind>,
    pub url: Option<String>,
    pub class_ids: Option<Vec<String>>,
    pub subject_id: Option<String>,
}

impl Record for Resource {
    type Draft = ResourceDraft;
    type Patch = ResourcePatch;

    const PREFIX: &'static str = "resource";
    const LABEL: &'static str = "Resource";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: ResourceDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            kind: draft.kind,
            url: draft.url,
            class_ids: draft.class_ids,
            subject_id: draft.subject_id,
            teacher_id: draft.teacher_id,
            school_id: draft.school_id,
            size_bytes: draft.size_bytes,
            created_at,
        }
    }

    fn apply(&mut self, patch: ResourcePatch) {
        merge_fields!(self => patch; title, description, kind, url, class_ids, subject_id);
    }
}

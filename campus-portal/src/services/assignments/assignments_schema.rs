use campus_core::{merge_fields, Record};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    #[default]
    Draft,
    Published,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub description: String,
    pub subject_id: String,
    pub class_id: String,
    pub teacher_id: String,
    pub school_id: String,
    pub due_date: NaiveDate,
    pub max_score: u32,
    pub status: AssignmentStatus,
    pub attachments: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub subject_id: String,
    pub class_id: String,
    pub teacher_id: String,
    pub school_id: String,
    pub due_date: NaiveDate,
    pub max_score: u32,
    #[serde(default)]
    pub status: AssignmentStatus,
    #[serde(default)]
    pub attachments: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub subject_id: Option<String>,
    pub class_id: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub max_score: Option<u32>,
    pub status: Option<AssignmentStatus>,
    pub attachments: Option<Vec<String>>,
}

impl AssignmentPatch {
    pub fn status(status: AssignmentStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

impl Record for Assignment {
    type Draft = AssignmentDraft;
    type Patch = AssignmentPatch;

    const PREFIX: &'static str = "assignment";
    const LABEL: &'static str = "Assignment";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: AssignmentDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            subject_id: draft.subject_id,
            class_id: draft.class_id,
            teacher_id: draft.teacher_id,
            school_id: draft.school_id,
            due_date: draft.due_date,
            max_score: draft.max_score,
            status: draft.status,
            attachments: draft.attachments,
            created_at,
        }
    }

    fn apply(&mut self, patch: AssignmentPatch) {
        merge_fields!(self => patch;
            title, description, subject_id, class_id, due_date, max_score, status, attachments);
    }
}

use campus_core::{merge_fields, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    First,
    Second,
    Third,
}

/// Letter grade for a score, by percentage of `max_score`.
pub fn grade_for_score(score: f64, max_score: f64) -> String {
    if max_score <= 0.0 {
        return "F".to_string();
    }

    let pct = score / max_score * 100.0;
    let grade = match pct {
        p if p >= 70.0 => "A",
        p if p >= 60.0 => "B",
        p if p >= 50.0 => "C",
        p if p >= 45.0 => "D",
        p if p >= 40.0 => "E",
        _ => "F",
    };
    grade.to_string()
}

/// One student's score in one subject for one term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResult {
    pub id: String,
    pub student_id: String,
    pub class_id: String,
    pub subject_id: String,
    pub school_id: String,
    pub term: Term,
    pub session: String,
    pub score: f64,
    pub max_score: f64,
    pub grade: String,
    pub remarks: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDraft {
    pub student_id: String,
    pub class_id: String,
    pub subject_id: String,
    pub school_id: String,
    pub term: Term,
    pub session: String,
    pub score: f64,
    pub max_score: f64,
    /// Computed from the score when absent.
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPatch {
    pub score: Option<f64>,
    pub max_score: Option<f64>,
    pub grade: Option<String>,
    pub remarks: Option<String>,
    pub published: Option<bool>,
}

impl ResultPatch {
    /// New score with the grade that goes with it.
    pub fn rescore(score: f64, max_score: f64) -> Self {
        Self {
            score: Some(score),
            max_score: Some(max_score),
            grade: Some(grade_for_score(score, max_score)),
            ..Default::default()
        }
    }

    pub fn publish() -> Self {
        Self {
            published: Some(true),
            ..Default::default()
        }
    }
}

impl Record for ExamResult {
    type Draft = ResultDraft;
    type Patch = ResultPatch;

    const PREFIX: &'static str = "result";
    const LABEL: &'static str = "Result";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: ResultDraft) -> Self {
        let grade = draft
            .grade
            .unwrap_or_else(|| grade_for_score(draft.score, draft.max_score));
        Self {
            id,
            student_id: draft.student_id,
            class_id: draft.class_id,
            subject_id: draft.subject_id,
            school_id: draft.school_id,
            term: draft.term,
            session: draft.session,
            score: draft.score,
            max_score: draft.max_score,
            grade,
            remarks: draft.remarks,
            published: draft.published,
            created_at,
        }
    }

    fn apply(&mut self, patch: ResultPatch) {
        merge_fields!(self => patch; score, max_score, grade, published);
        if let Some(remarks) = patch.remarks {
            self.remarks = Some(remarks);
        }
    }
}

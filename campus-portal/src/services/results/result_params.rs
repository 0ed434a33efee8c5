use campus_core::record::field_eq;
use campus_core::RecordFilter;
use serde::Deserialize;

use super::{ExamResult, Term};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultFilter {
    pub student_id: Option<String>,
    pub class_id: Option<String>,
    pub subject_id: Option<String>,
    pub school_id: Option<String>,
    pub term: Option<Term>,
    pub session: Option<String>,
    pub published: Option<bool>,
}

impl ResultFilter {
    pub fn for_student(student_id: impl Into<String>) -> Self {
        Self {
            student_id: Some(student_id.into()),
            ..Default::default()
        }
    }

    pub fn for_class(class_id: impl Into<String>) -> Self {
        Self {
            class_id: Some(class_id.into()),
            ..Default::default()
        }
    }
}

impl RecordFilter<ExamResult> for ResultFilter {
    fn matches(&self, r: &ExamResult) -> bool {
        field_eq(self.student_id.as_deref(), &r.student_id)
            && field_eq(self.class_id.as_deref(), &r.class_id)
            && field_eq(self.subject_id.as_deref(), &r.subject_id)
            && field_eq(self.school_id.as_deref(), &r.school_id)
            && field_eq(self.session.as_deref(), &r.session)
            && self.term.map_or(true, |t| t == r.term)
            && self.published.map_or(true, |p| p == r.published)
    }
}

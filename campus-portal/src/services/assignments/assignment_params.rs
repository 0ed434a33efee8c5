use campus_core::record::{field_eq, text_contains};
use campus_core::RecordFilter;
use serde::Deserialize;

use super::{Assignment, AssignmentStatus};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentFilter {
    pub class_id: Option<String>,
    pub teacher_id: Option<String>,
    pub subject_id: Option<String>,
    pub school_id: Option<String>,
    pub status: Option<AssignmentStatus>,
    /// Substring of the title, case-insensitive.
    pub search: Option<String>,
}

impl AssignmentFilter {
    pub fn for_class(class_id: impl Into<String>) -> Self {
        Self {
            class_id: Some(class_id.into()),
            ..Default::default()
        }
    }

    pub fn for_teacher(teacher_id: impl Into<String>) -> Self {
        Self {
            teacher_id: Some(teacher_id.into()),
            ..Default::default()
        }
    }
}

impl RecordFilter<Assignment> for AssignmentFilter {
    fn matches(&self, a: &Assignment) -> bool {
        field_eq(self.class_id.as_deref(), &a.class_id)
            && field_eq(self.teacher_id.as_deref(), &a.teacher_id)
            && field_eq(self.subject_id.as_deref(), &a.subject_id)
            && field_eq(self.school_id.as_deref(), &a.school_id)
            && self.status.map_or(true, |s| s == a.status)
            && text_contains(self.search.as_deref(), &a.title)
    }
}

use campus_core::record::field_eq;
use campus_core::RecordFilter;
use chrono::Weekday;
use serde::Deserialize;

use super::TimetableEntry;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableFilter {
    pub class_id: Option<String>,
    pub teacher_id: Option<String>,
    pub school_id: Option<String>,
    pub day: Option<Weekday>,
}

impl TimetableFilter {
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

impl RecordFilter<TimetableEntry> for TimetableFilter {
    fn matches(&self, e: &TimetableEntry) -> bool {
        field_eq(self.class_id.as_deref(), &e.class_id)
            && field_eq(self.teacher_id.as_deref(), &e.teacher_id)
            && field_eq(self.school_id.as_deref(), &e.school_id)
            && self.day.map_or(true, |d| d == e.day)
    }
}

use campus_core::record::{field_contains, field_eq, text_contains};
use campus_core::RecordFilter;
use serde::Deserialize;

use super::{Resource, ResourceKind};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceFilter {
    /// Matches when the resource is shared with this class.
    pub class_id: Option<String>,
    pub subject_id: Option<String>,
    pub teacher_id: Option<String>,
    pub school_id: Option<String>,
    pub kind: Option<ResourceKind>,
    pub search: Option<String>,
}

impl ResourceFilter {
    pub fn for_class(class_id: impl Into<String>) -> Self {
        Self {
            class_id: Some(class_id.into()),
            ..Default::default()
        }
    }
}

impl RecordFilter<Resource> for ResourceFilter {
    fn matches(&self, r: &Resource) -> bool {
        field_contains(self.class_id.as_deref(), &r.class_ids)
            && field_eq(self.subject_id.as_deref(), &r.subject_id)
            && field_eq(self.teacher_id.as_deref(), &r.teacher_id)
            && field_eq(self.school_id.as_deref(), &r.school_id)
            && self.kind.map_or(true, |k| k == r.kind)
            && (text_contains(self.search.as_deref(), &r.title)
                || text_contains(self.search.as_deref(), &r.description))
    }
}

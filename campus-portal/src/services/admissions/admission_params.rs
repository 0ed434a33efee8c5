use campus_core::record::{field_eq, text_contains};
use campus_core::RecordFilter;
use serde::Deserialize;

use super::{AdmissionApplication, AdmissionStatus};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionFilter {
    pub school_id: Option<String>,
    pub status: Option<AdmissionStatus>,
    pub desired_class: Option<String>,
    /// Substring of the applicant's name.
    pub search: Option<String>,
}

impl RecordFilter<AdmissionApplication> for AdmissionFilter {
    fn matches(&self, a: &AdmissionApplication) -> bool {
        field_eq(self.school_id.as_deref(), &a.school_id)
            && field_eq(self.desired_class.as_deref(), &a.desired_class)
            && self.status.map_or(true, |s| s == a.status)
            && text_contains(self.search.as_deref(), &a.applicant_name)
    }
}

use campus_core::{merge_fields, Record};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionStatus {
    #[default]
    Submitted,
    UnderReview,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionApplication {
    pub id: String,
    pub school_id: String,
    pub applicant_name: String,
    pub date_of_birth: NaiveDate,
    pub desired_class: String,
    pub guardian_name: String,
    pub guardian_email: String,
    pub guardian_phone: String,
    pub previous_school: Option<String>,
    pub status: AdmissionStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionDraft {
    pub school_id: String,
    pub applicant_name: String,
    pub date_of_birth: NaiveDate,
    pub desired_class: String,
    pub guardian_name: String,
    pub guardian_email: String,
    pub guardian_phone: String,
    #[serde(default)]
    pub previous_school: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionPatch {
    pub desired_class: Option<String>,
    pub guardian_email: Option<String>,
    pub guardian_phone: Option<String>,
    pub status: Option<AdmissionStatus>,
    pub notes: Option<String>,
}

impl Record for AdmissionApplication {
    type Draft = AdmissionDraft;
    type Patch = AdmissionPatch;

    const PREFIX: &'static str = "admission";
    const LABEL: &'static str = "Application";

    fn id(&self) -> &str {
        &self.id
    }

    /// Every application starts out `submitted`.
    fn from_draft(id: String, created_at: DateTime<Utc>, draft: AdmissionDraft) -> Self {
        Self {
            id,
            school_id: draft.school_id,
            applicant_name: draft.applicant_name,
            date_of_birth: draft.date_of_birth,
            desired_class: draft.desired_class,
            guardian_name: draft.guardian_name,
            guardian_email: draft.guardian_email,
            guardian_phone: draft.guardian_phone,
            previous_school: draft.previous_school,
            status: AdmissionStatus::Submitted,
            notes: None,
            created_at,
        }
    }

    fn apply(&mut self, patch: AdmissionPatch) {
        merge_fields!(self => patch; desired_class, guardian_email, guardian_phone, status);
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
    }
}

use campus_core::record::{field_contains, field_eq};
use campus_core::RecordFilter;
use serde::Deserialize;

use super::{Payment, PaymentStatus, PaymentType};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentFilter {
    pub student_id: Option<String>,
    pub school_id: Option<String>,
    pub payment_type_id: Option<String>,
    pub status: Option<PaymentStatus>,
}

impl PaymentFilter {
    pub fn for_student(student_id: impl Into<String>) -> Self {
        Self {
            student_id: Some(student_id.into()),
            ..Default::default()
        }
    }
}

impl RecordFilter<Payment> for PaymentFilter {
    fn matches(&self, p: &Payment) -> bool {
        field_eq(self.student_id.as_deref(), &p.student_id)
            && field_eq(self.school_id.as_deref(), &p.school_id)
            && field_eq(self.payment_type_id.as_deref(), &p.payment_type_id)
            && self.status.map_or(true, |s| s == p.status)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTypeFilter {
    pub school_id: Option<String>,
    /// Matches payment types that apply to this class.
    pub class_id: Option<String>,
    pub mandatory: Option<bool>,
}

impl PaymentTypeFilter {
    pub fn for_school(school_id: impl Into<String>) -> Self {
        Self {
            school_id: Some(school_id.into()),
            ..Default::default()
        }
    }
}

impl RecordFilter<PaymentType> for PaymentTypeFilter {
    fn matches(&self, t: &PaymentType) -> bool {
        field_eq(self.school_id.as_deref(), &t.school_id)
            && field_contains(self.class_id.as_deref(), &t.applicable_classes)
            && self.mandatory.map_or(true, |m| m == t.mandatory)
    }
}

use campus_core::{merge_fields, Record};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Overdue,
}

impl PaymentStatus {
    /// Money still owed.
    pub fn is_outstanding(&self) -> bool {
        matches!(self, PaymentStatus::Pending | PaymentStatus::Overdue | PaymentStatus::Failed)
    }
}

/// A fee owed by one student. Amounts are in minor currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub student_id: String,
    pub school_id: String,
    pub payment_type_id: String,
    pub description: String,
    pub amount: u64,
    pub due_date: NaiveDate,
    pub status: PaymentStatus,
    pub paid_date: Option<DateTime<Utc>>,
    pub reference: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDraft {
    pub student_id: String,
    pub school_id: String,
    pub payment_type_id: String,
    #[serde(default)]
    pub description: String,
    pub amount: u64,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPatch {
    pub description: Option<String>,
    pub amount: Option<u64>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<PaymentStatus>,
    pub paid_date: Option<DateTime<Utc>>,
    pub reference: Option<String>,
}

impl PaymentPatch {
    pub fn completed(paid_date: DateTime<Utc>, reference: String) -> Self {
        Self {
            status: Some(PaymentStatus::Completed),
            paid_date: Some(paid_date),
            reference: Some(reference),
            ..Default::default()
        }
    }
}

impl Record for Payment {
    type Draft = PaymentDraft;
    type Patch = PaymentPatch;

    const PREFIX: &'static str = "payment";
    const LABEL: &'static str = "Payment";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: PaymentDraft) -> Self {
        Self {
            id,
            student_id: draft.student_id,
            school_id: draft.school_id,
            payment_type_id: draft.payment_type_id,
            description: draft.description,
            amount: draft.amount,
            due_date: draft.due_date,
            status: draft.status,
            paid_date: None,
            reference: None,
            created_at,
        }
    }

    fn apply(&mut self, patch: PaymentPatch) {
        merge_fields!(self => patch; description, amount, due_date, status);
        if let Some(paid_date) = patch.paid_date {
            self.paid_date = Some(paid_date);
        }
        if let Some(reference) = patch.reference {
            self.reference = Some(reference);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentFrequency {
    OneTime,
    Termly,
    Annually,
}

/// A fee a school charges, e.g. tuition or bus fare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentType {
    pub id: String,
    pub school_id: String,
    pub name: String,
    pub amount: u64,
    pub frequency: PaymentFrequency,
    pub applicable_classes: Vec<String>,
    pub mandatory: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTypeDraft {
    pub school_id: String,
    pub name: String,
    pub amount: u64,
    pub frequency: PaymentFrequency,
    #[serde(default)]
    pub applicable_classes: Vec<String>,
    #[serde(default)]
    pub mandatory: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTypePatch {
    pub name: Option<String>,
    pub amount: Option<u64>,
    pub frequency: Option<PaymentFrequency>,
    pub applicable_classes: Option<Vec<String>>,
    pub mandatory: Option<bool>,
}

impl Record for PaymentType {
    type Draft = PaymentTypeDraft;
    type Patch = PaymentTypePatch;

    const PREFIX: &'static str = "payment_type";
    const LABEL: &'static str = "Payment type";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: PaymentTypeDraft) -> Self {
        Self {
            id,
            school_id: draft.school_id,
            name: draft.name,
            amount: draft.amount,
            frequency: draft.frequency,
            applicable_classes: draft.applicable_classes,
            mandatory: draft.mandatory,
            created_at,
        }
    }

    fn apply(&mut self, patch: PaymentTypePatch) {
        merge_fields!(self => patch; name, amount, frequency, applicable_classes, mandatory);
    }
}

/// Totals for one student's fees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    pub student_id: String,
    pub total_paid: u64,
    pub total_outstanding: u64,
    pub completed_count: usize,
    pub outstanding_count: usize,
}

impl PaymentSummary {
    pub fn from_payments(student_id: &str, payments: &[Payment]) -> Self {
        let mut summary = Self {
            student_id: student_id.to_string(),
            ..Default::default()
        };

        for payment in payments {
            if payment.status == PaymentStatus::Completed {
                summary.total_paid = summary.total_paid.saturating_add(payment.amount);
                summary.completed_count += 1;
            } else if payment.status.is_outstanding() {
                summary.total_outstanding = summary.total_outstanding.saturating_add(payment.amount);
                summary.outstanding_count += 1;
            }
        }

        summary
    }
}

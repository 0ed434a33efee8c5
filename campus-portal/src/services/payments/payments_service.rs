use std::sync::Arc;

use anyhow::Result;
use campus_core::{CrudService, Envelope, Latency, OperationWeight, Repository, ServiceMethodKind};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::{
    Payment, PaymentDraft, PaymentFilter, PaymentPatch, PaymentSummary, PaymentType,
    PaymentTypeDraft, PaymentTypeFilter, PaymentTypePatch,
};

/// Student fees and the fee catalogue they are drawn from.
pub struct PaymentsService {
    payments: CrudService<Payment>,
    types: CrudService<PaymentType>,
}

impl PaymentsService {
    pub fn new(
        payments: Arc<dyn Repository<Payment>>,
        types: Arc<dyn Repository<PaymentType>>,
        latency: Latency,
    ) -> Self {
        Self {
            payments: CrudService::new("payments", payments, latency.clone()),
            types: CrudService::new("payment_types", types, latency),
        }
    }

    pub async fn list(&self, filter: &PaymentFilter) -> Result<Envelope<Vec<Payment>>> {
        self.payments.list(filter).await
    }

    pub async fn get(&self, id: &str) -> Result<Envelope<Payment>> {
        self.payments.get(id).await
    }

    pub async fn create(&self, draft: PaymentDraft) -> Result<Envelope<Payment>> {
        Ok(self
            .payments
            .create(draft)
            .await?
            .with_message("Payment created successfully"))
    }

    pub async fn update(&self, id: &str, patch: PaymentPatch) -> Result<Envelope<Payment>> {
        self.payments.update(id, patch).await
    }

    pub async fn delete(&self, id: &str) -> Result<Envelope<()>> {
        self.payments.delete(id).await
    }

    /// Settle a payment: status becomes `completed`, `paid_date` is now, and
    /// a transaction reference is attached.
    pub async fn make_payment(&self, id: &str) -> Result<Envelope<Payment>> {
        let reference = format!("TXN-{}", Uuid::new_v4().simple()).to_uppercase();
        let repo = self.payments.repository();

        let env = self
            .payments
            .call(
                ServiceMethodKind::Custom("makePayment"),
                OperationWeight::Transfer,
                async {
                    let patch = PaymentPatch::completed(Utc::now(), reference.clone());
                    repo.patch(id, patch).await
                },
            )
            .await?;

        if env.is_success() {
            info!(payment_id = id, %reference, "payment completed");
        }
        Ok(env.with_message("Payment successful"))
    }

    /// Paid and outstanding totals for one student.
    pub async fn summary(&self, student_id: &str) -> Result<Envelope<PaymentSummary>> {
        let repo = self.payments.repository();
        let filter = PaymentFilter::for_student(student_id);
        self.payments
            .call(
                ServiceMethodKind::Custom("paymentSummary"),
                OperationWeight::Light,
                async {
                    let payments = repo.list(&filter).await?;
                    Ok::<_, anyhow::Error>(PaymentSummary::from_payments(student_id, &payments))
                },
            )
            .await
    }

    pub async fn list_types(&self, filter: &PaymentTypeFilter) -> Result<Envelope<Vec<PaymentType>>> {
        self.types.list(filter).await
    }

    pub async fn create_type(&self, draft: PaymentTypeDraft) -> Result<Envelope<PaymentType>> {
        Ok(self
            .types
            .create(draft)
            .await?
            .with_message("Payment type created successfully"))
    }

    pub async fn update_type(&self, id: &str, patch: PaymentTypePatch) -> Result<Envelope<PaymentType>> {
        self.types.update(id, patch).await
    }

    pub async fn delete_type(&self, id: &str) -> Result<Envelope<()>> {
        self.types.delete(id).await
    }
}

use crate::services::payments::{
    Payment, PaymentDraft, PaymentFilter, PaymentPatch, PaymentType, PaymentTypeDraft,
    PaymentTypeFilter, PaymentTypePatch, PaymentsService,
};

use super::domain_store;

domain_store!(
    /// A student's (or a school's) fees.
    PaymentStore,
    PaymentsService,
    Payment,
    "payments"
);

impl PaymentStore {
    pub async fn fetch_payments(&self, filter: &PaymentFilter) -> bool {
        self.store.fetch(self.service.list(filter)).await
    }

    pub async fn fetch_student_payments(&self, student_id: &str) -> bool {
        self.fetch_payments(&PaymentFilter::for_student(student_id)).await
    }

    pub async fn create_payment(&self, draft: PaymentDraft) -> Option<Payment> {
        self.store.create(self.service.create(draft)).await
    }

    pub async fn update_payment(&self, id: &str, patch: PaymentPatch) -> Option<Payment> {
        self.store.update(self.service.update(id, patch)).await
    }

    /// Settle a payment and replace it in place.
    pub async fn make_payment(&self, id: &str) -> Option<Payment> {
        self.store.update(self.service.make_payment(id)).await
    }

    pub async fn delete_payment(&self, id: &str) -> bool {
        self.store.remove(id, self.service.delete(id)).await
    }
}

domain_store!(
    /// The fee catalogue managed by school admins.
    PaymentTypeStore,
    PaymentsService,
    PaymentType,
    "payment_types"
);

impl PaymentTypeStore {
    pub async fn fetch_payment_types(&self, school_id: &str) -> bool {
        self.store
            .fetch(self.service.list_types(&PaymentTypeFilter::for_school(school_id)))
            .await
    }

    pub async fn create_payment_type(&self, draft: PaymentTypeDraft) -> Option<PaymentType> {
        self.store.create(self.service.create_type(draft)).await
    }

    pub async fn update_payment_type(&self, id: &str, patch: PaymentTypePatch) -> Option<PaymentType> {
        self.store.update(self.service.update_type(id, patch)).await
    }

    pub async fn delete_payment_type(&self, id: &str) -> bool {
        self.store.remove(id, self.service.delete_type(id)).await
    }
}

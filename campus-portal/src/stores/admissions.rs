use crate::services::admissions::{
    AdmissionApplication, AdmissionDraft, AdmissionFilter, AdmissionPatch, AdmissionStatus,
    AdmissionsService,
};

use super::domain_store;

domain_store!(
    /// The admissions queue a school admin works through.
    AdmissionStore,
    AdmissionsService,
    AdmissionApplication,
    "admissions"
);

impl AdmissionStore {
    pub async fn fetch_applications(&self, filter: &AdmissionFilter) -> bool {
        self.store.fetch(self.service.list(filter)).await
    }

    pub async fn submit_application(&self, draft: AdmissionDraft) -> Option<AdmissionApplication> {
        self.store.create(self.service.submit(draft)).await
    }

    /// Correct the applicant's contact details or desired class.
    pub async fn update_application(&self, id: &str, patch: AdmissionPatch) -> Option<AdmissionApplication> {
        self.store.update(self.service.update(id, patch)).await
    }

    pub async fn review_application(
        &self,
        id: &str,
        status: AdmissionStatus,
        notes: Option<String>,
    ) -> Option<AdmissionApplication> {
        self.store
            .update(self.service.update_status(id, status, notes))
            .await
    }

    pub async fn withdraw_application(&self, id: &str) -> bool {
        self.store.remove(id, self.service.withdraw(id)).await
    }
}

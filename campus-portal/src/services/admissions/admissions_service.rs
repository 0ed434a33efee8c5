use std::sync::Arc;

use anyhow::Result;
use campus_core::{CrudService, Envelope, Latency, OperationWeight, Repository, ServiceMethodKind};

use super::{AdmissionApplication, AdmissionDraft, AdmissionFilter, AdmissionPatch, AdmissionStatus};

pub struct AdmissionsService {
    crud: CrudService<AdmissionApplication>,
}

impl AdmissionsService {
    pub fn new(repo: Arc<dyn Repository<AdmissionApplication>>, latency: Latency) -> Self {
        Self {
            crud: CrudService::new("admissions", repo, latency),
        }
    }

    /// File a new application. No validation happens here.
    pub async fn submit(&self, draft: AdmissionDraft) -> Result<Envelope<AdmissionApplication>> {
        Ok(self
            .crud
            .create_weighted(draft, OperationWeight::Transfer)
            .await?
            .with_message("Application submitted successfully"))
    }

    pub async fn list(&self, filter: &AdmissionFilter) -> Result<Envelope<Vec<AdmissionApplication>>> {
        self.crud.list(filter).await
    }

    pub async fn get(&self, id: &str) -> Result<Envelope<AdmissionApplication>> {
        self.crud.get(id).await
    }

    pub async fn update(&self, id: &str, patch: AdmissionPatch) -> Result<Envelope<AdmissionApplication>> {
        self.crud.update(id, patch).await
    }

    /// Move an application through review. `notes` replaces any earlier note.
    pub async fn update_status(
        &self,
        id: &str,
        status: AdmissionStatus,
        notes: Option<String>,
    ) -> Result<Envelope<AdmissionApplication>> {
        let repo = self.crud.repository();
        let patch = AdmissionPatch {
            status: Some(status),
            notes,
            ..Default::default()
        };

        let env = self
            .crud
            .call(
                ServiceMethodKind::Custom("updateAdmissionStatus"),
                OperationWeight::Standard,
                repo.patch(id, patch),
            )
            .await?;
        Ok(env.with_message("Application status updated"))
    }

    pub async fn withdraw(&self, id: &str) -> Result<Envelope<()>> {
        Ok(self
            .crud
            .delete(id)
            .await?
            .with_message("Application withdrawn"))
    }
}

use std::sync::Arc;

use anyhow::Result;
use campus_core::{CrudService, Envelope, Latency, OperationWeight, Repository, ServiceMethodKind};

use super::{Assignment, AssignmentDraft, AssignmentFilter, AssignmentPatch, AssignmentStatus};

pub struct AssignmentsService {
    crud: CrudService<Assignment>,
}

impl AssignmentsService {
    pub fn new(repo: Arc<dyn Repository<Assignment>>, latency: Latency) -> Self {
        Self {
            crud: CrudService::new("assignments", repo, latency),
        }
    }

    pub async fn list(&self, filter: &AssignmentFilter) -> Result<Envelope<Vec<Assignment>>> {
        self.crud.list(filter).await
    }

    pub async fn get(&self, id: &str) -> Result<Envelope<Assignment>> {
        self.crud.get(id).await
    }

    pub async fn create(&self, draft: AssignmentDraft) -> Result<Envelope<Assignment>> {
        Ok(self
            .crud
            .create(draft)
            .await?
            .with_message("Assignment created successfully"))
    }

    pub async fn update(&self, id: &str, patch: AssignmentPatch) -> Result<Envelope<Assignment>> {
        Ok(self
            .crud
            .update(id, patch)
            .await?
            .with_message("Assignment updated successfully"))
    }

    pub async fn delete(&self, id: &str) -> Result<Envelope<()>> {
        Ok(self
            .crud
            .delete(id)
            .await?
            .with_message("Assignment deleted successfully"))
    }

    /// Make a draft visible to the class.
    pub async fn publish(&self, id: &str) -> Result<Envelope<Assignment>> {
        self.set_status(id, "publishAssignment", AssignmentStatus::Published)
            .await
    }

    /// Stop accepting work.
    pub async fn close(&self, id: &str) -> Result<Envelope<Assignment>> {
        self.set_status(id, "closeAssignment", AssignmentStatus::Closed)
            .await
    }

    async fn set_status(
        &self,
        id: &str,
        method: &'static str,
        status: AssignmentStatus,
    ) -> Result<Envelope<Assignment>> {
        let repo = self.crud.repository();
        self.crud
            .call(
                ServiceMethodKind::Custom(method),
                OperationWeight::Standard,
                repo.patch(id, AssignmentPatch::status(status)),
            )
            .await
    }
}

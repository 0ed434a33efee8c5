use std::sync::Arc;

use anyhow::Result;
use campus_core::{CrudService, Envelope, Latency, OperationWeight, Repository};

use super::{Resource, ResourceDraft, ResourceFilter, ResourcePatch};

pub struct ResourcesService {
    crud: CrudService<Resource>,
}

impl ResourcesService {
    pub fn new(repo: Arc<dyn Repository<Resource>>, latency: Latency) -> Self {
        Self {
            crud: CrudService::new("resources", repo, latency),
        }
    }

    pub async fn list(&self, filter: &ResourceFilter) -> Result<Envelope<Vec<Resource>>> {
        self.crud.list(filter).await
    }

    pub async fn get(&self, id: &str) -> Result<Envelope<Resource>> {
        self.crud.get(id).await
    }

    /// Uploads are the slowest operation in the portal.
    pub async fn upload(&self, draft: ResourceDraft) -> Result<Envelope<Resource>> {
        Ok(self
            .crud
            .create_weighted(draft, OperationWeight::Transfer)
            .await?
            .with_message("Resource uploaded successfully"))
    }

    pub async fn update(&self, id: &str, patch: ResourcePatch) -> Result<Envelope<Resource>> {
        Ok(self
            .crud
            .update(id, patch)
            .await?
            .with_message("Resource updated successfully"))
    }

    pub async fn delete(&self, id: &str) -> Result<Envelope<()>> {
        Ok(self
            .crud
            .delete(id)
            .await?
            .with_message("Resource deleted successfully"))
    }
}

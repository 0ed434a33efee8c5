use crate::services::resources::{
    Resource, ResourceDraft, ResourceFilter, ResourcePatch, ResourcesService,
};

use super::domain_store;

domain_store!(ResourceStore, ResourcesService, Resource, "resources");

impl ResourceStore {
    /// Resources shared with `class_id`.
    pub async fn fetch_resources(&self, class_id: &str) -> bool {
        self.fetch_filtered(&ResourceFilter::for_class(class_id)).await
    }

    pub async fn fetch_filtered(&self, filter: &ResourceFilter) -> bool {
        self.store.fetch(self.service.list(filter)).await
    }

    pub async fn upload_resource(&self, draft: ResourceDraft) -> Option<Resource> {
        self.store.create(self.service.upload(draft)).await
    }

    pub async fn update_resource(&self, id: &str, patch: ResourcePatch) -> Option<Resource> {
        self.store.update(self.service.update(id, patch)).await
    }

    pub async fn delete_resource(&self, id: &str) -> bool {
        self.store.remove(id, self.service.delete(id)).await
    }
}

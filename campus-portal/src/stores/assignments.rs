use crate::services::assignments::{
    Assignment, AssignmentDraft, AssignmentFilter, AssignmentPatch, AssignmentsService,
};

use super::domain_store;

domain_store!(
    /// Assignments shown on student and teacher dashboards.
    AssignmentStore,
    AssignmentsService,
    Assignment,
    "assignments"
);

impl AssignmentStore {
    pub async fn fetch_assignments(&self, filter: &AssignmentFilter) -> bool {
        self.store.fetch(self.service.list(filter)).await
    }

    pub async fn fetch_class_assignments(&self, class_id: &str) -> bool {
        self.fetch_assignments(&AssignmentFilter::for_class(class_id)).await
    }

    pub async fn fetch_teacher_assignments(&self, teacher_id: &str) -> bool {
        self.fetch_assignments(&AssignmentFilter::for_teacher(teacher_id)).await
    }

    pub async fn create_assignment(&self, draft: AssignmentDraft) -> Option<Assignment> {
        self.store.create(self.service.create(draft)).await
    }

    pub async fn update_assignment(&self, id: &str, patch: AssignmentPatch) -> Option<Assignment> {
        self.store.update(self.service.update(id, patch)).await
    }

    pub async fn publish_assignment(&self, id: &str) -> Option<Assignment> {
        self.store.update(self.service.publish(id)).await
    }

    pub async fn close_assignment(&self, id: &str) -> Option<Assignment> {
        self.store.update(self.service.close(id)).await
    }

    pub async fn delete_assignment(&self, id: &str) -> bool {
        self.store.remove(id, self.service.delete(id)).await
    }
}

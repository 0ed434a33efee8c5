use crate::services::timetable::{
    TimetableDraft, TimetableEntry, TimetableFilter, TimetablePatch, TimetableService,
};

use super::domain_store;

domain_store!(TimetableStore, TimetableService, TimetableEntry, "timetable");

impl TimetableStore {
    pub async fn fetch_class_timetable(&self, class_id: &str) -> bool {
        self.store
            .fetch(self.service.list(&TimetableFilter::for_class(class_id)))
            .await
    }

    pub async fn fetch_teacher_timetable(&self, teacher_id: &str) -> bool {
        self.store
            .fetch(self.service.list(&TimetableFilter::for_teacher(teacher_id)))
            .await
    }

    pub async fn add_entry(&self, draft: TimetableDraft) -> Option<TimetableEntry> {
        self.store.create(self.service.create(draft)).await
    }

    pub async fn update_entry(&self, id: &str, patch: TimetablePatch) -> Option<TimetableEntry> {
        self.store.update(self.service.update(id, patch)).await
    }

    pub async fn delete_entry(&self, id: &str) -> bool {
        self.store.remove(id, self.service.delete(id)).await
    }
}

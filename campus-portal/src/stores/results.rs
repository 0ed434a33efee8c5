use crate::services::results::{
    ExamResult, ResultDraft, ResultFilter, ResultPatch, ResultsService, Term,
};

use super::domain_store;

domain_store!(ResultStore, ResultsService, ExamResult, "results");

impl ResultStore {
    pub async fn fetch_results(&self, filter: &ResultFilter) -> bool {
        self.store.fetch(self.service.list(filter)).await
    }

    pub async fn fetch_student_results(&self, student_id: &str) -> bool {
        self.fetch_results(&ResultFilter::for_student(student_id)).await
    }

    pub async fn fetch_class_results(&self, class_id: &str) -> bool {
        self.fetch_results(&ResultFilter::for_class(class_id)).await
    }

    pub async fn record_result(&self, draft: ResultDraft) -> Option<ExamResult> {
        self.store.create(self.service.create(draft)).await
    }

    pub async fn update_result(&self, id: &str, patch: ResultPatch) -> Option<ExamResult> {
        self.store.update(self.service.update(id, patch)).await
    }

    /// New score with its matching grade.
    pub async fn rescore_result(&self, id: &str, score: f64, max_score: f64) -> Option<ExamResult> {
        self.update_result(id, ResultPatch::rescore(score, max_score)).await
    }

    pub async fn publish_class_results(&self, class_id: &str, term: Term) -> Option<Vec<ExamResult>> {
        self.store
            .update_many(self.service.publish_for_class(class_id, term))
            .await
    }

    pub async fn delete_result(&self, id: &str) -> bool {
        self.store.remove(id, self.service.delete(id)).await
    }
}

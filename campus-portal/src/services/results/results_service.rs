use std::sync::Arc;

use anyhow::Result;
use campus_core::{CrudService, Envelope, Latency, OperationWeight, Repository, ServiceMethodKind};

use super::{ExamResult, ResultDraft, ResultFilter, ResultPatch, Term};

pub struct ResultsService {
    crud: CrudService<ExamResult>,
}

impl ResultsService {
    pub fn new(repo: Arc<dyn Repository<ExamResult>>, latency: Latency) -> Self {
        Self {
            crud: CrudService::new("results", repo, latency),
        }
    }

    pub async fn list(&self, filter: &ResultFilter) -> Result<Envelope<Vec<ExamResult>>> {
        self.crud.list(filter).await
    }

    pub async fn get(&self, id: &str) -> Result<Envelope<ExamResult>> {
        self.crud.get(id).await
    }

    pub async fn create(&self, draft: ResultDraft) -> Result<Envelope<ExamResult>> {
        Ok(self
            .crud
            .create(draft)
            .await?
            .with_message("Result recorded successfully"))
    }

    pub async fn update(&self, id: &str, patch: ResultPatch) -> Result<Envelope<ExamResult>> {
        Ok(self
            .crud
            .update(id, patch)
            .await?
            .with_message("Result updated successfully"))
    }

    pub async fn delete(&self, id: &str) -> Result<Envelope<()>> {
        self.crud.delete(id).await
    }

    /// Release every result of a class for one term to students and parents.
    /// Returns the published records; an empty list is still a success.
    pub async fn publish_for_class(&self, class_id: &str, term: Term) -> Result<Envelope<Vec<ExamResult>>> {
        let repo = self.crud.repository();
        let filter = ResultFilter {
            class_id: Some(class_id.to_string()),
            term: Some(term),
            ..Default::default()
        };

        let env = self
            .crud
            .call(
                ServiceMethodKind::Custom("publishResults"),
                OperationWeight::Heavy,
                repo.patch_where(&filter, ResultPatch::publish()),
            )
            .await?;

        let count = env.data().map_or(0, Vec::len);
        Ok(env.with_message(format!("{count} results published")))
    }
}

use std::sync::Arc;

use anyhow::Result;
use campus_core::{CrudService, Envelope, Latency, OperationWeight, Repository, ServiceMethodKind};

use super::{DaySchedule, TimetableDraft, TimetableEntry, TimetableFilter, TimetablePatch};

pub struct TimetableService {
    crud: CrudService<TimetableEntry>,
}

impl TimetableService {
    pub fn new(repo: Arc<dyn Repository<TimetableEntry>>, latency: Latency) -> Self {
        Self {
            crud: CrudService::new("timetable", repo, latency),
        }
    }

    pub async fn list(&self, filter: &TimetableFilter) -> Result<Envelope<Vec<TimetableEntry>>> {
        self.crud.list(filter).await
    }

    pub async fn create(&self, draft: TimetableDraft) -> Result<Envelope<TimetableEntry>> {
        Ok(self
            .crud
            .create(draft)
            .await?
            .with_message("Timetable entry created successfully"))
    }

    pub async fn update(&self, id: &str, patch: TimetablePatch) -> Result<Envelope<TimetableEntry>> {
        Ok(self
            .crud
            .update(id, patch)
            .await?
            .with_message("Timetable entry updated successfully"))
    }

    pub async fn delete(&self, id: &str) -> Result<Envelope<()>> {
        Ok(self
            .crud
            .delete(id)
            .await?
            .with_message("Timetable entry deleted successfully"))
    }

    /// Matching entries grouped by weekday.
    pub async fn week_view(&self, filter: &TimetableFilter) -> Result<Envelope<Vec<DaySchedule>>> {
        let repo = self.crud.repository();
        self.crud
            .call(
                ServiceMethodKind::Custom("weekView"),
                OperationWeight::Light,
                async {
                    let entries = repo.list(filter).await?;
                    Ok::<_, anyhow::Error>(DaySchedule::week(entries))
                },
            )
            .await
    }
}

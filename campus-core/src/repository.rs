use async_trait::async_trait;
use anyhow::Result;
use tokio::sync::RwLock;

use crate::errors::PortalError;
use crate::record::{Record, RecordFilter};

/// An owned backing collection for one record type.
///
/// Services only ever talk to this trait, so a real persistence backend can
/// replace [`MemoryRepository`] without touching callers.
///
/// All methods have default implementations that fail with
/// `NotImplemented`, so a read-only backend overrides only what it supports.
/// Missing ids are reported as a `NotFound` [`PortalError`].
#[async_trait]
pub trait Repository<R: Record>: Send + Sync {
    /// Records matching `filter`, in insertion order.
    async fn list(&self, _filter: &dyn RecordFilter<R>) -> Result<Vec<R>> {
        Err(PortalError::not_implemented("Method not implemented: list").into_anyhow())
    }

    async fn get(&self, _id: &str) -> Result<R> {
        Err(PortalError::not_implemented("Method not implemented: get").into_anyhow())
    }

    /// Append a fully formed record.
    async fn insert(&self, _record: R) -> Result<R> {
        Err(PortalError::not_implemented("Method not implemented: insert").into_anyhow())
    }

    /// Shallow-merge `patch` into the record with `id`.
    async fn patch(&self, _id: &str, _patch: R::Patch) -> Result<R> {
        Err(PortalError::not_implemented("Method not implemented: patch").into_anyhow())
    }

    /// Apply the same patch to every matching record; returns the patched records.
    async fn patch_where(&self, _filter: &dyn RecordFilter<R>, _patch: R::Patch) -> Result<Vec<R>> {
        Err(PortalError::not_implemented("Method not implemented: patch_where").into_anyhow())
    }

    /// Remove and return the record with `id`.
    async fn remove(&self, _id: &str) -> Result<R> {
        Err(PortalError::not_implemented("Method not implemented: remove").into_anyhow())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.list(&()).await?.len())
    }
}

/// In-memory ordered collection: the mock database table.
pub struct MemoryRepository<R> {
    records: RwLock<Vec<R>>,
}

impl<R: Record> Default for MemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> MemoryRepository<R> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<R>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    fn not_found() -> anyhow::Error {
        PortalError::not_found(R::not_found_message()).into_anyhow()
    }
}

#[async_trait]
impl<R: Record> Repository<R> for MemoryRepository<R> {
    async fn list(&self, filter: &dyn RecordFilter<R>) -> Result<Vec<R>> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|r| filter.matches(r)).cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<R> {
        let records = self.records.read().await;
        records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn insert(&self, record: R) -> Result<R> {
        let mut records = self.records.write().await;
        records.push(record.clone());
        Ok(record)
    }

    async fn patch(&self, id: &str, patch: R::Patch) -> Result<R> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(Self::not_found)?;

        let record = &mut records[index];
        record.apply(patch);
        Ok(record.clone())
    }

    async fn patch_where(&self, filter: &dyn RecordFilter<R>, patch: R::Patch) -> Result<Vec<R>> {
        let mut records = self.records.write().await;
        let mut patched = Vec::new();
        for record in records.iter_mut().filter(|r| filter.matches(r)) {
            record.apply(patch.clone());
            patched.push(record.clone());
        }
        Ok(patched)
    }

    async fn remove(&self, id: &str) -> Result<R> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(Self::not_found)?;
        Ok(records.remove(index))
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.records.read().await.len())
    }
}

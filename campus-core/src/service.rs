use std::fmt;
use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use tracing::{debug, error, warn};

use crate::envelope::Envelope;
use crate::errors::PortalError;
use crate::latency::{Latency, OperationWeight};
use crate::record::{next_id, Record, RecordFilter};
use crate::repository::Repository;

/// Service operations. Domain-specific ones are `Custom("makePayment")` etc.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceMethodKind {
    List,
    Get,
    Create,
    Update,
    Remove,
    Custom(&'static str),
}

impl ServiceMethodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceMethodKind::List => "list",
            ServiceMethodKind::Get => "get",
            ServiceMethodKind::Create => "create",
            ServiceMethodKind::Update => "update",
            ServiceMethodKind::Remove => "remove",
            ServiceMethodKind::Custom(name) => name,
        }
    }

    /// Weight used when the caller does not pick one.
    pub fn default_weight(&self) -> OperationWeight {
        match self {
            ServiceMethodKind::List | ServiceMethodKind::Get => OperationWeight::Light,
            _ => OperationWeight::Standard,
        }
    }
}

impl fmt::Display for ServiceMethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generic CRUD over one [`Repository`], with artificial latency and
/// envelope results.
///
/// Expected failures (a missing id) come back as `Ok(Envelope::Failure)`.
/// `Err` means the call itself failed: the backend broke, not the lookup.
pub struct CrudService<R: Record> {
    name: &'static str,
    repo: Arc<dyn Repository<R>>,
    latency: Latency,
}

impl<R: Record> Clone for CrudService<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            repo: Arc::clone(&self.repo),
            latency: self.latency.clone(),
        }
    }
}

impl<R: Record> CrudService<R> {
    pub fn new(name: &'static str, repo: Arc<dyn Repository<R>>, latency: Latency) -> Self {
        Self { name, repo, latency }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn repository(&self) -> &Arc<dyn Repository<R>> {
        &self.repo
    }

    pub fn latency(&self) -> &Latency {
        &self.latency
    }

    /// Wait for `weight`, run `op`, and wrap the outcome in an envelope.
    ///
    /// `op` is a lazy future: nothing in it runs before the delay is over.
    pub async fn call<T, Fut>(
        &self,
        method: ServiceMethodKind,
        weight: OperationWeight,
        op: Fut,
    ) -> Result<Envelope<T>>
    where
        Fut: Future<Output = Result<T>> + Send,
    {
        self.latency.wait(weight).await;

        match op.await {
            Ok(data) => {
                debug!(service = self.name, method = %method, "ok");
                Ok(Envelope::ok(data))
            }
            Err(err) if PortalError::is_not_found(&err) => {
                let message = PortalError::from_anyhow(&err)
                    .map(|e| e.message.clone())
                    .unwrap_or_else(R::not_found_message);
                warn!(service = self.name, method = %method, "{message}");
                Ok(Envelope::not_found(message))
            }
            Err(err) => {
                error!(service = self.name, method = %method, error = %err, "call failed");
                Err(err)
            }
        }
    }

    /// [`call`](Self::call) at the method's default weight.
    async fn call_default<T, Fut>(&self, method: ServiceMethodKind, op: Fut) -> Result<Envelope<T>>
    where
        Fut: Future<Output = Result<T>> + Send,
    {
        let weight = method.default_weight();
        self.call(method, weight, op).await
    }

    pub async fn list(&self, filter: &dyn RecordFilter<R>) -> Result<Envelope<Vec<R>>> {
        self.call_default(ServiceMethodKind::List, self.repo.list(filter))
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Envelope<R>> {
        self.call_default(ServiceMethodKind::Get, self.repo.get(id))
            .await
    }

    pub async fn create(&self, draft: R::Draft) -> Result<Envelope<R>> {
        self.create_weighted(draft, ServiceMethodKind::Create.default_weight())
            .await
    }

    /// `create` with an explicit weight; uploads use `Transfer`.
    pub async fn create_weighted(&self, draft: R::Draft, weight: OperationWeight) -> Result<Envelope<R>> {
        let repo = Arc::clone(&self.repo);
        self.call(ServiceMethodKind::Create, weight, async move {
            let now = Utc::now();
            let record = R::from_draft(next_id(R::PREFIX, now), now, draft);
            repo.insert(record).await
        })
        .await
    }

    pub async fn update(&self, id: &str, patch: R::Patch) -> Result<Envelope<R>> {
        self.call_default(ServiceMethodKind::Update, self.repo.patch(id, patch))
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<Envelope<()>> {
        let removed = self
            .call_default(ServiceMethodKind::Remove, self.repo.remove(id))
            .await?;
        Ok(removed.map(|_| ()))
    }
}

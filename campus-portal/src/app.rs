use std::sync::Arc;

use campus_core::{Latency, MemoryRepository, PortalConfig, PortalConfigSnapshot, StorePolicy};
use tracing::info;

use crate::gate::RouteGate;
use crate::seed::Seed;
use crate::services::{
    AdmissionsService, AssignmentsService, PaymentsService, ResourcesService, ResultsService,
    TimetableService,
};
use crate::stores::{
    AdmissionStore, AssignmentStore, PaymentStore, PaymentTypeStore, ResourceStore, ResultStore,
    TimetableStore,
};

/// Every domain service, each over its own in-memory repository.
///
/// Stores are cheap to create and each one keeps its own state, so a page
/// builds the stores it needs from the shared services.
pub struct Portal {
    config: PortalConfigSnapshot,
    latency: Latency,
    policy: StorePolicy,
    pub assignments: Arc<AssignmentsService>,
    pub resources: Arc<ResourcesService>,
    pub payments: Arc<PaymentsService>,
    pub results: Arc<ResultsService>,
    pub timetable: Arc<TimetableService>,
    pub admissions: Arc<AdmissionsService>,
}

impl Portal {
    /// A portal with empty collections.
    pub fn new(config: &PortalConfig) -> Self {
        Self::with_seed(config, Seed::empty())
    }

    /// A portal preloaded with [`Seed::demo`].
    pub fn with_demo_data(config: &PortalConfig) -> Self {
        Self::with_seed(config, Seed::demo())
    }

    pub fn with_seed(config: &PortalConfig, seed: Seed) -> Self {
        let config = config.snapshot();
        let latency = Latency::from_config(&config);
        let policy = StorePolicy::from_config(&config);

        info!(
            ?policy,
            assignments = seed.assignments.len(),
            resources = seed.resources.len(),
            payments = seed.payments.len(),
            results = seed.results.len(),
            "portal ready"
        );

        Self {
            assignments: Arc::new(AssignmentsService::new(
                Arc::new(MemoryRepository::with_records(seed.assignments)),
                latency.clone(),
            )),
            resources: Arc::new(ResourcesService::new(
                Arc::new(MemoryRepository::with_records(seed.resources)),
                latency.clone(),
            )),
            payments: Arc::new(PaymentsService::new(
                Arc::new(MemoryRepository::with_records(seed.payments)),
                Arc::new(MemoryRepository::with_records(seed.payment_types)),
                latency.clone(),
            )),
            results: Arc::new(ResultsService::new(
                Arc::new(MemoryRepository::with_records(seed.results)),
                latency.clone(),
            )),
            timetable: Arc::new(TimetableService::new(
                Arc::new(MemoryRepository::with_records(seed.timetable)),
                latency.clone(),
            )),
            admissions: Arc::new(AdmissionsService::new(
                Arc::new(MemoryRepository::with_records(seed.admissions)),
                latency.clone(),
            )),
            config,
            latency,
            policy,
        }
    }

    pub fn config(&self) -> &PortalConfigSnapshot {
        &self.config
    }

    pub fn latency(&self) -> &Latency {
        &self.latency
    }

    pub fn store_policy(&self) -> StorePolicy {
        self.policy
    }

    pub fn gate(&self) -> RouteGate {
        RouteGate::from_config(&self.config)
    }

    pub fn assignment_store(&self) -> AssignmentStore {
        AssignmentStore::new(Arc::clone(&self.assignments), self.policy)
    }

    pub fn resource_store(&self) -> ResourceStore {
        ResourceStore::new(Arc::clone(&self.resources), self.policy)
    }

    pub fn payment_store(&self) -> PaymentStore {
        PaymentStore::new(Arc::clone(&self.payments), self.policy)
    }

    pub fn payment_type_store(&self) -> PaymentTypeStore {
        PaymentTypeStore::new(Arc::clone(&self.payments), self.policy)
    }

    pub fn result_store(&self) -> ResultStore {
        ResultStore::new(Arc::clone(&self.results), self.policy)
    }

    pub fn timetable_store(&self) -> TimetableStore {
        TimetableStore::new(Arc::clone(&self.timetable), self.policy)
    }

    pub fn admission_store(&self) -> AdmissionStore {
        AdmissionStore::new(Arc::clone(&self.admissions), self.policy)
    }
}

//! Per-domain client stores.
//!
//! Each one pairs a domain service with a generic [`campus_core::Store`] and
//! names the actions a dashboard triggers.

/// Declares a store struct over `$service` holding `$record`s, with the
/// accessors every domain store shares.
macro_rules! domain_store {
    ($(#[$meta:meta])* $name:ident, $service:ty, $record:ty, $label:literal) => {
        $(#[$meta])*
        pub struct $name {
            service: std::sync::Arc<$service>,
            store: campus_core::Store<$record>,
        }

        impl $name {
            pub fn new(service: std::sync::Arc<$service>, policy: campus_core::StorePolicy) -> Self {
                Self {
                    service,
                    store: campus_core::Store::with_policy($label, policy),
                }
            }

            pub fn store(&self) -> &campus_core::Store<$record> {
                &self.store
            }

            pub fn snapshot(&self) -> campus_core::StoreState<$record> {
                self.store.snapshot()
            }

            pub fn subscribe(&self) -> tokio::sync::watch::Receiver<campus_core::StoreState<$record>> {
                self.store.subscribe()
            }

            pub fn clear_error(&self) {
                self.store.clear_error();
            }
        }
    };
}

pub(crate) use domain_store;

pub mod admissions;
pub mod assignments;
pub mod payments;
pub mod resources;
pub mod results;
pub mod timetable;

pub use admissions::AdmissionStore;
pub use assignments::AssignmentStore;
pub use payments::{PaymentStore, PaymentTypeStore};
pub use resources::ResourceStore;
pub use results::ResultStore;
pub use timetable::TimetableStore;

//! campus-core: the generic pieces behind every portal domain.
//!
//! - [`Repository`] / [`MemoryRepository`]: owned backing collections
//! - [`CrudService`]: latency + envelope around a repository
//! - [`Store`]: `{items, is_loading, error}` client state

pub mod config;
pub mod envelope;
pub mod errors;
pub mod latency;
pub mod record;
pub mod repository;
pub mod service;
pub mod store;

pub use config::{PortalConfig, PortalConfigSnapshot};
pub use envelope::Envelope;
pub use errors::{ErrorKind, PortalError, PortalResult};
pub use latency::{Latency, OperationWeight};
pub use record::{Record, RecordFilter};
pub use repository::{MemoryRepository, Repository};
pub use service::{CrudService, ServiceMethodKind};
pub use store::{Store, StorePolicy, StoreState, NETWORK_ERROR_MESSAGE};

pub mod resource_params;
pub mod resources_schema;
pub mod resources_service;

pub use resource_params::ResourceFilter;
pub use resources_schema::{Resource, ResourceDraft, ResourceKind, ResourcePatch};
pub use resources_service::ResourcesService;

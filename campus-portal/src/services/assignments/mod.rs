pub mod assignment_params;
pub mod assignments_schema;
pub mod assignments_service;

pub use assignment_params::AssignmentFilter;
pub use assignments_schema::{Assignment, AssignmentDraft, AssignmentPatch, AssignmentStatus};
pub use assignments_service::AssignmentsService;

//! One module per portal domain, each split the same way:
//! `*_schema` (record, draft, patch), `*_params` (list filter), `*_service`.

pub mod admissions;
pub mod assignments;
pub mod payments;
pub mod resources;
pub mod results;
pub mod timetable;

pub use admissions::AdmissionsService;
pub use assignments::AssignmentsService;
pub use payments::PaymentsService;
pub use resources::ResourcesService;
pub use results::ResultsService;
pub use timetable::TimetableService;

pub mod admission_params;
pub mod admissions_schema;
pub mod admissions_service;

pub use admission_params::AdmissionFilter;
pub use admissions_schema::{
    AdmissionApplication, AdmissionDraft, AdmissionPatch, AdmissionStatus,
};
pub use admissions_service::AdmissionsService;

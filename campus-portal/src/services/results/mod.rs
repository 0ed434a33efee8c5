pub mod result_params;
pub mod results_schema;
pub mod results_service;

pub use result_params::ResultFilter;
pub use results_schema::{grade_for_score, ExamResult, ResultDraft, ResultPatch, Term};
pub use results_service::ResultsService;

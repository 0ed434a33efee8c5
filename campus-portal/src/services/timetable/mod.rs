pub mod timetable_params;
pub mod timetable_schema;
pub mod timetable_service;

pub use timetable_params::TimetableFilter;
pub use timetable_schema::{DaySchedule, TimetableDraft, TimetableEntry, TimetablePatch};
pub use timetable_service::TimetableService;

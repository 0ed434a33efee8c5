pub mod payment_params;
pub mod payments_schema;
pub mod payments_service;

pub use payment_params::{PaymentFilter, PaymentTypeFilter};
pub use payments_schema::{
    Payment, PaymentDraft, PaymentFrequency, PaymentPatch, PaymentStatus, PaymentSummary,
    PaymentType, PaymentTypeDraft, PaymentTypePatch,
};
pub use payments_service::PaymentsService;

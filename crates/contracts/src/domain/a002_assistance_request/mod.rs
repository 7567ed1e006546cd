pub mod aggregate;
pub mod form;

pub use aggregate::{matches_search, AssistanceRequest, AssistanceStatus, StatusUpdateDto};
pub use form::{BeneficiarySnapshot, CreateAssistanceRequestDto, LogAssistanceForm};

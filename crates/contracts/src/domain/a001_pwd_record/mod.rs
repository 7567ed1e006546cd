pub mod aggregate;
pub mod filter;
pub mod form;

pub use aggregate::{DocumentRef, PwdRecord, RegistrationStatus};
pub use filter::{distinct_communities, distinct_quarters, PwdListFilter};
pub use form::{FormMode, PwdRecordForm, EDUCATION_LEVELS};

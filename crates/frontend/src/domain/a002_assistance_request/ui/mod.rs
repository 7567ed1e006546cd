pub mod details;
pub mod edit;
pub mod list;
pub mod log_form;

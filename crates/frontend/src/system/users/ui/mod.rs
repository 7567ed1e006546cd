pub mod list;
pub mod profile;
pub mod user_form;

pub mod age;
pub mod api;
pub mod quarter;
pub mod serde_ext;

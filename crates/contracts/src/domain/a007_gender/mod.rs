pub mod aggregate;

pub use aggregate::Gender;

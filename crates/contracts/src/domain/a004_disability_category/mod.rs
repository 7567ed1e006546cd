pub mod aggregate;

pub use aggregate::DisabilityCategory;

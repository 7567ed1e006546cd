pub mod aggregate;

pub use aggregate::DisabilityType;

pub mod aggregate;

pub use aggregate::{AssistanceType, DistributionRow};

pub mod aggregate;

pub use aggregate::Community;

pub mod dto;

pub use dto::{CurrentPeriod, DashboardTotals, MetricCard};

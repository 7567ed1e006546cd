pub mod dto;
pub mod report;

pub use dto::{quarter_chart, DistributionSlice, QuarterStat};
pub use report::{ReportDocument, ReportKind, ReportSection};

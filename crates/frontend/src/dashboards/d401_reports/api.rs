use contracts::dashboards::d401_reports::{QuarterStat, ReportDocument, ReportKind};
use contracts::shared::api::ApiError;

use crate::shared::api_utils::{get_data, get_value};

/// Registered and assisted counts, one entry per quarter
pub async fn get_quarter_stats() -> Result<Vec<QuarterStat>, ApiError> {
    get_data::<Vec<QuarterStat>>("/v1/statistics").await
}

/// Fetches the report's endpoint and lays out its tables
pub async fn build_report(kind: ReportKind) -> Result<ReportDocument, ApiError> {
    let data = get_value(kind.endpoint()).await?;
    Ok(kind.build(&data))
}

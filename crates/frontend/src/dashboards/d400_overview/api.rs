use contracts::dashboards::d400_overview::DashboardTotals;
use contracts::shared::api::ApiError;

use crate::shared::api_utils::get_data;

/// Totals behind the metric cards of the dashboard home
pub async fn get_totals() -> Result<DashboardTotals, ApiError> {
    get_data::<DashboardTotals>("/v1/pwd-records/total").await
}

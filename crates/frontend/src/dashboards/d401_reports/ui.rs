//! Reports & Analytics: quarterly chart, assistance distribution and the
//! downloadable reports.

use contracts::dashboards::d401_reports::dto::chart_max;
use contracts::dashboards::d401_reports::{
    quarter_chart, DistributionSlice, QuarterStat, ReportKind,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::dashboards::d401_reports::api;
use crate::domain::a006_assistance_type::api::fetch_distribution;
use crate::shared::components::page_header::PageHeader;
use crate::shared::export::{export_report, export_report_csv};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;

/// Bar height in percent of the chart area.
fn bar_height(value: i64, max: i64) -> String {
    format!("{:.0}%", value.max(0) as f64 * 100.0 / max.max(1) as f64)
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let toast = use_toast();
    let (stats, set_stats) = signal(quarter_chart(&[]));
    let (slices, set_slices) = signal(Vec::<DistributionSlice>::new());
    let active_report = RwSignal::new(None::<ReportKind>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_quarter_stats().await {
                Ok(data) => set_stats.set(quarter_chart(&data)),
                Err(e) => log::error!("Failed to load quarterly statistics: {}", e),
            }
        });
        spawn_local(async move {
            match fetch_distribution().await {
                Ok(rows) => set_slices.set(DistributionSlice::from_rows(&rows)),
                Err(e) => log::error!("Failed to load assistance distribution: {}", e),
            }
        });
    });

    let generate = move |kind: ReportKind, as_csv: bool| {
        if active_report.get_untracked().is_some() {
            return;
        }
        active_report.set(Some(kind));
        spawn_local(async move {
            match api::build_report(kind).await {
                Ok(doc) => {
                    if doc.is_empty() {
                        log::info!("{} has no rows, exporting empty tables", doc.title);
                    }
                    let exported = if as_csv {
                        export_report_csv(&doc)
                    } else {
                        export_report(&doc)
                    };
                    match exported {
                        Ok(()) => toast.success(format!("{} downloaded", doc.title)),
                        Err(e) => toast.error(e),
                    }
                }
                Err(e) => {
                    log::error!("Failed to generate {}: {}", kind.title(), e);
                    toast.error(format!("Failed to generate {}", kind.title()));
                }
            }
            active_report.set(None);
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Reports & Analytics" subtitle="Generate a comprehensive report and analyse system data">
                ""
            </PageHeader>

            <div class="report-grid">
                {ReportKind::all().into_iter().map(|kind| view! {
                    <div class="card report-card">
                        <div class="report-card__head">
                            <span class="report-card__icon">{icon("file")}</span>
                            <div>
                                <h3 class="report-card__title">{kind.title()}</h3>
                                <p class="report-card__description">{kind.description()}</p>
                            </div>
                        </div>
                        <div class="report-card__actions">
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || active_report.get().is_some())
                                on_click=move |_| generate(kind, false)
                            >
                                {move || if active_report.get() == Some(kind) {
                                    "Generating..."
                                } else {
                                    "Generate Report"
                                }}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                disabled=Signal::derive(move || active_report.get().is_some())
                                on_click=move |_| generate(kind, true)
                            >
                                "CSV"
                            </Button>
                        </div>
                    </div>
                }).collect_view()}
            </div>

            <div class="chart-grid">
                <div class="card">
                    <h3 class="card__title">"Quarterly Assistance Stats"</h3>
                    <QuarterBars stats=stats />
                </div>
                <div class="card">
                    <h3 class="card__title">"Assistance Distribution"</h3>
                    {move || {
                        let rows = slices.get();
                        if rows.is_empty() {
                            return view! { <p class="chart__empty">"No distribution data yet."</p> }.into_any();
                        }
                        view! {
                            <ul class="distribution">
                                {rows.into_iter().map(|s| view! {
                                    <li class="distribution__row">
                                        <span class="distribution__name">{s.name}</span>
                                        <span class="distribution__track">
                                            <span
                                                class="distribution__fill"
                                                style:width=format!("{:.1}%", s.percent)
                                            ></span>
                                        </span>
                                        <span class="distribution__value">
                                            {format!("{} ({:.0}%)", s.value, s.percent)}
                                        </span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        }.into_any()
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn QuarterBars(stats: ReadSignal<Vec<QuarterStat>>) -> impl IntoView {
    view! {
        <div class="bar-chart">
            <div class="bar-chart__legend">
                <span class="bar-chart__key bar-chart__key--registered">"Registered"</span>
                <span class="bar-chart__key bar-chart__key--assisted">"Assisted"</span>
            </div>
            <div class="bar-chart__plot">
                {move || {
                    let data = stats.get();
                    let max = chart_max(&data);
                    data.into_iter().map(|s| view! {
                        <div class="bar-chart__group">
                            <div class="bar-chart__bars">
                                <div
                                    class="bar-chart__bar bar-chart__bar--registered"
                                    style:height=bar_height(s.registered, max)
                                    title=format!("Registered: {}", s.registered)
                                ></div>
                                <div
                                    class="bar-chart__bar bar-chart__bar--assisted"
                                    style:height=bar_height(s.assisted, max)
                                    title=format!("Assisted: {}", s.assisted)
                                ></div>
                            </div>
                            <span class="bar-chart__label">{s.quarter}</span>
                        </div>
                    }).collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_height() {
        assert_eq!(bar_height(5, 10), "50%");
        assert_eq!(bar_height(0, 1), "0%");
        assert_eq!(bar_height(-3, 10), "0%");
        assert_eq!(bar_height(3, 3), "100%");
    }
}

use crate::shared::icons::icon;
use contracts::dashboards::d400_overview::MetricCard;
use leptos::prelude::*;

/// `1234567` -> `1,234,567`
pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    card: MetricCard,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__header">
                <span class="stat-card__label">{card.title}</span>
                <span class="stat-card__icon">{icon(&icon_name)}</span>
            </div>
            <div class="stat-card__value">{format_thousands(card.value)}</div>
            <div class="stat-card__description">{card.description}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(format_thousands(-4_500), "-4,500");
    }
}

use leptos::prelude::*;

/// Title row of a dashboard page with optional actions on the right
#[component]
pub fn PageHeader(
    /// Page title
    #[prop(into)]
    title: String,
    /// Secondary line under the title
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Pass an empty fragment when there are no actions
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page-header__subtitle">{s}</div>
                })}
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}

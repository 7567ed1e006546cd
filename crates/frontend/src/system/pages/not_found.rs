use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <h2>"Oops! The page you're looking for doesn't exist."</h2>
            <p>"Please check the URL or navigate to one of our main pages."</p>
            <div class="not-found__links">
                <a class="button button--primary" href="/">"Officer Login"</a>
                <a class="button button--secondary" href="/admin">"Admin Login"</a>
            </div>
        </div>
    }
}

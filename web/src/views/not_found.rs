use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();
    let location = use_location();

    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    leptos::logging::warn!(
        "404: user attempted to access non-existent route {}",
        location.pathname.get_untracked()
    );

    view! {
        <div class="not-found">
            <div class="not-found__code">"404"</div>
            <div class="not-found__card">
                <h1>"Page Not Found"</h1>
                <p>"Oops! The page you're looking for doesn't exist or may have been moved."</p>
                <div class="not-found__actions">
                    <button
                        class="btn-primary"
                        on:click={
                            let navigate = navigate.clone();
                            move |_| navigate("/", Default::default())
                        }
                    >
                        "Return to Home"
                    </button>
                    <button
                        class="btn-ghost"
                        on:click=move |_| navigate("/buy", Default::default())
                    >
                        "Browse Games"
                    </button>
                </div>
            </div>
        </div>
    }
}

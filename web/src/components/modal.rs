use leptos::prelude::*;

/// Overlay dialog shown while `show` is true. Clicking the backdrop calls `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] show: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(optional, into)] description: Option<String>,
    on_close: impl Fn() + 'static + Copy + Send + Sync,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=move || if show.get() { "modal-overlay show" } else { "modal-overlay" }
            on:click=move |_| on_close()
        >
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{move || title.get()}</h2>
                    {description.map(|text| view! { <p class="modal-description">{text}</p> })}
                </div>
                <div class="modal-content">{children()}</div>
            </div>
        </div>
    }
}

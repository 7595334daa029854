use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

/// Inline error notice; with a `message` signal it hides itself while the message is empty.
#[component]
pub fn ErrorView(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|msg| {
            view! {
                <div class="error-view">
                    <MessageBar intent=MessageBarIntent::Error>{msg}</MessageBar>
                </div>
            }
        })
    }
}

#[component]
pub fn SuccessView(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|msg| {
            view! {
                <div class="success-view">
                    <MessageBar intent=MessageBarIntent::Success>{msg}</MessageBar>
                </div>
            }
        })
    }
}

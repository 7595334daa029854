use leptos::{prelude::*, task::spawn_local};
use thaw::*;

use crate::components::ErrorView;
use crate::server::admin_login;
use crate::utils::auth::credentials_entered;

#[component]
pub fn AdminLogin(on_success: impl Fn() + 'static + Copy + Send + Sync) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_visible = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);

    let is_button_disabled =
        Memo::new(move |_| loading.get() || !credentials_entered(&email.get(), &password.get()));

    let submit_login = move || {
        if is_button_disabled.get_untracked() {
            return;
        }
        loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            match admin_login(email.get_untracked(), password.get_untracked()).await {
                Ok(()) => on_success(),
                Err(e) => {
                    leptos::logging::warn!("Admin login failed: {}", e);
                    error_message.set(Some(format!("Access denied: {}", e)));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-card">
                <div class="auth-header">
                    <div class="card__icon">"🛡️"</div>
                    <h1>"Admin Login"</h1>
                    <p>"Secure access to Seatwell administration"</p>
                </div>

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit_login();
                }>
                    <div class="auth-form-group">
                        <label>"Admin Email"</label>
                        <Input
                            class="auth-input"
                            placeholder="admin@seatwell.ch"
                            input_type=InputType::Email
                            value=email
                        />
                    </div>

                    <div class="auth-form-group">
                        <label>"Password"</label>
                        <div class="auth-input-wrapper">
                            <Input
                                class="auth-input"
                                placeholder="Enter admin password"
                                input_type=Signal::derive(move || if password_visible.get() { InputType::Text } else { InputType::Password })
                                value=password
                            />
                            <button
                                type="button"
                                class="auth-password-toggle"
                                on:click=move |_| password_visible.update(|visible| *visible = !*visible)
                            >
                                {move || if password_visible.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </div>

                    <div class="demo-credentials">
                        <strong>"Demo credentials:"</strong>
                        <div>"Email: admin@seatwell.ch"</div>
                        <div>"Password: admin123"</div>
                    </div>

                    <ErrorView message=error_message/>

                    <Button
                        class="auth-submit-btn"
                        button_type=ButtonType::Submit
                        appearance=ButtonAppearance::Primary
                        loading=Signal::from(loading)
                        disabled=Signal::from(is_button_disabled)
                    >
                        {move || if loading.get() { "Authenticating..." } else { "Access Admin Panel" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}

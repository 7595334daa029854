use leptos::prelude::*;

use crate::views::admin_dashboard::AdminDashboard;
use crate::views::admin_login::AdminLogin;

/// Admin area. The session is a page-local flag; reloading logs out.
#[component]
pub fn AdminPage() -> impl IntoView {
    let logged_in = RwSignal::new(false);

    view! {
        <div class="admin-page">
            {move || if logged_in.get() {
                view! { <AdminDashboard on_logout=move || logged_in.set(false)/> }.into_any()
            } else {
                view! { <AdminLogin on_success=move || logged_in.set(true)/> }.into_any()
            }}
        </div>
    }
}

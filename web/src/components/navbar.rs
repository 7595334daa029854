use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        "Seatwell"
                    </A>
                </div>

                <div class="navbar__links">
                    <A href="/buy" attr:class="navbar__link">
                        "Buy Tickets"
                    </A>
                    <A href="/sell" attr:class="navbar__link">
                        "Sell Tickets"
                    </A>
                    <A href="/contact" attr:class="navbar__link">
                        "Contact"
                    </A>
                    <A href="/admin" attr:class="navbar__link navbar__link--cta">
                        "Admin"
                    </A>
                </div>
            </div>
        </nav>
    }
}

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__container">
                <div class="footer__brand">
                    <span class="footer__logo">"Seatwell"</span>
                    <p>"Switzerland's resale platform for season ticket holders."</p>
                </div>
                <div class="footer__links">
                    <A href="/buy" attr:class="footer__link">"Buy"</A>
                    <A href="/sell" attr:class="footer__link">"Sell"</A>
                    <A href="/contact" attr:class="footer__link">"Contact"</A>
                </div>
            </div>
        </footer>
    }
}

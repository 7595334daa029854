use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{ErrorView, GameCard, LoadingView};
use crate::server::fetch_upcoming_games;

const HORIZON_GAMES: usize = 4;

#[component]
pub fn HomePage() -> impl IntoView {
    let games = Resource::new(|| (), |_| async move { fetch_upcoming_games(HORIZON_GAMES).await });

    view! {
        <div class="homepage">
            <section class="hero">
                <div class="hero__badge">"🛡 Trusted Swiss Platform"</div>
                <h1 class="hero__title">
                    "Resell Your" <br/>
                    <span class="hero__accent">"Sports Tickets"</span> <br/>
                    <span class="hero__light">"Easily & Securely"</span>
                </h1>
                <p class="hero__lead">
                    "Switzerland's premier platform for season ticket holders to resell tickets they can't use. "
                    "Safe, simple, and connected to your club membership."
                </p>
                <div class="hero__actions">
                    <A href="/buy">
                        <button class="btn-primary btn-large">"Buy a Ticket"</button>
                    </A>
                    <A href="/sell">
                        <button class="btn-outlined btn-large">"Sell a Ticket"</button>
                    </A>
                </div>
            </section>

            <section class="features">
                <h2>"Why Choose Seatwell?"</h2>
                <p class="section-lead">
                    "The trusted platform connecting Swiss sports fans with secure ticket resale"
                </p>
                <div class="features__grid">
                    <div class="feature-card">
                        <h3>"Secure & Verified"</h3>
                        <p>"Only verified season ticket holders can sell. All transactions are protected and guaranteed."</p>
                    </div>
                    <div class="feature-card">
                        <h3>"Club Connected"</h3>
                        <p>"Integrated with official club systems. Your membership is verified automatically."</p>
                    </div>
                    <div class="feature-card">
                        <h3>"Easy Management"</h3>
                        <p>"List tickets in seconds. Get paid instantly when they sell. No hassle, no waiting."</p>
                    </div>
                </div>
            </section>

            <section class="horizon">
                <h2>"Games on the Horizon"</h2>
                <p class="section-lead">"Upcoming matches with ticket availability"</p>
                <Suspense fallback=move || view! { <LoadingView message="Loading upcoming games..."/> }>
                    {move || {
                        games.get().map(|result| match result {
                            Ok(games) => view! {
                                <div class="game-grid">
                                    {games
                                        .into_iter()
                                        .map(|game| view! { <GameCard game/> })
                                        .collect_view()}
                                </div>
                            }.into_any(),
                            Err(e) => {
                                let message = Signal::derive(move || Some(format!("Failed to load games: {}", e)));
                                view! { <ErrorView message/> }.into_any()
                            }
                        })
                    }}
                </Suspense>
                <div class="horizon__more">
                    <A href="/buy">
                        <button class="btn-outlined">"View All Games"</button>
                    </A>
                </div>
            </section>
        </div>
    }
}

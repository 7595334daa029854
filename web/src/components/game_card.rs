use leptos::prelude::*;
use leptos_router::components::A;

use crate::db::entities::GameSummary;
use crate::utils::format::format_kickoff;

#[component]
pub fn GameCard(game: GameSummary, #[prop(optional)] show_price: bool) -> impl IntoView {
    let title = format!("{} vs {}", game.home_team, game.away_team);
    let kickoff = format_kickoff(game.date, &game.kickoff);
    let detail_href = format!("/buy/game/{}", game.id);

    view! {
        <div class="game-card">
            <div class="game-card__header">
                <h3 class="game-card__title">{title}</h3>
                {if game.has_tickets {
                    view! { <span class="availability-badge available">"✓ Available"</span> }.into_any()
                } else {
                    view! { <span class="availability-badge unavailable">"✕ No Tickets"</span> }.into_any()
                }}
            </div>
            <div class="game-card__meta">
                <span class="game-card__date">"📅 " {kickoff}</span>
                <span class="game-card__stadium">"📍 " {game.stadium.clone()}</span>
            </div>

            {if game.has_tickets {
                view! {
                    <div class="game-card__body">
                        <div class="game-card__stats">
                            <span>{format!("{} tickets available", game.ticket_count)}</span>
                            {show_price.then(|| view! {
                                <span class="game-card__price">{game.price_range.clone()}</span>
                            })}
                        </div>
                        <A href=detail_href>
                            <button class="btn-primary btn-block">"View Tickets"</button>
                        </A>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="game-card__body game-card__body--empty">
                        <p>"No tickets available yet"</p>
                        <button class="btn-outlined btn-block" disabled=true>
                            "Notify When Available"
                        </button>
                    </div>
                }.into_any()
            }}
        </div>
    }
}

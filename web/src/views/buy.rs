use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;
use thaw::*;

use crate::components::{ErrorView, GameCard, LoadingView};
use crate::db::repository::AvailabilityFilter;
use crate::server::fetch_games;

/// `/buy?q=<term>&filter=<all|available|unavailable>`
fn search_href(term: &str, filter: AvailabilityFilter) -> String {
    let mut params = Vec::new();
    if !term.trim().is_empty() {
        params.push(format!("q={}", urlencoding::encode(term.trim())));
    }
    if filter != AvailabilityFilter::All {
        params.push(format!("filter={}", filter.value()));
    }
    if params.is_empty() {
        "/buy".to_string()
    } else {
        format!("/buy?{}", params.join("&"))
    }
}

#[component]
pub fn BuyPage() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();

    let search_term = RwSignal::new(query.get_untracked().get("q").unwrap_or_default());
    let filter_status = RwSignal::new(
        query
            .get_untracked()
            .get("filter")
            .unwrap_or_else(|| AvailabilityFilter::All.value().to_string()),
    );

    // Keep the URL shareable without adding a history entry per keystroke
    Effect::new(move |_| {
        let href = search_href(
            &search_term.get(),
            AvailabilityFilter::from_value(&filter_status.get()),
        );
        navigate(
            &href,
            NavigateOptions {
                replace: true,
                scroll: false,
                ..Default::default()
            },
        );
    });

    let games = Resource::new(
        move || (search_term.get(), filter_status.get()),
        |(term, filter)| async move { fetch_games(term, filter).await },
    );

    view! {
        <div class="buy-page">
            <section class="page-header">
                <h1>"Buy Tickets"</h1>
                <p>"Find and purchase tickets from verified season ticket holders across Switzerland"</p>
            </section>

            <section class="search-bar">
                <div class="search-bar__input">
                    <Input
                        placeholder="Search teams or stadiums..."
                        value=search_term
                    />
                </div>
                <div class="search-bar__filter">
                    <select
                        class="form-select"
                        prop:value=move || filter_status.get()
                        on:change=move |ev| filter_status.set(event_target_value(&ev))
                    >
                        <option value="all">"All Games"</option>
                        <option value="available">"Tickets Available"</option>
                        <option value="unavailable">"No Tickets"</option>
                    </select>
                </div>
            </section>

            <section class="games-list">
                <Suspense fallback=move || view! { <LoadingView message="Loading games..."/> }>
                    {move || {
                        games.get().map(|result| match result {
                            Ok(games) if games.is_empty() => view! {
                                <div class="empty-state">
                                    <div class="empty-state__icon">"🔍"</div>
                                    <h3>"No games found"</h3>
                                    <p>"Try adjusting your search terms or filters"</p>
                                </div>
                            }.into_any(),
                            Ok(games) => view! {
                                <div class="game-grid">
                                    {games
                                        .into_iter()
                                        .map(|game| view! { <GameCard game show_price=true/> })
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
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_href_omits_defaults() {
        assert_eq!(search_href("", AvailabilityFilter::All), "/buy");
        assert_eq!(search_href("   ", AvailabilityFilter::All), "/buy");
    }

    #[test]
    fn search_href_encodes_the_term() {
        assert_eq!(
            search_href("FC St. Gallen", AvailabilityFilter::Available),
            "/buy?q=FC%20St.%20Gallen&filter=available"
        );
        assert_eq!(
            search_href("Schützenwiese", AvailabilityFilter::All),
            "/buy?q=Sch%C3%BCtzenwiese"
        );
    }
}

use leptos::{prelude::*, task::spawn_local};
use thaw::*;

use crate::components::{ErrorView, LoadingView, Modal, SuccessView};
use crate::db::entities::{GameSummary, Listing, ListingStats, ListingStatus, ReviewDecision};
use crate::server::{fetch_games, fetch_listings, review_listing};
use crate::utils::format::{format_chf, format_kickoff, format_match_date, format_timestamp};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AdminTab {
    Listings,
    Games,
    Users,
}

impl AdminTab {
    const ALL: [AdminTab; 3] = [AdminTab::Listings, AdminTab::Games, AdminTab::Users];

    fn label(&self) -> &'static str {
        match self {
            AdminTab::Listings => "Ticket Listings",
            AdminTab::Games => "Game Management",
            AdminTab::Users => "User Management",
        }
    }
}

/// Replaces the status of the listing with `listing_id`. Returns false if no listing matched.
fn set_listing_status(listings: &mut [Listing], listing_id: i32, status: ListingStatus) -> bool {
    match listings.iter_mut().find(|l| l.id == listing_id) {
        Some(listing) => {
            listing.status = status;
            true
        }
        None => false,
    }
}

fn review_notice(status: ListingStatus) -> String {
    format!("Listing {}. The ticket listing has been {} successfully.", status.as_str(), status.as_str())
}

#[component]
pub fn AdminDashboard(on_logout: impl Fn() + 'static + Copy + Send + Sync) -> impl IntoView {
    let initial_listings = Resource::new(|| (), |_| async move { fetch_listings().await });

    view! {
        <div class="admin-dashboard">
            <header class="admin-dashboard-header">
                <div>
                    <h1>"Seatwell Admin"</h1>
                    <p>"Administrative Dashboard"</p>
                </div>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_logout()>
                    "Logout"
                </Button>
            </header>

            <Suspense fallback=move || view! { <LoadingView message="Loading listings..."/> }>
                {move || {
                    initial_listings.get().map(|result| match result {
                        Ok(listings) => view! { <ListingBoard listings/> }.into_any(),
                        Err(e) => {
                            let message = Signal::derive(move || Some(format!("Failed to load listings: {}", e)));
                            view! { <ErrorView message/> }.into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ListingBoard(listings: Vec<Listing>) -> impl IntoView {
    let listings = RwSignal::new(listings);
    let active_tab = RwSignal::new(AdminTab::Listings);
    let selected_listing = RwSignal::new(None::<i32>);
    let reviewing = RwSignal::new(false);
    let notice = RwSignal::new(Some(
        "Admin access granted. Welcome to the Seatwell Admin Panel".to_string(),
    ));
    let error_message = RwSignal::new(None::<String>);

    let stats = Memo::new(move |_| listings.with(|l| ListingStats::from(l.as_slice())));

    let review = move |listing_id: i32, decision: ReviewDecision| {
        let Some(current) = listings.with_untracked(|l| {
            l.iter().find(|listing| listing.id == listing_id).map(|listing| listing.status)
        }) else {
            return;
        };
        reviewing.set(true);
        error_message.set(None);

        spawn_local(async move {
            match review_listing(listing_id, current, decision).await {
                Ok(next) => {
                    listings.update(|l| {
                        set_listing_status(l, listing_id, next);
                    });
                    notice.set(Some(review_notice(next)));
                    selected_listing.set(None);
                }
                Err(e) => {
                    leptos::logging::error!("Listing review failed: {}", e);
                    error_message.set(Some(format!("Review failed: {}", e)));
                }
            }
            reviewing.set(false);
        });
    };

    let details = Memo::new(move |_| {
        selected_listing.get().and_then(|id| listings.with(|l| l.iter().find(|x| x.id == id).cloned()))
    });

    view! {
        <SuccessView message=notice/>
        <ErrorView message=error_message/>

        <section class="admin-stats">
            <StatCard label="Total Listings" value=Signal::derive(move || stats.get().total) tone="total"/>
            <StatCard label="Pending Approval" value=Signal::derive(move || stats.get().pending) tone="pending"/>
            <StatCard label="Approved" value=Signal::derive(move || stats.get().approved) tone="approved"/>
            <StatCard label="Tickets Sold" value=Signal::derive(move || stats.get().sold) tone="sold"/>
        </section>

        <nav class="admin-tabs">
            {AdminTab::ALL
                .into_iter()
                .map(|tab| view! {
                    <button
                        type="button"
                        class=move || if active_tab.get() == tab { "admin-tab active" } else { "admin-tab" }
                        on:click=move |_| active_tab.set(tab)
                    >
                        {tab.label()}
                    </button>
                })
                .collect_view()}
        </nav>

        {move || match active_tab.get() {
            AdminTab::Listings => view! {
                <section class="admin-panel">
                    <h2>"Ticket Listings Management"</h2>
                    <p>"Review, approve, or reject ticket listings from season ticket holders"</p>
                    <div class="listing-list">
                        <For
                            each=move || listings.get()
                            key=|listing| (listing.id, listing.status)
                            children=move |listing| view! {
                                <ListingRow
                                    listing
                                    reviewing
                                    on_view=move |id| selected_listing.set(Some(id))
                                    on_review=review
                                />
                            }
                        />
                    </div>
                </section>
            }.into_any(),
            AdminTab::Games => view! { <GamesPanel/> }.into_any(),
            AdminTab::Users => view! {
                <section class="admin-panel admin-panel--empty">
                    <h2>"User Management"</h2>
                    <p>"Manage user accounts, permissions, and season ticket verification"</p>
                    <div class="empty-state">
                        <div class="empty-state__icon">"👥"</div>
                        <p>
                            "Advanced user management features including season ticket verification, account status management, and permission controls."
                        </p>
                    </div>
                </section>
            }.into_any(),
        }}

        <Modal
            show=Signal::derive(move || details.get().is_some())
            title="Ticket Listing Details".to_string()
            description="Review all information for this ticket listing"
            on_close=move || selected_listing.set(None)
        >
            {move || details.get().map(|listing| {
                let listing_id = listing.id;
                let pending = listing.status == ListingStatus::Pending;
                view! {
                    <dl class="listing-details">
                        <dt>"Game"</dt>
                        <dd class="listing-details__strong">{listing.game.clone()}</dd>
                        <dt>"Date"</dt>
                        <dd>{format_match_date(listing.date)}</dd>
                        <dt>"Seller"</dt>
                        <dd>{listing.seller.clone()}</dd>
                        <dt>"Status"</dt>
                        <dd><span class=listing.status.badge_class()>{listing.status.as_str()}</span></dd>
                        <dt>"Section"</dt>
                        <dd>{listing.section.clone()}</dd>
                        <dt>"Price"</dt>
                        <dd class="listing-details__price">{format_chf(listing.price)}</dd>
                        <dt>"Submitted"</dt>
                        <dd>{format_timestamp(listing.submitted_at)}</dd>
                    </dl>
                    <div class="modal-actions">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| selected_listing.set(None)
                        >
                            "Close"
                        </Button>
                        {pending.then(|| view! {
                            <Button
                                class="btn-danger"
                                disabled=Signal::from(reviewing)
                                on_click=move |_| review(listing_id, ReviewDecision::Reject)
                            >
                                "Reject Listing"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                loading=Signal::from(reviewing)
                                disabled=Signal::from(reviewing)
                                on_click=move |_| review(listing_id, ReviewDecision::Approve)
                            >
                                "Approve Listing"
                            </Button>
                        })}
                    </div>
                }
            })}
        </Modal>
    }
}

#[component]
fn StatCard(label: &'static str, #[prop(into)] value: Signal<usize>, tone: &'static str) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-card--{}", tone)>
            <p class="stat-card__label">{label}</p>
            <p class="stat-card__value">{move || value.get()}</p>
        </div>
    }
}

#[component]
fn ListingRow(
    listing: Listing,
    reviewing: RwSignal<bool>,
    on_view: impl Fn(i32) + 'static + Copy + Send + Sync,
    on_review: impl Fn(i32, ReviewDecision) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let listing_id = listing.id;
    let pending = listing.status == ListingStatus::Pending;

    view! {
        <div class="listing-row">
            <div class="listing-row__info">
                <div class="listing-row__heading">
                    <h3>{listing.game.clone()}</h3>
                    <span class=listing.status.badge_class()>{listing.status.as_str()}</span>
                </div>
                <div class="listing-row__meta">
                    <span>{format_match_date(listing.date)}</span>
                    <span>{listing.section.clone()}</span>
                    <span>{format_chf(listing.price)}</span>
                    <span>{listing.seller.clone()}</span>
                </div>
            </div>
            <div class="listing-row__actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_view(listing_id)>
                    "View"
                </Button>
                {pending.then(|| view! {
                    <Button
                        class="btn-success"
                        disabled=Signal::from(reviewing)
                        on_click=move |_| on_review(listing_id, ReviewDecision::Approve)
                    >
                        "Approve"
                    </Button>
                    <Button
                        class="btn-danger"
                        disabled=Signal::from(reviewing)
                        on_click=move |_| on_review(listing_id, ReviewDecision::Reject)
                    >
                        "Reject"
                    </Button>
                })}
            </div>
        </div>
    }
}

#[component]
fn GamesPanel() -> impl IntoView {
    let games = Resource::new(
        || (),
        |_| async move { fetch_games(String::new(), "all".to_string()).await },
    );

    view! {
        <section class="admin-panel">
            <h2>"Game Schedule Management"</h2>
            <p>"Manage upcoming games and their ticket availability"</p>
            <Suspense fallback=move || view! { <LoadingView message="Loading games..."/> }>
                {move || {
                    games.get().map(|result| match result {
                        Ok(games) => view! {
                            <div class="admin-game-list">
                                {games.into_iter().map(|game| view! { <AdminGameRow game/> }).collect_view()}
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
    }
}

#[component]
fn AdminGameRow(game: GameSummary) -> impl IntoView {
    view! {
        <div class="admin-game-row">
            <div>
                <h3>{format!("{} vs {}", game.home_team, game.away_team)}</h3>
                <div class="admin-game-row__meta">
                    <span>{format_kickoff(game.date, &game.kickoff)}</span>
                    <span>{game.stadium.clone()}</span>
                    <span>{format!("{} tickets", game.ticket_count)}</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn listing(id: i32, status: ListingStatus) -> Listing {
        Listing {
            id,
            seller: format!("Club Member #{id}"),
            game: "FC Zurich vs FC Basel".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            section: "Tribune A".to_string(),
            price: 85,
            status,
            submitted_at: Utc.with_ymd_and_hms(2025, 1, 10, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn set_listing_status_updates_only_the_matching_listing() {
        let mut listings = vec![
            listing(1, ListingStatus::Pending),
            listing(2, ListingStatus::Pending),
        ];

        assert!(set_listing_status(&mut listings, 2, ListingStatus::Rejected));
        assert_eq!(listings[0].status, ListingStatus::Pending);
        assert_eq!(listings[1].status, ListingStatus::Rejected);

        let stats = ListingStats::from(listings.as_slice());
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.total, 2);
    }

    #[test]
    fn set_listing_status_ignores_unknown_ids() {
        let mut listings = vec![listing(1, ListingStatus::Pending)];
        assert!(!set_listing_status(&mut listings, 9, ListingStatus::Approved));
        assert_eq!(listings[0].status, ListingStatus::Pending);
    }

    #[test]
    fn review_notice_names_the_outcome() {
        assert_eq!(
            review_notice(ListingStatus::Approved),
            "Listing approved. The ticket listing has been approved successfully."
        );
    }
}

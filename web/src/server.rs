use leptos::prelude::*;
use leptos::server;
use serde::{Deserialize, Serialize};

use crate::db::entities::{
    ClubGame, ContactMessage, Game, GameSummary, Listing, ListingStatus, Reservation,
    ReviewDecision, SellerListing,
};
use crate::seat_map::SeatingConfig;

#[cfg(feature = "ssr")]
use crate::config::AppConfig;
#[cfg(feature = "ssr")]
use crate::db::repository::{
    check_reservation, check_review, get_club_games, get_seed_listings, search_games,
    AvailabilityFilter,
};
#[cfg(feature = "ssr")]
use std::time::Duration;

#[cfg(feature = "ssr")]
const PURCHASE_DELAY: Duration = Duration::from_millis(2000);
#[cfg(feature = "ssr")]
const VERIFY_DELAY: Duration = Duration::from_millis(2000);
#[cfg(feature = "ssr")]
const SUBMIT_DELAY: Duration = Duration::from_millis(2000);
#[cfg(feature = "ssr")]
const ADMIN_LOGIN_DELAY: Duration = Duration::from_millis(1500);
#[cfg(feature = "ssr")]
const REVIEW_DELAY: Duration = Duration::from_millis(1000);

/// Stands in for the round trip a real backend would take.
#[cfg(feature = "ssr")]
async fn simulate_latency(base: Duration) {
    let delay = AppConfig::global().latency(base);
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(feature = "ssr")]
fn market_error(e: crate::error::MarketError) -> ServerFnError {
    ServerFnError::new(e.to_string())
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GameDetail {
    pub game: Game,
    /// Ticket ids already sold before this visit.
    pub pre_booked: Vec<i32>,
}

impl GameDetail {
    /// `None` when no game has this id.
    pub fn load(game_id: i32, seating: &SeatingConfig) -> Option<GameDetail> {
        let game = crate::db::repository::get_game_by_id(game_id).ok()?;
        Some(GameDetail {
            game: game.clone(),
            pre_booked: seating.pre_booked.iter().copied().collect(),
        })
    }
}

#[server]
pub async fn fetch_games(search: String, filter: String) -> Result<Vec<GameSummary>, ServerFnError> {
    Ok(search_games(&search, AvailabilityFilter::from_value(&filter)))
}

#[server]
pub async fn fetch_upcoming_games(limit: usize) -> Result<Vec<GameSummary>, ServerFnError> {
    Ok(crate::db::repository::get_upcoming_games(limit))
}

/// An unknown id is `Ok(None)` so callers can tell it apart from a failed request.
#[server]
pub async fn fetch_game_detail(game_id: i32) -> Result<Option<GameDetail>, ServerFnError> {
    let detail = GameDetail::load(game_id, &AppConfig::global().seating);
    if detail.is_none() {
        tracing::debug!(game_id, "game detail requested for unknown game");
    }
    Ok(detail)
}

#[server]
pub async fn reserve_ticket(game_id: i32, ticket_id: i32) -> Result<Reservation, ServerFnError> {
    simulate_latency(PURCHASE_DELAY).await;

    let reservation =
        check_reservation(game_id, ticket_id, &AppConfig::global().seating).map_err(|e| {
            tracing::warn!(game_id, ticket_id, error = %e, "reservation rejected");
            market_error(e)
        })?;

    tracing::info!(game_id, ticket_id, price = reservation.price, "ticket reserved");
    Ok(reservation)
}

#[server]
pub async fn verify_season_ticket(email: String, password: String) -> Result<bool, ServerFnError> {
    use crate::utils::auth::is_season_ticket_holder;

    simulate_latency(VERIFY_DELAY).await;

    let granted = is_season_ticket_holder(&email, &password);
    tracing::info!(granted, "season ticket verification");
    Ok(granted)
}

#[server]
pub async fn fetch_club_games() -> Result<Vec<ClubGame>, ServerFnError> {
    Ok(get_club_games().to_vec())
}

/// Returns how many tickets were put up for approval.
#[server]
pub async fn submit_listing(listing: SellerListing) -> Result<usize, ServerFnError> {
    listing.validate().map_err(market_error)?;
    simulate_latency(SUBMIT_DELAY).await;

    let known = get_club_games();
    if let Some(unknown) = listing
        .game_ids
        .iter()
        .find(|id| !known.iter().any(|game| game.id == **id))
    {
        return Err(market_error(crate::error::MarketError::GameNotFound(*unknown)));
    }

    tracing::info!(count = listing.game_ids.len(), "listing submitted for approval");
    Ok(listing.game_ids.len())
}

/// Returns the reference id shown on the receipt.
#[server]
pub async fn submit_contact_message(message: ContactMessage) -> Result<String, ServerFnError> {
    use crate::utils::format::reference_id;

    message.validate().map_err(market_error)?;
    simulate_latency(SUBMIT_DELAY).await;

    let seed = chrono::Utc::now().timestamp_millis().unsigned_abs();
    let reference = reference_id(seed);
    tracing::info!(
        %reference,
        category = message.category.map(|c| c.value()).unwrap_or("none"),
        "contact message received"
    );
    Ok(reference)
}

#[server]
pub async fn admin_login(email: String, password: String) -> Result<(), ServerFnError> {
    use crate::utils::auth::check_admin_credentials;

    simulate_latency(ADMIN_LOGIN_DELAY).await;

    check_admin_credentials(&email, &password).map_err(|e| {
        tracing::warn!("admin login rejected");
        market_error(e)
    })
}

#[server]
pub async fn fetch_listings() -> Result<Vec<Listing>, ServerFnError> {
    Ok(get_seed_listings())
}

/// Review state is kept by the caller, so the current status travels with the request.
#[server]
pub async fn review_listing(
    listing_id: i32,
    current: ListingStatus,
    decision: ReviewDecision,
) -> Result<ListingStatus, ServerFnError> {
    simulate_latency(REVIEW_DELAY).await;

    let next = check_review(listing_id, current, decision).map_err(market_error)?;
    tracing::info!(listing_id, status = next.as_str(), "listing reviewed");
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_detail_carries_the_pre_booked_ids() {
        let seating = SeatingConfig::with_pre_booked([5, 2]);
        let detail = GameDetail::load(1, &seating).unwrap();
        assert_eq!(detail.game.id, 1);
        assert_eq!(detail.pre_booked, vec![2, 5]);
    }

    #[test]
    fn game_detail_for_unknown_game_is_none() {
        assert_eq!(GameDetail::load(404, &SeatingConfig::default()), None);
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::entities::ListingStatus;

#[derive(Debug, Error, Clone, PartialEq, Deserialize, Serialize)]
pub enum MarketError {
    #[error("Game {0} does not exist")]
    GameNotFound(i32),
    #[error("Ticket {ticket_id} is not listed for game {game_id}")]
    TicketNotFound { game_id: i32, ticket_id: i32 },
    #[error("Ticket {0} has already been sold")]
    TicketUnavailable(i32),
    #[error("Listing {0} does not exist")]
    ListingNotFound(i32),
    #[error("Listing is already {}", .0.as_str())]
    ListingNotPending(ListingStatus),
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please select at least one game to list.")]
    NoGamesSelected,
    #[error("Invalid admin credentials")]
    InvalidCredentials,
}

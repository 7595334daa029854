use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MarketError;

/// Row label used for standing / general admission tickets.
pub const STANDING_ROW: &str = "-";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Ticket {
    pub id: i32,
    pub section: String,
    pub row: String,
    pub seat: String,
    pub price: i32,
    pub seller: String,
    pub seat_code: String,
}

impl Ticket {
    pub fn is_standing(&self) -> bool {
        self.row == STANDING_ROW
    }

    /// "Row 12, Seat 15" for seated tickets, "General Admission" for standing ones.
    pub fn location_label(&self) -> String {
        if self.is_standing() {
            format!("{} Admission", self.seat)
        } else {
            format!("Row {}, Seat {}", self.row, self.seat)
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Game {
    pub id: i32,
    pub home_team: String,
    pub away_team: String,
    pub date: NaiveDate,
    pub kickoff: String,
    pub stadium: String,
    pub has_tickets: bool,
    pub ticket_count: i32,
    pub price_range: String,
    pub description: String,
    pub tickets: Vec<Ticket>,
}

impl Game {
    pub fn title(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }
}

/// Game card data without the ticket inventory.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GameSummary {
    pub id: i32,
    pub home_team: String,
    pub away_team: String,
    pub date: NaiveDate,
    pub kickoff: String,
    pub stadium: String,
    pub has_tickets: bool,
    pub ticket_count: i32,
    pub price_range: String,
}

impl From<&Game> for GameSummary {
    fn from(game: &Game) -> Self {
        GameSummary {
            id: game.id,
            home_team: game.home_team.clone(),
            away_team: game.away_team.clone(),
            date: game.date,
            kickoff: game.kickoff.clone(),
            stadium: game.stadium.clone(),
            has_tickets: game.has_tickets,
            ticket_count: game.ticket_count,
            price_range: game.price_range.clone(),
        }
    }
}

/// A fixture on the seller's club schedule.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClubGame {
    pub id: i32,
    pub home_team: String,
    pub away_team: String,
    pub date: NaiveDate,
    pub kickoff: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Pending,
    Approved,
    Rejected,
    Sold,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Pending => "pending",
            ListingStatus::Approved => "approved",
            ListingStatus::Rejected => "rejected",
            ListingStatus::Sold => "sold",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ListingStatus::Pending => "status-badge pending",
            ListingStatus::Approved => "status-badge approved",
            ListingStatus::Rejected => "status-badge rejected",
            ListingStatus::Sold => "status-badge sold",
        }
    }

    /// Only pending listings can be reviewed.
    pub fn review(self, decision: ReviewDecision) -> Result<ListingStatus, MarketError> {
        match (self, decision) {
            (ListingStatus::Pending, ReviewDecision::Approve) => Ok(ListingStatus::Approved),
            (ListingStatus::Pending, ReviewDecision::Reject) => Ok(ListingStatus::Rejected),
            (status, _) => Err(MarketError::ListingNotPending(status)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Listing {
    pub id: i32,
    pub seller: String,
    pub game: String,
    pub date: NaiveDate,
    pub section: String,
    pub price: i32,
    pub status: ListingStatus,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct ListingStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub sold: usize,
}

impl From<&[Listing]> for ListingStats {
    fn from(listings: &[Listing]) -> Self {
        let count = |status: ListingStatus| listings.iter().filter(|l| l.status == status).count();
        ListingStats {
            total: listings.len(),
            pending: count(ListingStatus::Pending),
            approved: count(ListingStatus::Approved),
            sold: count(ListingStatus::Sold),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Reservation {
    pub game_id: i32,
    pub ticket_id: i32,
    pub price: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct BankDetails {
    pub iban: String,
    pub account_holder: String,
    pub address: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SellerListing {
    pub email: String,
    pub game_ids: Vec<i32>,
    pub bank: BankDetails,
}

impl SellerListing {
    pub fn validate(&self) -> Result<(), MarketError> {
        if self.game_ids.is_empty() {
            return Err(MarketError::NoGamesSelected);
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactCategory {
    #[default]
    General,
    Buying,
    Selling,
    Technical,
    Payment,
    Account,
}

impl ContactCategory {
    pub const ALL: [ContactCategory; 6] = [
        ContactCategory::General,
        ContactCategory::Buying,
        ContactCategory::Selling,
        ContactCategory::Technical,
        ContactCategory::Payment,
        ContactCategory::Account,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            ContactCategory::General => "general",
            ContactCategory::Buying => "buying",
            ContactCategory::Selling => "selling",
            ContactCategory::Technical => "technical",
            ContactCategory::Payment => "payment",
            ContactCategory::Account => "account",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactCategory::General => "General Inquiry",
            ContactCategory::Buying => "Buying Tickets",
            ContactCategory::Selling => "Selling Tickets",
            ContactCategory::Technical => "Technical Support",
            ContactCategory::Payment => "Payment Issues",
            ContactCategory::Account => "Account Problems",
        }
    }

    /// Unknown or empty select values are treated as no category.
    pub fn from_value(value: &str) -> Option<ContactCategory> {
        ContactCategory::ALL.into_iter().find(|c| c.value() == value)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub category: Option<ContactCategory>,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), MarketError> {
        let missing = [&self.name, &self.email, &self.message]
            .iter()
            .any(|field| field.trim().is_empty());
        if missing {
            return Err(MarketError::MissingFields);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: i32, status: ListingStatus) -> Listing {
        Listing {
            id,
            seller: format!("Club Member #{id}"),
            game: "FC Zurich vs FC Basel".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            section: "Tribune A".to_string(),
            price: 85,
            status,
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn only_pending_listings_can_be_reviewed() {
        assert_eq!(
            ListingStatus::Pending.review(ReviewDecision::Approve).unwrap(),
            ListingStatus::Approved
        );
        assert_eq!(
            ListingStatus::Pending.review(ReviewDecision::Reject).unwrap(),
            ListingStatus::Rejected
        );

        for status in [ListingStatus::Approved, ListingStatus::Rejected, ListingStatus::Sold] {
            assert!(matches!(
                status.review(ReviewDecision::Approve),
                Err(MarketError::ListingNotPending(s)) if s == status
            ));
        }
    }

    #[test]
    fn listing_status_uses_lowercase_on_the_wire() {
        let json = serde_json::to_string(&ListingStatus::Approved).unwrap();
        assert_eq!(json, "\"approved\"");
        let parsed: ListingStatus = serde_json::from_str("\"sold\"").unwrap();
        assert_eq!(parsed, ListingStatus::Sold);
    }

    #[test]
    fn stats_count_each_status() {
        let listings = vec![
            listing(1, ListingStatus::Pending),
            listing(2, ListingStatus::Approved),
            listing(3, ListingStatus::Sold),
            listing(4, ListingStatus::Pending),
            listing(5, ListingStatus::Rejected),
        ];
        let stats = ListingStats::from(listings.as_slice());
        assert_eq!(
            stats,
            ListingStats {
                total: 5,
                pending: 2,
                approved: 1,
                sold: 1,
            }
        );
    }

    #[test]
    fn contact_message_requires_name_email_and_message() {
        let mut message = ContactMessage {
            name: "Max Mustermann".to_string(),
            email: "max@example.ch".to_string(),
            message: "Where is my ticket?".to_string(),
            ..Default::default()
        };
        assert!(message.validate().is_ok());

        message.email = "   ".to_string();
        assert!(matches!(message.validate(), Err(MarketError::MissingFields)));
    }

    #[test]
    fn seller_listing_needs_a_game() {
        let mut listing = SellerListing::default();
        assert!(matches!(listing.validate(), Err(MarketError::NoGamesSelected)));
        listing.game_ids.push(3);
        assert!(listing.validate().is_ok());
    }

    #[test]
    fn contact_category_round_trips_select_values() {
        for category in ContactCategory::ALL {
            assert_eq!(ContactCategory::from_value(category.value()), Some(category));
        }
        assert_eq!(ContactCategory::from_value(""), None);
    }

    #[test]
    fn standing_tickets_describe_admission() {
        let mut ticket = Ticket {
            id: 3,
            section: "Stehplatz".to_string(),
            row: STANDING_ROW.to_string(),
            seat: "General".to_string(),
            price: 45,
            seller: "Club Member #3456".to_string(),
            seat_code: "ST-001".to_string(),
        };
        assert!(ticket.is_standing());
        assert_eq!(ticket.location_label(), "General Admission");

        ticket.row = "12".to_string();
        ticket.seat = "15".to_string();
        assert_eq!(ticket.location_label(), "Row 12, Seat 15");
    }
}

use super::entities::{
    ClubGame, Game, GameSummary, Listing, ListingStatus, Reservation, ReviewDecision, Ticket,
};
use crate::error::MarketError;
use crate::seat_map::SeatingConfig;
use chrono::{DateTime, NaiveDate, Utc};
use std::sync::OnceLock;

static GAMES: OnceLock<Vec<Game>> = OnceLock::new();
static CLUB_GAMES: OnceLock<Vec<ClubGame>> = OnceLock::new();

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvailabilityFilter {
    #[default]
    All,
    Available,
    Unavailable,
}

impl AvailabilityFilter {
    pub fn value(&self) -> &'static str {
        match self {
            AvailabilityFilter::All => "all",
            AvailabilityFilter::Available => "available",
            AvailabilityFilter::Unavailable => "unavailable",
        }
    }

    pub fn from_value(value: &str) -> AvailabilityFilter {
        match value {
            "available" => AvailabilityFilter::Available,
            "unavailable" => AvailabilityFilter::Unavailable,
            _ => AvailabilityFilter::All,
        }
    }

    fn matches(&self, game: &Game) -> bool {
        match self {
            AvailabilityFilter::All => true,
            AvailabilityFilter::Available => game.has_tickets,
            AvailabilityFilter::Unavailable => !game.has_tickets,
        }
    }
}

pub fn get_games() -> &'static [Game] {
    GAMES.get_or_init(seed_games)
}

pub fn get_upcoming_games(limit: usize) -> Vec<GameSummary> {
    get_games().iter().take(limit).map(GameSummary::from).collect()
}

pub fn get_game_by_id(game_id: i32) -> Result<&'static Game, MarketError> {
    get_games()
        .iter()
        .find(|game| game.id == game_id)
        .ok_or(MarketError::GameNotFound(game_id))
}

pub fn get_ticket(game_id: i32, ticket_id: i32) -> Result<&'static Ticket, MarketError> {
    get_game_by_id(game_id)?
        .tickets
        .iter()
        .find(|ticket| ticket.id == ticket_id)
        .ok_or(MarketError::TicketNotFound { game_id, ticket_id })
}

/// Case-insensitive match on either team or the stadium, combined with the availability filter.
pub fn search_games(term: &str, filter: AvailabilityFilter) -> Vec<GameSummary> {
    let needle = term.trim().to_lowercase();
    get_games()
        .iter()
        .filter(|game| {
            needle.is_empty()
                || game.home_team.to_lowercase().contains(&needle)
                || game.away_team.to_lowercase().contains(&needle)
                || game.stadium.to_lowercase().contains(&needle)
        })
        .filter(|game| filter.matches(game))
        .map(GameSummary::from)
        .collect()
}

pub fn get_club_games() -> &'static [ClubGame] {
    CLUB_GAMES.get_or_init(|| {
        [
            (1, "FC Basel", (2025, 1, 15), "18:30"),
            (2, "Young Boys", (2025, 1, 25), "20:00"),
            (3, "FC St. Gallen", (2025, 2, 5), "18:30"),
            (4, "Servette FC", (2025, 2, 15), "16:00"),
            (5, "FC Lugano", (2025, 2, 25), "19:30"),
        ]
        .into_iter()
        .map(|(id, away_team, (y, m, d), kickoff)| ClubGame {
            id,
            home_team: "FC Zurich".to_string(),
            away_team: away_team.to_string(),
            date: date(y, m, d),
            kickoff: kickoff.to_string(),
        })
        .collect()
    })
}

/// A ticket can be reserved if it exists for the game and was not sold before the session.
pub fn check_reservation(
    game_id: i32,
    ticket_id: i32,
    seating: &SeatingConfig,
) -> Result<Reservation, MarketError> {
    let ticket = get_ticket(game_id, ticket_id)?;
    if seating.pre_booked.contains(&ticket_id) {
        return Err(MarketError::TicketUnavailable(ticket_id));
    }
    Ok(Reservation {
        game_id,
        ticket_id,
        price: ticket.price,
    })
}

/// Applies `decision` to a seed listing whose status the caller reports as `current`.
pub fn check_review(
    listing_id: i32,
    current: ListingStatus,
    decision: ReviewDecision,
) -> Result<ListingStatus, MarketError> {
    if !get_seed_listings().iter().any(|l| l.id == listing_id) {
        return Err(MarketError::ListingNotFound(listing_id));
    }
    current.review(decision)
}

/// Listings the admin panel starts with; review decisions live in the admin's session only.
pub fn get_seed_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: 1,
            seller: "Club Member #2847".to_string(),
            game: "FC Zurich vs FC Basel".to_string(),
            date: date(2025, 1, 15),
            section: "Tribune A".to_string(),
            price: 85,
            status: ListingStatus::Pending,
            submitted_at: timestamp("2025-01-10T10:00:00Z"),
        },
        Listing {
            id: 2,
            seller: "Club Member #1923".to_string(),
            game: "FC Zurich vs Young Boys".to_string(),
            date: date(2025, 1, 25),
            section: "Tribune B".to_string(),
            price: 65,
            status: ListingStatus::Approved,
            submitted_at: timestamp("2025-01-09T14:30:00Z"),
        },
        Listing {
            id: 3,
            seller: "Club Member #3456".to_string(),
            game: "FC Zurich vs FC Basel".to_string(),
            date: date(2025, 1, 15),
            section: "Stehplatz".to_string(),
            price: 45,
            status: ListingStatus::Sold,
            submitted_at: timestamp("2025-01-08T16:45:00Z"),
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn timestamp(raw: &str) -> DateTime<Utc> {
    raw.parse().unwrap_or_default()
}

fn ticket(
    id: i32,
    section: &str,
    row: &str,
    seat: &str,
    price: i32,
    member: u32,
    seat_code: &str,
) -> Ticket {
    Ticket {
        id,
        section: section.to_string(),
        row: row.to_string(),
        seat: seat.to_string(),
        price,
        seller: format!("Club Member #{member}"),
        seat_code: seat_code.to_string(),
    }
}

fn seed_games() -> Vec<Game> {
    vec![
        Game {
            id: 1,
            home_team: "FC Zurich".to_string(),
            away_team: "FC Basel".to_string(),
            date: date(2025, 1, 15),
            kickoff: "18:30".to_string(),
            stadium: "Letzigrund Stadium".to_string(),
            has_tickets: true,
            ticket_count: 12,
            price_range: "CHF 45-85".to_string(),
            description: "Classic Swiss derby between two powerhouse teams".to_string(),
            tickets: vec![
                ticket(1, "Tribune A", "12", "15", 85, 2847, "A12-15"),
                ticket(2, "Tribune B", "8", "22", 65, 1923, "B8-22"),
                ticket(3, "Stehplatz", "-", "General", 45, 3456, "ST-001"),
                ticket(4, "Tribune A", "15", "8", 85, 7821, "A15-8"),
                ticket(5, "Tribune C", "5", "12", 75, 4567, "C5-12"),
            ],
        },
        Game {
            id: 2,
            home_team: "Young Boys".to_string(),
            away_team: "FC St. Gallen".to_string(),
            date: date(2025, 1, 18),
            kickoff: "20:00".to_string(),
            stadium: "Wankdorf Stadium".to_string(),
            has_tickets: false,
            ticket_count: 0,
            price_range: "CHF 50-90".to_string(),
            description: String::new(),
            tickets: Vec::new(),
        },
        Game {
            id: 3,
            home_team: "FC Lugano".to_string(),
            away_team: "Grasshopper Club".to_string(),
            date: date(2025, 1, 22),
            kickoff: "16:00".to_string(),
            stadium: "Cornaredo Stadium".to_string(),
            has_tickets: true,
            ticket_count: 8,
            price_range: "CHF 35-65".to_string(),
            description: "Exciting match between two competitive teams".to_string(),
            tickets: vec![
                ticket(1, "VIP", "1", "5", 65, 1234, "VIP1-5"),
                ticket(2, "Tribune A", "10", "12", 55, 5678, "A10-12"),
                ticket(3, "Tribune B", "7", "18", 45, 9012, "B7-18"),
                ticket(4, "Tribune C", "12", "6", 40, 3456, "C12-6"),
                ticket(5, "Stehplatz", "-", "General", 35, 7890, "ST-002"),
            ],
        },
        Game {
            id: 4,
            home_team: "FC Sion".to_string(),
            away_team: "Servette FC".to_string(),
            date: date(2025, 1, 25),
            kickoff: "19:30".to_string(),
            stadium: "Stade Tourbillon".to_string(),
            has_tickets: true,
            ticket_count: 5,
            price_range: "CHF 40-75".to_string(),
            description: "Mountain derby with passionate fans".to_string(),
            tickets: vec![
                ticket(1, "VIP", "2", "8", 75, 2468, "VIP2-8"),
                ticket(2, "Tribune A", "6", "14", 60, 1357, "A6-14"),
                ticket(3, "Tribune B", "11", "20", 50, 9753, "B11-20"),
                ticket(4, "Tribune C", "8", "9", 45, 8642, "C8-9"),
                ticket(5, "Stehplatz", "-", "General", 40, 5319, "ST-003"),
            ],
        },
        Game {
            id: 5,
            home_team: "FC Thun".to_string(),
            away_team: "FC Aarau".to_string(),
            date: date(2025, 1, 28),
            kickoff: "15:00".to_string(),
            stadium: "Arena Thun".to_string(),
            has_tickets: false,
            ticket_count: 0,
            price_range: "CHF 30-55".to_string(),
            description: String::new(),
            tickets: Vec::new(),
        },
        Game {
            id: 6,
            home_team: "FC Winterthur".to_string(),
            away_team: "FC Schaffhausen".to_string(),
            date: date(2025, 2, 1),
            kickoff: "17:00".to_string(),
            stadium: "Schützenwiese".to_string(),
            has_tickets: true,
            ticket_count: 15,
            price_range: "CHF 25-45".to_string(),
            description: "Local rivalry with great atmosphere".to_string(),
            tickets: vec![
                ticket(1, "VIP", "1", "10", 45, 1111, "VIP1-10"),
                ticket(2, "Tribune A", "5", "7", 35, 2222, "A5-7"),
                ticket(3, "Tribune A", "8", "15", 35, 3333, "A8-15"),
                ticket(4, "Tribune B", "4", "11", 30, 4444, "B4-11"),
                ticket(5, "Tribune B", "9", "3", 30, 5555, "B9-3"),
                ticket(6, "Tribune C", "6", "13", 28, 6666, "C6-13"),
                ticket(7, "Tribune C", "10", "8", 28, 7777, "C10-8"),
                ticket(8, "Stehplatz", "-", "General", 25, 8888, "ST-004"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_ids_are_unique_per_game() {
        for game in get_games() {
            let mut ids: Vec<i32> = game.tickets.iter().map(|t| t.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), game.tickets.len(), "duplicate ticket id in game {}", game.id);
        }
    }

    #[test]
    fn search_matches_teams_and_stadium_ignoring_case() {
        let ids = |games: Vec<GameSummary>| games.into_iter().map(|g| g.id).collect::<Vec<_>>();

        assert_eq!(ids(search_games("basel", AvailabilityFilter::All)), vec![1]);
        assert_eq!(ids(search_games("WANKDORF", AvailabilityFilter::All)), vec![2]);
        assert_eq!(ids(search_games("  fc s", AvailabilityFilter::All)), vec![2, 4, 6]);
        assert_eq!(search_games("", AvailabilityFilter::All).len(), 6);
    }

    #[test]
    fn availability_filter_splits_games() {
        let available = search_games("", AvailabilityFilter::Available);
        let unavailable = search_games("", AvailabilityFilter::Unavailable);
        assert!(available.iter().all(|g| g.has_tickets));
        assert!(unavailable.iter().all(|g| !g.has_tickets));
        assert_eq!(available.len() + unavailable.len(), get_games().len());
        assert_eq!(
            unavailable.iter().map(|g| g.id).collect::<Vec<_>>(),
            vec![2, 5]
        );
    }

    #[test]
    fn unknown_filter_value_means_all() {
        assert_eq!(AvailabilityFilter::from_value("bogus"), AvailabilityFilter::All);
        assert_eq!(
            AvailabilityFilter::from_value(AvailabilityFilter::Unavailable.value()),
            AvailabilityFilter::Unavailable
        );
    }

    #[test]
    fn lookups_report_missing_games_and_tickets() {
        assert!(matches!(get_game_by_id(42), Err(MarketError::GameNotFound(42))));
        assert!(matches!(
            get_ticket(1, 99),
            Err(MarketError::TicketNotFound { game_id: 1, ticket_id: 99 })
        ));
        assert_eq!(get_ticket(6, 8).unwrap().seat_code, "ST-004");
    }

    #[test]
    fn upcoming_games_are_the_first_on_the_schedule() {
        let upcoming = get_upcoming_games(4);
        assert_eq!(upcoming.iter().map(|g| g.id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn seed_listings_have_parsed_timestamps() {
        let listings = get_seed_listings();
        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0].submitted_at.to_rfc3339(), "2025-01-10T10:00:00+00:00");
    }

    #[test]
    fn pre_booked_tickets_cannot_be_reserved() {
        let seating = SeatingConfig::with_pre_booked([2, 5]);
        assert_eq!(
            check_reservation(1, 2, &seating),
            Err(MarketError::TicketUnavailable(2))
        );
    }

    #[test]
    fn unknown_tickets_and_games_cannot_be_reserved() {
        let seating = SeatingConfig::with_pre_booked([]);
        assert_eq!(
            check_reservation(1, 99, &seating),
            Err(MarketError::TicketNotFound { game_id: 1, ticket_id: 99 })
        );
        assert_eq!(
            check_reservation(42, 1, &seating),
            Err(MarketError::GameNotFound(42))
        );
    }

    #[test]
    fn free_ticket_reservation_carries_its_price() {
        let seating = SeatingConfig::default();
        assert_eq!(
            check_reservation(1, 4, &seating),
            Ok(Reservation { game_id: 1, ticket_id: 4, price: 85 })
        );
    }

    #[test]
    fn review_rejects_unknown_listings_and_settled_ones() {
        assert_eq!(
            check_review(1, ListingStatus::Pending, ReviewDecision::Approve),
            Ok(ListingStatus::Approved)
        );
        assert_eq!(
            check_review(9, ListingStatus::Pending, ReviewDecision::Approve),
            Err(MarketError::ListingNotFound(9))
        );
        assert_eq!(
            check_review(3, ListingStatus::Sold, ReviewDecision::Reject),
            Err(MarketError::ListingNotPending(ListingStatus::Sold))
        );
    }
}

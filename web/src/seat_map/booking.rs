use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Ticket ids treated as sold before the viewing session starts.
pub const DEFAULT_PRE_BOOKED: [i32; 10] = [2, 5, 8, 11, 15, 18, 22, 25, 28, 31];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SeatingConfig {
    pub pre_booked: BTreeSet<i32>,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        SeatingConfig {
            pre_booked: DEFAULT_PRE_BOOKED.into_iter().collect(),
        }
    }
}

impl SeatingConfig {
    pub fn with_pre_booked(ids: impl IntoIterator<Item = i32>) -> Self {
        SeatingConfig {
            pre_booked: ids.into_iter().collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeatStatus {
    Available,
    /// Sold before the session started.
    UnavailablePresold,
    /// Booked during this session.
    UnavailableBooked,
}

impl SeatStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, SeatStatus::Available)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SeatStatus::Available => "seat seat--available",
            SeatStatus::UnavailablePresold => "seat seat--presold",
            SeatStatus::UnavailableBooked => "seat seat--booked",
        }
    }

    pub fn legend(&self) -> &'static str {
        match self {
            SeatStatus::Available => "Available",
            SeatStatus::UnavailablePresold => "Already Sold",
            SeatStatus::UnavailableBooked => "Just Booked",
        }
    }
}

/// Unavailable ticket ids for one viewing session.
///
/// The pre-booked part is fixed at construction. The session part only grows:
/// there is no way to release a booking.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingState {
    pre_booked: BTreeSet<i32>,
    session_booked: BTreeSet<i32>,
}

impl BookingState {
    pub fn new(config: &SeatingConfig) -> Self {
        BookingState {
            pre_booked: config.pre_booked.clone(),
            session_booked: BTreeSet::new(),
        }
    }

    pub fn with_session(config: &SeatingConfig, booked: impl IntoIterator<Item = i32>) -> Self {
        let mut state = BookingState::new(config);
        state.session_booked.extend(booked);
        state
    }

    pub fn status_of(&self, ticket_id: i32) -> SeatStatus {
        if self.pre_booked.contains(&ticket_id) {
            SeatStatus::UnavailablePresold
        } else if self.session_booked.contains(&ticket_id) {
            SeatStatus::UnavailableBooked
        } else {
            SeatStatus::Available
        }
    }

    pub fn is_available(&self, ticket_id: i32) -> bool {
        self.status_of(ticket_id).is_available()
    }

    /// Returns false when the ticket was already unavailable.
    pub fn book(&mut self, ticket_id: i32) -> bool {
        if !self.is_available(ticket_id) {
            return false;
        }
        self.session_booked.insert(ticket_id)
    }

    pub fn session_booked(&self) -> impl Iterator<Item = i32> + '_ {
        self.session_booked.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pre_booked_always_wins() {
        let config = SeatingConfig::with_pre_booked([2, 5, 8]);
        let state = BookingState::with_session(&config, [5, 7]);

        assert_eq!(state.status_of(5), SeatStatus::UnavailablePresold);
        assert_eq!(state.status_of(7), SeatStatus::UnavailableBooked);
        assert_eq!(state.status_of(9), SeatStatus::Available);
    }

    #[test]
    fn booking_only_grows() {
        let config = SeatingConfig::with_pre_booked([2]);
        let mut state = BookingState::new(&config);

        assert!(state.book(4));
        assert!(!state.book(4));
        assert!(!state.book(2));
        assert_eq!(state.session_booked().collect::<Vec<_>>(), vec![4]);
        assert_eq!(state.status_of(2), SeatStatus::UnavailablePresold);
    }

    #[test]
    fn default_config_matches_simulated_sales() {
        let state = BookingState::new(&SeatingConfig::default());
        for id in DEFAULT_PRE_BOOKED {
            assert_eq!(state.status_of(id), SeatStatus::UnavailablePresold);
        }
        assert!(state.is_available(1));
    }
}

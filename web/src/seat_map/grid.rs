use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use super::booking::{BookingState, SeatStatus};
use super::palette::SectionPalette;
use crate::db::entities::Ticket;

/// Sort key for row and seat labels. Numeric labels come first in numeric
/// order; anything that does not parse as an integer sorts after them by text.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum LabelKey<'a> {
    Numbered(i64),
    Unnumbered(&'a str),
}

impl<'a> LabelKey<'a> {
    fn parse(label: &'a str) -> Self {
        match label.trim().parse::<i64>() {
            Ok(n) => LabelKey::Numbered(n),
            Err(_) => LabelKey::Unnumbered(label),
        }
    }
}

fn compare_labels(a: &str, b: &str) -> Ordering {
    LabelKey::parse(a)
        .cmp(&LabelKey::parse(b))
        .then_with(|| a.cmp(b))
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SeatCell {
    pub ticket: Ticket,
    pub status: SeatStatus,
}

impl SeatCell {
    pub fn title(&self) -> String {
        match self.status {
            SeatStatus::Available => {
                format!("{} - CHF {}", self.ticket.location_label(), self.ticket.price)
            }
            SeatStatus::UnavailablePresold => "Already sold".to_string(),
            SeatStatus::UnavailableBooked => "Just booked".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RowLine {
    /// Row label, or the seat label for a standing pseudo-row.
    pub label: String,
    pub seats: Vec<SeatCell>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SectionBlock {
    pub name: String,
    pub palette: SectionPalette,
    pub rows: Vec<RowLine>,
    pub standing: Vec<RowLine>,
}

impl SectionBlock {
    pub fn cells(&self) -> impl Iterator<Item = &SeatCell> {
        self.rows
            .iter()
            .chain(self.standing.iter())
            .flat_map(|row| row.seats.iter())
    }

    pub fn available_count(&self) -> usize {
        self.cells().filter(|cell| cell.status.is_available()).count()
    }

    /// Available cells in the numbered rows only.
    pub fn seated_available_count(&self) -> usize {
        count_available(&self.rows)
    }

    /// Available cells in the standing pseudo-rows only.
    pub fn standing_available_count(&self) -> usize {
        count_available(&self.standing)
    }

    pub fn has_seats(&self) -> bool {
        !self.rows.is_empty()
    }

    pub fn has_standing(&self) -> bool {
        !self.standing.is_empty()
    }
}

fn count_available(rows: &[RowLine]) -> usize {
    rows.iter()
        .flat_map(|row| row.seats.iter())
        .filter(|cell| cell.status.is_available())
        .count()
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SeatGrid {
    /// In order of first appearance in the ticket list.
    pub sections: Vec<SectionBlock>,
}

impl SeatGrid {
    pub fn available_count(&self) -> usize {
        self.sections.iter().map(SectionBlock::available_count).sum()
    }

    pub fn seated_sections(&self) -> impl Iterator<Item = &SectionBlock> {
        self.sections.iter().filter(|section| section.has_seats())
    }

    pub fn standing_sections(&self) -> impl Iterator<Item = &SectionBlock> {
        self.sections.iter().filter(|section| section.has_standing())
    }

    /// Seated sections split around the pitch; the left stand takes the larger half.
    pub fn stands(&self) -> (Vec<&SectionBlock>, Vec<&SectionBlock>) {
        let seated: Vec<&SectionBlock> = self.seated_sections().collect();
        let left_len = seated.len().div_ceil(2);
        let right = seated[left_len..].to_vec();
        let mut left = seated;
        left.truncate(left_len);
        (left, right)
    }

    pub fn find(&self, ticket_id: i32) -> Option<&SeatCell> {
        self.sections
            .iter()
            .flat_map(SectionBlock::cells)
            .find(|cell| cell.ticket.id == ticket_id)
    }
}

/// Groups tickets by section, then row, then seat and tags each with its
/// availability. Standing tickets (row `"-"`) stay in their section but are
/// kept out of the numbered rows: each gets a pseudo-row keyed by its seat label.
pub fn build_seat_grid(tickets: &[Ticket], booking: &BookingState) -> SeatGrid {
    let mut order: Vec<&str> = Vec::new();
    let mut by_section: HashMap<&str, Vec<&Ticket>> = HashMap::new();
    for ticket in tickets {
        let bucket = by_section.entry(ticket.section.as_str()).or_insert_with(|| {
            order.push(ticket.section.as_str());
            Vec::new()
        });
        bucket.push(ticket);
    }

    let sections = order
        .into_iter()
        .map(|name| {
            let section_tickets = by_section.remove(name).unwrap_or_default();
            build_section(name, section_tickets, booking)
        })
        .collect();

    SeatGrid { sections }
}

fn build_section(name: &str, mut tickets: Vec<&Ticket>, booking: &BookingState) -> SectionBlock {
    tickets.sort_by(|a, b| {
        compare_labels(&a.row, &b.row)
            .then_with(|| compare_labels(&a.seat, &b.seat))
            .then_with(|| a.id.cmp(&b.id))
    });

    let (standing, seated): (Vec<&Ticket>, Vec<&Ticket>) =
        tickets.into_iter().partition(|ticket| ticket.is_standing());

    let mut standing = standing;
    standing.sort_by(|a, b| compare_labels(&a.seat, &b.seat).then_with(|| a.id.cmp(&b.id)));

    SectionBlock {
        name: name.to_string(),
        palette: SectionPalette::for_section(name),
        rows: group_rows(seated, |ticket| &ticket.row, booking),
        standing: group_rows(standing, |ticket| &ticket.seat, booking),
    }
}

/// Collapses consecutive tickets sharing a label into rows. Expects sorted input.
fn group_rows<'a>(
    tickets: Vec<&'a Ticket>,
    label_of: impl Fn(&'a Ticket) -> &'a String,
    booking: &BookingState,
) -> Vec<RowLine> {
    let mut rows: Vec<RowLine> = Vec::new();
    for ticket in tickets {
        let label = label_of(ticket);
        let cell = SeatCell {
            ticket: ticket.clone(),
            status: booking.status_of(ticket.id),
        };
        match rows.last_mut() {
            Some(row) if &row.label == label => row.seats.push(cell),
            _ => rows.push(RowLine {
                label: label.clone(),
                seats: vec![cell],
            }),
        }
    }
    rows
}

/// Runs `on_select` for an available seat and reports whether it ran.
/// Unavailable seats are ignored.
pub fn select_seat(cell: &SeatCell, on_select: impl FnOnce(&Ticket)) -> bool {
    if !cell.status.is_available() {
        return false;
    }
    on_select(&cell.ticket);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seat_map::booking::SeatingConfig;

    fn ticket(id: i32, section: &str, row: &str, seat: &str) -> Ticket {
        Ticket {
            id,
            section: section.to_string(),
            row: row.to_string(),
            seat: seat.to_string(),
            price: 50,
            seller: format!("Club Member #{id}"),
            seat_code: format!("{section}-{row}-{seat}"),
        }
    }

    fn no_bookings() -> BookingState {
        BookingState::new(&SeatingConfig::with_pre_booked([]))
    }

    fn seat_ids(row: &RowLine) -> Vec<i32> {
        row.seats.iter().map(|cell| cell.ticket.id).collect()
    }

    #[test]
    fn rows_are_ordered_numerically() {
        let tickets = vec![ticket(1, "A", "2", "5"), ticket(2, "A", "1", "3")];
        let grid = build_seat_grid(&tickets, &no_bookings());

        let section = &grid.sections[0];
        let labels: Vec<&str> = section.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "2"]);
    }

    #[test]
    fn seats_are_ordered_numerically_not_lexically() {
        let tickets = vec![ticket(1, "A", "4", "10"), ticket(2, "A", "4", "2")];
        let grid = build_seat_grid(&tickets, &no_bookings());

        let row = &grid.sections[0].rows[0];
        let seats: Vec<&str> = row.seats.iter().map(|c| c.ticket.seat.as_str()).collect();
        assert_eq!(seats, vec!["2", "10"]);
    }

    #[test]
    fn row_ten_sorts_after_row_nine() {
        let tickets = vec![
            ticket(1, "Tribune B", "10", "1"),
            ticket(2, "Tribune B", "9", "1"),
            ticket(3, "Tribune B", "1", "1"),
        ];
        let grid = build_seat_grid(&tickets, &no_bookings());
        let labels: Vec<&str> = grid.sections[0].rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "9", "10"]);
    }

    #[test]
    fn unparseable_labels_sort_last() {
        let tickets = vec![
            ticket(1, "A", "Box", "1"),
            ticket(2, "A", "3", "x"),
            ticket(3, "A", "3", "7"),
            ticket(4, "A", "12", "1"),
            ticket(5, "A", "Aisle", "1"),
        ];
        let grid = build_seat_grid(&tickets, &no_bookings());
        let section = &grid.sections[0];

        let labels: Vec<&str> = section.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["3", "12", "Aisle", "Box"]);
        assert_eq!(seat_ids(&section.rows[0]), vec![3, 2]);
    }

    #[test]
    fn sections_keep_first_appearance_order_and_unknown_names() {
        let tickets = vec![
            ticket(1, "Family Corner", "1", "1"),
            ticket(2, "Tribune A", "1", "1"),
            ticket(3, "Family Corner", "2", "1"),
            ticket(4, "VIP", "1", "1"),
        ];
        let grid = build_seat_grid(&tickets, &no_bookings());

        let names: Vec<&str> = grid.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Family Corner", "Tribune A", "VIP"]);
        assert_eq!(grid.sections[0].palette, SectionPalette::Neutral);
        assert_eq!(grid.sections[1].palette, SectionPalette::Blue);

        let total: usize = grid.sections.iter().map(|s| s.cells().count()).sum();
        assert_eq!(total, tickets.len());
    }

    #[test]
    fn standing_tickets_get_their_own_pseudo_rows() {
        let tickets = vec![
            ticket(9, "Stehplatz", "-", "General"),
            ticket(1, "Tribune A", "12", "15"),
            ticket(10, "Stehplatz", "-", "General"),
            ticket(11, "Tribune A", "-", "Family"),
        ];
        let grid = build_seat_grid(&tickets, &no_bookings());

        let stehplatz = &grid.sections[0];
        assert!(!stehplatz.has_seats());
        assert_eq!(stehplatz.standing.len(), 1);
        assert_eq!(stehplatz.standing[0].label, "General");
        assert_eq!(seat_ids(&stehplatz.standing[0]), vec![9, 10]);

        let tribune = &grid.sections[1];
        assert_eq!(tribune.rows.len(), 1);
        assert_eq!(tribune.rows[0].label, "12");
        assert_eq!(tribune.standing[0].label, "Family");

        assert_eq!(grid.seated_sections().count(), 1);
        assert_eq!(grid.standing_sections().count(), 2);
    }

    #[test]
    fn mixed_section_counts_split_between_rows_and_standing() {
        let tickets = vec![
            ticket(1, "Tribune A", "12", "15"),
            ticket(2, "Tribune A", "12", "16"),
            ticket(11, "Tribune A", "-", "Family"),
            ticket(12, "Tribune A", "-", "Family"),
        ];
        let booking = BookingState::new(&SeatingConfig::with_pre_booked([2, 12]));
        let grid = build_seat_grid(&tickets, &booking);

        let tribune = &grid.sections[0];
        assert_eq!(tribune.seated_available_count(), 1);
        assert_eq!(tribune.standing_available_count(), 1);
        assert_eq!(
            tribune.seated_available_count() + tribune.standing_available_count(),
            tribune.available_count()
        );
    }

    #[test]
    fn statuses_follow_booking_state() {
        let tickets: Vec<Ticket> = (1..=9).map(|id| ticket(id, "A", "1", &id.to_string())).collect();
        let config = SeatingConfig::with_pre_booked([2, 5, 8]);
        let booking = BookingState::with_session(&config, [5, 6]);
        let grid = build_seat_grid(&tickets, &booking);

        assert_eq!(grid.find(5).unwrap().status, SeatStatus::UnavailablePresold);
        assert_eq!(grid.find(6).unwrap().status, SeatStatus::UnavailableBooked);
        assert_eq!(grid.find(9).unwrap().status, SeatStatus::Available);
    }

    #[test]
    fn section_counts_add_up_to_game_count() {
        let tickets = vec![
            ticket(1, "Tribune A", "1", "1"),
            ticket(2, "Tribune A", "1", "2"),
            ticket(3, "Tribune B", "4", "1"),
            ticket(4, "Stehplatz", "-", "General"),
            ticket(5, "Tribune B", "4", "2"),
        ];
        let config = SeatingConfig::with_pre_booked([2]);
        let booking = BookingState::with_session(&config, [4]);
        let grid = build_seat_grid(&tickets, &booking);

        let counts: Vec<usize> = grid.sections.iter().map(SectionBlock::available_count).collect();
        assert_eq!(counts, vec![1, 2, 0]);

        let expected = tickets.iter().filter(|t| booking.is_available(t.id)).count();
        assert_eq!(grid.available_count(), expected);
        assert_eq!(grid.available_count(), 3);
    }

    #[test]
    fn identical_input_gives_identical_grid() {
        let tickets = vec![
            ticket(3, "Tribune C", "5", "12"),
            ticket(1, "Tribune A", "12", "15"),
            ticket(4, "Tribune A", "15", "8"),
            ticket(2, "Stehplatz", "-", "General"),
        ];
        let booking = BookingState::new(&SeatingConfig::default());

        let first = build_seat_grid(&tickets, &booking);
        let second = build_seat_grid(&tickets, &booking);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn input_order_does_not_change_grouping() {
        let tickets = vec![
            ticket(1, "A", "2", "5"),
            ticket(2, "A", "1", "3"),
            ticket(3, "A", "1", "1"),
        ];
        let mut reversed = tickets.clone();
        reversed.reverse();

        let booking = no_bookings();
        let forward = build_seat_grid(&tickets, &booking);
        let backward = build_seat_grid(&reversed, &booking);
        assert_eq!(forward.sections[0].rows, backward.sections[0].rows);
    }

    #[test]
    fn presold_seat_does_not_fire_callback() {
        let tickets = vec![ticket(5, "A", "1", "1")];
        let booking = BookingState::new(&SeatingConfig::with_pre_booked([2, 5, 8]));
        let grid = build_seat_grid(&tickets, &booking);

        let cell = grid.find(5).unwrap();
        assert_eq!(cell.status, SeatStatus::UnavailablePresold);

        let mut fired = 0;
        assert!(!select_seat(cell, |_| fired += 1));
        assert_eq!(fired, 0);
    }

    #[test]
    fn available_standing_ticket_fires_callback_once() {
        let tickets = vec![ticket(9, "Stehplatz", "-", "General")];
        let grid = build_seat_grid(&tickets, &no_bookings());

        let cell = grid.find(9).unwrap();
        assert_eq!(cell.status, SeatStatus::Available);

        let mut selected = Vec::new();
        assert!(select_seat(cell, |t| selected.push(t.id)));
        assert_eq!(selected, vec![9]);
    }

    #[test]
    fn callback_fires_only_for_available_seats() {
        let tickets: Vec<Ticket> = (1..=6).map(|id| ticket(id, "A", "1", &id.to_string())).collect();
        let booking = BookingState::with_session(&SeatingConfig::with_pre_booked([2]), [4]);
        let grid = build_seat_grid(&tickets, &booking);

        let mut selected = Vec::new();
        for cell in grid.sections.iter().flat_map(SectionBlock::cells) {
            let fired = select_seat(cell, |t| selected.push(t.id));
            assert_eq!(fired, cell.status.is_available());
        }
        assert_eq!(selected, vec![1, 3, 5, 6]);
    }

    #[test]
    fn stands_split_with_larger_left_half() {
        let tickets: Vec<Ticket> = ["A", "B", "C", "D", "E"]
            .iter()
            .enumerate()
            .map(|(i, s)| ticket(i as i32 + 1, s, "1", "1"))
            .chain(std::iter::once(ticket(6, "Stehplatz", "-", "General")))
            .collect();
        let grid = build_seat_grid(&tickets, &no_bookings());

        let (left, right) = grid.stands();
        let names = |side: Vec<&SectionBlock>| side.iter().map(|s| s.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(left), vec!["A", "B", "C"]);
        assert_eq!(names(right), vec!["D", "E"]);
    }

    #[test]
    fn empty_ticket_list_gives_empty_grid() {
        let grid = build_seat_grid(&[], &no_bookings());
        assert!(grid.sections.is_empty());
        assert_eq!(grid.available_count(), 0);
        let (left, right) = grid.stands();
        assert!(left.is_empty() && right.is_empty());
    }
}

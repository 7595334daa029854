//! Seat availability grid: groups a game's tickets into sections, rows and
//! seats and decides which seats can still be picked.

pub mod booking;
pub mod grid;
pub mod palette;

pub use booking::{BookingState, SeatStatus, SeatingConfig};
pub use grid::{build_seat_grid, select_seat, RowLine, SeatCell, SeatGrid, SectionBlock};
pub use palette::SectionPalette;

pub mod error;
pub mod footer;
pub mod game_card;
pub mod loading;
pub mod modal;
pub mod navbar;
pub mod stadium_layout;

// Re-export commonly used types
pub use error::{ErrorView, SuccessView};
pub use game_card::GameCard;
pub use loading::LoadingView;
pub use modal::Modal;
pub use stadium_layout::StadiumLayout;

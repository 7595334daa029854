pub mod admin;
pub mod admin_dashboard;
pub mod admin_login;
pub mod buy;
pub mod contact;
pub mod game_detail;
pub mod home;
pub mod not_found;
pub mod sell;

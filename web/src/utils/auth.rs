//! Mock credential checks. There is no account store; the club allow-list and
//! the admin login are the demo credentials shown on the login forms.

use crate::error::MarketError;

/// Club e-mail addresses that hold a season ticket.
pub const SEASON_TICKET_HOLDERS: [&str; 3] = [
    "member@fczurich.ch",
    "season@fczurich.ch",
    "vip@fczurich.ch",
];

pub const ADMIN_EMAIL: &str = "admin@seatwell.ch";
const ADMIN_PASSWORD: &str = "admin123";

/// E-mail comparison ignores case and surrounding whitespace; any non-empty password passes.
pub fn is_season_ticket_holder(email: &str, password: &str) -> bool {
    let email = email.trim().to_lowercase();
    SEASON_TICKET_HOLDERS.contains(&email.as_str()) && !password.is_empty()
}

pub fn check_admin_credentials(email: &str, password: &str) -> Result<(), MarketError> {
    if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
        Ok(())
    } else {
        Err(MarketError::InvalidCredentials)
    }
}

/// Login buttons stay disabled until both fields have something in them.
pub fn credentials_entered(email: &str, password: &str) -> bool {
    !email.is_empty() && !password.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_ticket_holders_are_matched_case_insensitively() {
        assert!(is_season_ticket_holder("Member@FCZurich.ch", "x"));
        assert!(is_season_ticket_holder(" vip@fczurich.ch ", "secret"));
        assert!(!is_season_ticket_holder("member@fczurich.ch", ""));
        assert!(!is_season_ticket_holder("fan@fcbasel.ch", "secret"));
    }

    #[test]
    fn admin_login_is_exact() {
        assert!(check_admin_credentials("admin@seatwell.ch", "admin123").is_ok());
        assert_eq!(
            check_admin_credentials("Admin@seatwell.ch", "admin123"),
            Err(MarketError::InvalidCredentials)
        );
        assert!(check_admin_credentials("admin@seatwell.ch", "admin").is_err());
    }

    #[test]
    fn both_fields_required_before_submit() {
        assert!(!credentials_entered("", "pw"));
        assert!(!credentials_entered("a@b.ch", ""));
        assert!(credentials_entered("a@b.ch", "pw"));
    }
}

//! Menu entries and parsing of the operator's choice.

pub const MENU: &str = "\
Hotel Management System
1. Initialize System
2. Display Hotel Description
3. Check-in Customer
4. Check-out Customer
5. View Available Rooms
6. View Booked Rooms
7. View Billing System
8. Save Current State
9. Exit
10. Save Snapshot
11. Load Snapshot";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Initialize,
    Display,
    CheckIn,
    CheckOut,
    Available,
    Booked,
    Billing,
    Save,
    Exit,
    SaveSnapshot,
    LoadSnapshot,
}

impl MenuChoice {
    /// Reads a menu number. Surrounding whitespace is ignored; anything
    /// else that is not a listed number is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim().parse::<u32>().ok()? {
            1 => Self::Initialize,
            2 => Self::Display,
            3 => Self::CheckIn,
            4 => Self::CheckOut,
            5 => Self::Available,
            6 => Self::Booked,
            7 => Self::Billing,
            8 => Self::Save,
            9 => Self::Exit,
            10 => Self::SaveSnapshot,
            11 => Self::LoadSnapshot,
            _ => return None,
        };
        Some(choice)
    }
}

/// First whitespace-separated word of a line. Dates are single tokens.
pub fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listed_numbers() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Initialize));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::CheckIn));
        assert_eq!(MenuChoice::parse("9"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("11"), Some(MenuChoice::LoadSnapshot));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(MenuChoice::parse("  7 \n"), Some(MenuChoice::Billing));
    }

    #[test]
    fn test_parse_rejects_unknown_input() {
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("12"), None);
        assert_eq!(MenuChoice::parse("two"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("-1"), None);
    }

    #[test]
    fn test_first_token() {
        assert_eq!(first_token(" 2024-01-01 extra"), "2024-01-01");
        assert_eq!(first_token("   "), "");
    }
}

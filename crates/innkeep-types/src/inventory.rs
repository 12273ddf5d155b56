//! The flat inventory text format.
//!
//! Two shapes share this module:
//!
//! ```text
//! seed (read):   <number> <category> <price>            e.g. 101 Standard 99.5
//! state (write): <number> <category> <price> <0|1>      e.g. 101 Standard 99.5 1
//! ```
//!
//! The seed reader is token based, not line based: any whitespace separates
//! tokens, and records are consecutive triples. It stops at the first token
//! that cannot fill its field, keeping everything read before it.
//!
//! The state writer adds an availability column the seed reader does not
//! understand, so a saved state file is a one-way snapshot. Feeding one back
//! to [`parse_inventory`] reads the first record and stops at the second
//! (its availability flag lands in the number slot and the real number in
//! the category slot, then the category fails as a price).

use std::fmt;

use crate::{Field, FormatError, RoomNumber};

/// One room as described by the seed file.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomSpec {
    pub number: RoomNumber,
    pub category: String,
    pub price: f64,
}

/// Result of reading a seed file: the records read, and why reading ended
/// early if it did.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedInventory {
    pub rooms: Vec<RoomSpec>,
    pub stopped: Option<FormatError>,
}

/// Reads `(number, category, price)` triples from whitespace-separated text.
///
/// A record is accepted only when all three tokens are valid: the number
/// must fit an `i32` (negative numbers are allowed), the price must be a
/// finite, non-negative decimal. The category is any single token.
pub fn parse_inventory(input: &str) -> ParsedInventory {
    let mut tokens = input.split_whitespace().enumerate();
    let mut parsed = ParsedInventory::default();

    loop {
        let record = parsed.rooms.len();

        let Some((position, token)) = tokens.next() else {
            break;
        };
        let Ok(number) = token.parse::<i32>() else {
            parsed.stopped = Some(malformed(position, Field::Number, token));
            break;
        };

        let Some((_, category)) = tokens.next() else {
            parsed.stopped = Some(FormatError::Truncated {
                record,
                field: Field::Category,
            });
            break;
        };

        let Some((position, token)) = tokens.next() else {
            parsed.stopped = Some(FormatError::Truncated {
                record,
                field: Field::Price,
            });
            break;
        };
        let price = match token.parse::<f64>() {
            Ok(price) if price.is_finite() && price >= 0.0 => price,
            _ => {
                parsed.stopped = Some(malformed(position, Field::Price, token));
                break;
            }
        };

        parsed.rooms.push(RoomSpec {
            number: RoomNumber(number),
            category: category.to_string(),
            price,
        });
    }

    parsed
}

fn malformed(position: usize, field: Field, token: &str) -> FormatError {
    FormatError::Malformed {
        position,
        field,
        token: token.to_string(),
    }
}

/// One line of the saved state file, without its trailing newline.
#[derive(Debug, Clone, Copy)]
pub struct StateLine<'a> {
    pub number: RoomNumber,
    pub category: &'a str,
    pub price: f64,
    pub available: bool,
}

impl fmt::Display for StateLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.number,
            self.category,
            self.price,
            u8::from(self.available)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(number: i32, category: &str, price: f64) -> RoomSpec {
        RoomSpec {
            number: RoomNumber(number),
            category: category.to_string(),
            price,
        }
    }

    #[test]
    fn test_parse_two_line_seed() {
        let parsed = parse_inventory("101 Standard 99.5\n102 Deluxe 150\n");
        assert_eq!(
            parsed.rooms,
            vec![spec(101, "Standard", 99.5), spec(102, "Deluxe", 150.0)]
        );
        assert_eq!(parsed.stopped, None);
    }

    #[test]
    fn test_parse_accepts_free_whitespace() {
        let parsed = parse_inventory("  101\tStandard\n99.5 102 Deluxe\n\n150");
        assert_eq!(parsed.rooms.len(), 2);
        assert_eq!(parsed.rooms[1], spec(102, "Deluxe", 150.0));
        assert!(parsed.stopped.is_none());
    }

    #[test]
    fn test_parse_empty_input() {
        let parsed = parse_inventory("");
        assert!(parsed.rooms.is_empty());
        assert!(parsed.stopped.is_none());
    }

    #[test]
    fn test_parse_stops_at_bad_number() {
        let parsed = parse_inventory("101 Standard 99.5\nabc Deluxe 150\n103 Suite 300");
        assert_eq!(parsed.rooms, vec![spec(101, "Standard", 99.5)]);
        assert_eq!(
            parsed.stopped,
            Some(FormatError::Malformed {
                position: 3,
                field: Field::Number,
                token: "abc".into(),
            })
        );
    }

    #[test]
    fn test_parse_stops_at_bad_price() {
        let parsed = parse_inventory("101 Standard cheap");
        assert!(parsed.rooms.is_empty());
        assert!(matches!(
            parsed.stopped,
            Some(FormatError::Malformed { field: Field::Price, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_negative_and_non_finite_prices() {
        for input in ["101 Standard -5", "101 Standard inf", "101 Standard NaN"] {
            let parsed = parse_inventory(input);
            assert!(parsed.rooms.is_empty(), "{input} should be rejected");
            assert!(parsed.stopped.is_some());
        }
    }

    #[test]
    fn test_parse_accepts_negative_room_number() {
        let parsed = parse_inventory("-1 Standard 50\n102 Deluxe 150\n");
        assert_eq!(
            parsed.rooms,
            vec![spec(-1, "Standard", 50.0), spec(102, "Deluxe", 150.0)]
        );
        assert!(parsed.stopped.is_none());
    }

    #[test]
    fn test_parse_rejects_out_of_range_room_number() {
        let parsed = parse_inventory("4294967296 Standard 50");
        assert!(parsed.rooms.is_empty());
        assert!(matches!(
            parsed.stopped,
            Some(FormatError::Malformed { field: Field::Number, .. })
        ));
    }

    #[test]
    fn test_parse_reports_truncated_trailing_record() {
        let parsed = parse_inventory("101 Standard 99.5 102 Deluxe");
        assert_eq!(parsed.rooms.len(), 1);
        assert_eq!(
            parsed.stopped,
            Some(FormatError::Truncated {
                record: 1,
                field: Field::Price,
            })
        );

        let parsed = parse_inventory("101");
        assert_eq!(
            parsed.stopped,
            Some(FormatError::Truncated {
                record: 0,
                field: Field::Category,
            })
        );
    }

    #[test]
    fn test_saved_state_is_not_a_valid_seed() {
        let saved = "101 Standard 99.5 1\n102 Deluxe 150 0\n";
        let parsed = parse_inventory(saved);
        assert_eq!(parsed.rooms, vec![spec(101, "Standard", 99.5)]);
        assert!(matches!(
            parsed.stopped,
            Some(FormatError::Malformed { field: Field::Price, .. })
        ));
    }

    #[test]
    fn test_state_line_format() {
        let line = StateLine {
            number: RoomNumber(101),
            category: "Standard",
            price: 99.5,
            available: true,
        };
        assert_eq!(line.to_string(), "101 Standard 99.5 1");

        let line = StateLine {
            available: false,
            price: 150.0,
            ..line
        };
        assert_eq!(line.to_string(), "101 Standard 150 0");
    }

    #[test]
    fn test_format_error_messages() {
        let err = FormatError::Malformed {
            position: 4,
            field: Field::Price,
            token: "x".into(),
        };
        assert_eq!(err.to_string(), "token 4 (\"x\") is not a valid price");
    }
}

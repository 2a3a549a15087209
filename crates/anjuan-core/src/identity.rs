//! National identity number parsing.
//!
//! An 18-character ID carries the birth date in positions 6..14 and a
//! gender parity digit at position 16. Nothing is validated beyond the
//! positional reads (in particular no checksum), the way the numbers have
//! always been consumed here. The caller supplies "today" so age
//! derivation stays a pure function.

use jiff::civil::Date;

use crate::models::person::Gender;

/// What an identity number reveals about its holder. Absent values mean
/// the input did not carry them, never an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdProfile {
    pub age: Option<u16>,
    pub gender: Option<Gender>,
}

/// Derive age and gender from an identity number.
///
/// Inputs that are not exactly 18 characters yield an empty profile; the
/// raw string is still usable as a free-text sight value by the caller.
/// A non-digit in any read position leaves the affected value absent.
pub fn parse(raw: &str, today: Date) -> IdProfile {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() != 18 {
        return IdProfile::default();
    }

    IdProfile {
        age: birth_date_fields(&chars).map(|(y, m, d)| age_on(today, y, m, d)),
        gender: chars[16].to_digit(10).map(|p| {
            if p % 2 == 1 {
                Gender::Male
            } else {
                Gender::Female
            }
        }),
    }
}

fn birth_date_fields(chars: &[char]) -> Option<(i32, u8, u8)> {
    let year = digits(&chars[6..10])?;
    let month = digits(&chars[10..12])?;
    let day = digits(&chars[12..14])?;
    Some((year as i32, month as u8, day as u8))
}

fn digits(chars: &[char]) -> Option<u32> {
    chars
        .iter()
        .try_fold(0u32, |acc, c| c.to_digit(10).map(|d| acc * 10 + d))
}

fn age_on(today: Date, birth_year: i32, birth_month: u8, birth_day: u8) -> u16 {
    let mut age = i32::from(today.year()) - birth_year;
    if (today.month() as u8, today.day() as u8) < (birth_month, birth_day) {
        age -= 1;
    }
    // Future birth years clamp to 0.
    age.max(0) as u16
}

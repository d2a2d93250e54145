//! Congress numbers: the two-year session identifiers derived from the calendar year.

use chrono::{Datelike, Local};

use crate::Error;

/// Year the First Congress convened.
pub const FIRST_CONGRESS_YEAR: i32 = 1789;

/// Returns the Congress number in session during `year`.
pub fn congress_for_year(year: i32) -> Result<u32, Error> {
    if year < FIRST_CONGRESS_YEAR {
        return Err(Error::NoCongress(year));
    }
    Ok(((year - FIRST_CONGRESS_YEAR) / 2 + 1) as u32)
}

/// Returns the Congress number for today's date.
pub fn current_congress() -> u32 {
    let year = Local::now().year().max(FIRST_CONGRESS_YEAR);
    congress_for_year(year).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_years() {
        assert_eq!(congress_for_year(1789).unwrap(), 1);
        assert_eq!(congress_for_year(1790).unwrap(), 1);
        assert_eq!(congress_for_year(1791).unwrap(), 2);
        assert_eq!(congress_for_year(1809).unwrap(), 11);
        assert_eq!(congress_for_year(1810).unwrap(), 11);
        assert_eq!(congress_for_year(2009).unwrap(), 111);
        assert_eq!(congress_for_year(2010).unwrap(), 111);
        assert_eq!(congress_for_year(2025).unwrap(), 119);
    }

    #[test]
    fn matches_formula_across_range() {
        for year in 1789..2200 {
            assert_eq!(congress_for_year(year).unwrap(), ((year - 1789) / 2 + 1) as u32);
        }
    }

    #[test]
    fn before_first_congress() {
        assert!(matches!(congress_for_year(1788), Err(Error::NoCongress(1788))));
        assert!(matches!(congress_for_year(0), Err(Error::NoCongress(0))));
    }

    #[test]
    fn current_matches_this_year() {
        let year = Local::now().year();
        assert_eq!(current_congress(), congress_for_year(year).unwrap());
    }
}

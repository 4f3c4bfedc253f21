//! Table-driven Gregorian to Bikram Sambat conversion.
//!
//! Bikram Sambat month lengths do not follow a closed formula; conversion
//! walks an embedded table of per-year month lengths anchored at the epoch
//! 1943-04-14 AD = 2000-01-01 BS. The table covers BS 2000 through 2090,
//! which spans every date of birth a citizenship card can realistically
//! carry.

use crate::core::errors::AuditError;
use crate::core::traits::DateConverter;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// First year covered by the month-length table.
const FIRST_BS_YEAR: i32 = 2000;

/// Gregorian date of 1 Baishakh of the first covered year.
const EPOCH_AD: (i32, u32, u32) = (1943, 4, 14);

/// Days in each Bikram Sambat month for years 2000..=2090 BS.
#[rustfmt::skip]
const BS_MONTH_LENGTHS: [[u8; 12]; 91] = [
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2000
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2001
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2002
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2003
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2004
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2005
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2006
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2007
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2008
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2009
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2010
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2011
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2012
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2013
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2014
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2015
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2016
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2017
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2018
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2019
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2020
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2021
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2022
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2023
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2024
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2025
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2026
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2027
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2028
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2029
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2030
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2031
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2032
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2033
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2034
    [30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2035
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2036
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2037
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2038
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2039
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2040
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2041
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2042
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2043
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2044
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2045
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2046
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2047
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2048
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2049
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2050
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2051
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2052
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2053
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2054
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2055
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2056
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2057
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2058
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2059
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2060
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2061
    [30, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31], // 2062
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2063
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2064
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2065
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2066
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2067
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2068
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2069
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2070
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2071
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2072
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2073
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2074
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2075
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2076
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2077
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2078
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2079
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2080
    [31, 31, 32, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2081
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2082
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2083
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2084
    [31, 32, 31, 32, 30, 31, 30, 30, 29, 30, 30, 30], // 2085
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2086
    [31, 31, 32, 31, 31, 31, 30, 30, 29, 30, 30, 30], // 2087
    [30, 31, 32, 32, 30, 31, 30, 30, 29, 30, 30, 30], // 2088
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2089
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2090
];

/// A date in the Bikram Sambat calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BsDate {
    /// Bikram Sambat year.
    pub year: i32,
    /// Month, 1 (Baishakh) through 12 (Chaitra).
    pub month: u32,
    /// Day of month, 1-based.
    pub day: u32,
}

impl fmt::Display for BsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Table-driven Bikram Sambat converter.
#[derive(Debug, Clone, Copy, Default)]
pub struct BikramSambat;

impl BikramSambat {
    /// Converts a Gregorian date to Bikram Sambat.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::CalendarRange`] when the date falls before the
    /// epoch or past the end of the embedded table.
    pub fn ad_to_bs(&self, date: NaiveDate) -> Result<BsDate, AuditError> {
        let range_error = || AuditError::CalendarRange {
            date,
            min_bs: FIRST_BS_YEAR,
            max_bs: FIRST_BS_YEAR + BS_MONTH_LENGTHS.len() as i32 - 1,
        };

        let epoch = NaiveDate::from_ymd_opt(EPOCH_AD.0, EPOCH_AD.1, EPOCH_AD.2)
            .ok_or_else(range_error)?;
        let mut offset = (date - epoch).num_days();
        if offset < 0 {
            return Err(range_error());
        }

        for (year_index, month_lengths) in BS_MONTH_LENGTHS.iter().enumerate() {
            let year_length: i64 = month_lengths.iter().map(|&d| d as i64).sum();
            if offset >= year_length {
                offset -= year_length;
                continue;
            }
            for (month_index, &month_length) in month_lengths.iter().enumerate() {
                if offset >= month_length as i64 {
                    offset -= month_length as i64;
                    continue;
                }
                return Ok(BsDate {
                    year: FIRST_BS_YEAR + year_index as i32,
                    month: month_index as u32 + 1,
                    day: offset as u32 + 1,
                });
            }
        }
        Err(range_error())
    }
}

impl DateConverter for BikramSambat {
    fn to_bikram_sambat(&self, date: NaiveDate) -> Result<BsDate, AuditError> {
        self.ad_to_bs(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ad(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_epoch() {
        let bs = BikramSambat.ad_to_bs(ad(1943, 4, 14)).unwrap();
        assert_eq!(bs, BsDate { year: 2000, month: 1, day: 1 });
    }

    #[test]
    fn test_first_month_rollover() {
        // Baishakh 2000 has 30 days, so day 30 lands on 1943-05-13 and the
        // next day starts Jestha.
        let bs = BikramSambat.ad_to_bs(ad(1943, 5, 13)).unwrap();
        assert_eq!(bs, BsDate { year: 2000, month: 1, day: 30 });
        let bs = BikramSambat.ad_to_bs(ad(1943, 5, 14)).unwrap();
        assert_eq!(bs, BsDate { year: 2000, month: 2, day: 1 });
    }

    #[test]
    fn test_year_rollover() {
        // BS 2000 has 365 days, so 2001-01-01 BS falls on 1944-04-13 AD.
        let bs = BikramSambat.ad_to_bs(ad(1944, 4, 13)).unwrap();
        assert_eq!(bs, BsDate { year: 2001, month: 1, day: 1 });
    }

    #[test]
    fn test_known_conversion() {
        let bs = BikramSambat.ad_to_bs(ad(2000, 1, 29)).unwrap();
        assert_eq!(bs, BsDate { year: 2056, month: 10, day: 15 });
    }

    #[test]
    fn test_before_epoch_is_out_of_range() {
        let err = BikramSambat.ad_to_bs(ad(1900, 1, 1)).unwrap_err();
        assert!(matches!(err, AuditError::CalendarRange { .. }));
    }

    #[test]
    fn test_past_table_end_is_out_of_range() {
        let err = BikramSambat.ad_to_bs(ad(2100, 1, 1)).unwrap_err();
        assert!(matches!(err, AuditError::CalendarRange { .. }));
    }

    #[test]
    fn test_display_zero_pads() {
        let bs = BsDate { year: 2056, month: 10, day: 5 };
        assert_eq!(bs.to_string(), "2056-10-05");
    }
}

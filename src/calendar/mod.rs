//! Bikram Sambat calendar conversion.
//!
//! Dates printed on citizenship cards are in the Bikram Sambat (BS)
//! lunar-solar calendar while users assert their date of birth in the
//! Gregorian (AD) calendar. This module provides the table-driven converter
//! between the two.

pub mod bikram;

pub use bikram::{BikramSambat, BsDate};

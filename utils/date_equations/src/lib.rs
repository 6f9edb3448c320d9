//! # Date Equations
//!
//! Date Equations is a library focused on implementing small,
//! `const` calendar calculations over whole numbers. Every date is
//! measured as a Rata Die (RD) day count, where RD 1 is January 1st
//! of year 1 in the proleptic Gregorian calendar.
//!
//! The Gregorian inverse is informed by the work done by Cassio Neri
//! and Lorenz Schneider on applying Euclidean affine functions to
//! calendar algorithms. The Hebrew equations follow the classical
//! arithmetic rules: the 19 year cycle, the molad, and the four
//! dechiyos.
//!
//! ``` rust
//! use date_equations::{gregorian, hebrew};
//!
//! let rata_die = gregorian::rata_die_from_gregorian_date(2011, 1, 1);
//! assert_eq!(gregorian::ymd_from_rata_die(rata_die), (2011, 1, 1));
//!
//! assert_eq!(hebrew::chalakim_since_molad_tohu(1, hebrew::TISHREI), 31_524);
//! assert_eq!(hebrew::days_in_year(5771), 385);
//! ```
#![cfg_attr(not(test), no_std)]

pub mod gregorian;
pub mod hebrew;

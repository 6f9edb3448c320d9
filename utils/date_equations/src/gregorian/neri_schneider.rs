//! Neri-Schneider Gregorian inverse.
//!
//! Cassio Neri and Lorenz Schneider, "Euclidean affine functions and
//! their application to calendar algorithms" (2022).

/// The computational calendar starts on March 1st, year 0, which is
/// 305 days before RD 1.
const RATA_DIE_SHIFT: u32 = 305;

const DAYS_IN_A_400Y_CYCLE: u32 = 146_097;
const TWO_POWER_THIRTY_NINE: u64 = 549_755_813_888; // 2^39 constant
const TWO_POWER_SIXTEEN: u32 = 65_536; // 2^16 constant

// Returns C, N_c
const fn century_equations(computational_rata_die: u32) -> (u32, u32) {
    let n_one = 4 * computational_rata_die + 3;
    (
        n_one / DAYS_IN_A_400Y_CYCLE,
        n_one % DAYS_IN_A_400Y_CYCLE,
    )
}

// Returns Y, N_y
const fn year_equations(computational_rata_die: u32) -> (u32, u32) {
    let (century, century_rem) = century_equations(computational_rata_die);
    let n_two = century_rem | 3;
    let year_of_century = ((376_287_347 * n_two as u64) / TWO_POWER_THIRTY_NINE) as u32;
    let day_of_year = (n_two - 1461 * year_of_century) / 4;
    (100 * century + year_of_century, day_of_year)
}

/// Returns the Gregorian `(year, month, day)` for a Rata Die.
///
/// `rata_die` must be positive and below 1,000,000,000.
pub const fn ymd_from_rata_die(rata_die: i32) -> (i32, u8, u8) {
    debug_assert!(rata_die > 0);
    let (year, day_of_year) = year_equations(rata_die as u32 + RATA_DIE_SHIFT);
    let n_three = 2141 * day_of_year + 197_913;
    let month = n_three / TWO_POWER_SIXTEEN;
    let day = (n_three % TWO_POWER_SIXTEEN) / 2141;
    // January and February belong to the previous computational year.
    let j = (day_of_year >= 306) as u32;
    ((year + j) as i32, (month - 12 * j) as u8, (day + 1) as u8)
}

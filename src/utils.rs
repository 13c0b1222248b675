//! Utility date equations for the picker engine.

/// A year is a leap year iff divisible by 4 and (not divisible by 100 or
/// divisible by 400).
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Days in a Gregorian (month, year). An out-of-domain month falls through
/// to 31, so an absent month column (resolved value 0) never narrows the
/// day domain.
pub(crate) fn days_in_month(month: i32, year: i32) -> u8 {
    match month {
        2 => 28 + u8::from(is_leap_year(year)),
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Collapses a (year, month, day, hour, minute) tuple into a single
/// comparable key. Each lower-order field gets two decimal digits, so
/// higher-order fields dominate strictly and comparing keys is the same
/// as comparing the tuples lexicographically.
pub(crate) fn composite(fields: [i32; 5]) -> i64 {
    fields.iter().fold(0i64, |acc, &f| acc * 100 + i64::from(f))
}

// ==== Begin Gregorian <-> epoch-day equations ====
//
// Neri-Schneider Euclidean affine functions, shifted so the computational
// rata die stays unsigned across the years this engine can meet.

const EPOCH_COMPUTATIONAL_RATA_DIE: i64 = 719_468;
const DAYS_IN_A_400Y_CYCLE: u32 = 146_097;
const TWO_POWER_SIXTEEN: u32 = 65_536;
const SHIFT_CONSTANT: i64 = 3670;

/// Days since 1970-01-01 for a Gregorian date.
pub(crate) fn epoch_days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let j = i64::from(month <= 2);
    let comp_year = i64::from(year) + 400 * SHIFT_CONSTANT - j;
    let comp_month = i64::from(month) + 12 * j;
    let comp_day = i64::from(day) - 1;
    let century = comp_year / 100;
    let y_star = 1461 * comp_year / 4 - century + century / 4;
    let m_star = (979 * comp_month - 2919) / 32;
    y_star + m_star + comp_day
        - (SHIFT_CONSTANT * i64::from(DAYS_IN_A_400Y_CYCLE) + EPOCH_COMPUTATIONAL_RATA_DIE)
}

/// Gregorian (year, month, day) for days since 1970-01-01.
#[cfg(any(test, feature = "sys"))]
pub(crate) fn civil_from_epoch_days(epoch_days: i64) -> (i32, u8, u8) {
    let rata_die = (epoch_days
        + EPOCH_COMPUTATIONAL_RATA_DIE
        + i64::from(DAYS_IN_A_400Y_CYCLE) * SHIFT_CONSTANT) as u32;
    let n_one = 4 * rata_die + 3;
    let century = n_one / DAYS_IN_A_400Y_CYCLE;
    let n_two = n_one.rem_euclid(DAYS_IN_A_400Y_CYCLE) | 3;
    let year_of_century = ((376_287_347u64 * u64::from(n_two)) >> 39) as u32;
    let day_of_year = (n_two - 1461 * year_of_century) / 4;
    let n_three = 2141 * day_of_year + 197_913;
    let month = n_three / TWO_POWER_SIXTEEN;
    let day = (n_three % TWO_POWER_SIXTEEN) / 2141 + 1;
    let j = u32::from(day_of_year >= 306);
    let year = (100 * century + year_of_century + j) as i64 - 400 * SHIFT_CONSTANT;
    (year as i32, (month - 12 * j) as u8, day as u8)
}

/// Day of the week for a Gregorian date, 0 = Sunday.
pub(crate) fn day_of_week(year: i32, month: u8, day: u8) -> u8 {
    // 1970-01-01 was a Thursday.
    (epoch_days_from_civil(year, month, day) + 4).rem_euclid(7) as u8
}

// ==== End Gregorian <-> epoch-day equations ====

use crate::domain::model::{BirthDate, LoShuGrid, LO_SHU_LAYOUT};
use crate::utils::error::Result;
use chrono::NaiveDate;

/// Whether (day, month, year) names a real proleptic Gregorian date.
pub fn is_valid_calendar_date(day: u32, month: u32, year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// Counts the nonzero digits of the date and lays them onto the Lo Shu square.
pub fn build_grid(date: &BirthDate) -> LoShuGrid {
    let digit_string: String = date.digit_string().chars().filter(|&c| c != '0').collect();

    let mut counts = [0usize; 9];
    for d in digit_string.bytes() {
        counts[(d - b'1') as usize] += 1;
    }

    let cells = LO_SHU_LAYOUT.map(|digit| {
        digit
            .to_string()
            .repeat(counts[(digit - 1) as usize])
    });

    let (present_numbers, missing_numbers): (Vec<u8>, Vec<u8>) =
        (1..=9u8).partition(|&d| counts[(d - 1) as usize] > 0);

    let total_digit_count = digit_string.len();

    LoShuGrid {
        birth_date: *date,
        digit_string,
        counts,
        cells,
        present_numbers,
        missing_numbers,
        total_digit_count,
    }
}

/// Validates the date, then builds its grid.
pub fn build_lo_shu_grid(day: u32, month: u32, year: i32) -> Result<LoShuGrid> {
    let date = BirthDate::new(day, month, year)?;
    let grid = build_grid(&date);
    tracing::debug!(
        "Lo Shu grid for {}: digits {}, present {:?}, missing {:?}",
        date,
        grid.digit_string,
        grid.present_numbers,
        grid.missing_numbers
    );
    Ok(grid)
}

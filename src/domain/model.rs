use crate::utils::error::{NumerologyError, Result};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// Master numbers are never reduced further.
pub const MASTER_NUMBERS: [u64; 3] = [11, 22, 33];

/// Lo Shu magic square, row-major. Every row, column and diagonal sums to 15.
pub const LO_SHU_LAYOUT: [u8; 9] = [4, 9, 2, 3, 5, 7, 8, 1, 6];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumerologySystem {
    Pythagorean,
    Chaldean,
}

impl NumerologySystem {
    pub const ALL: [NumerologySystem; 2] = [NumerologySystem::Pythagorean, NumerologySystem::Chaldean];

    pub fn mapping(self) -> &'static LetterMapping {
        match self {
            NumerologySystem::Pythagorean => &PYTHAGOREAN,
            NumerologySystem::Chaldean => &CHALDEAN,
        }
    }
}

impl fmt::Display for NumerologySystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumerologySystem::Pythagorean => write!(f, "Pythagorean"),
            NumerologySystem::Chaldean => write!(f, "Chaldean"),
        }
    }
}

/// Letter to digit table, indexed by `letter - 'A'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterMapping {
    pub system: NumerologySystem,
    pub values: [u8; 26],
}

impl LetterMapping {
    /// Digit for an ASCII letter of either case, `None` for anything else.
    pub fn value_of(&self, c: char) -> Option<u8> {
        if c.is_ascii_alphabetic() {
            let index = (c.to_ascii_uppercase() as u8 - b'A') as usize;
            Some(self.values[index])
        } else {
            None
        }
    }
}

pub const PYTHAGOREAN: LetterMapping = LetterMapping {
    system: NumerologySystem::Pythagorean,
    //       A  B  C  D  E  F  G  H  I  J  K  L  M  N  O  P  Q  R  S  T  U  V  W  X  Y  Z
    values: [1, 2, 3, 4, 5, 6, 7, 8, 9, 1, 2, 3, 4, 5, 6, 7, 8, 9, 1, 2, 3, 4, 5, 6, 7, 8],
};

pub const CHALDEAN: LetterMapping = LetterMapping {
    system: NumerologySystem::Chaldean,
    values: [1, 2, 3, 4, 5, 8, 3, 5, 1, 1, 2, 3, 4, 5, 7, 8, 1, 2, 3, 4, 6, 6, 6, 5, 1, 7],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyResult {
    pub pythagorean: u64,
    pub chaldean: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemScore {
    /// Raw letter sum before reduction.
    pub total: u64,
    pub reduced: u64,
}

impl SystemScore {
    pub fn is_master_number(&self) -> bool {
        MASTER_NUMBERS.contains(&self.reduced)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameReport {
    pub name: String,
    pub pythagorean: SystemScore,
    pub chaldean: SystemScore,
}

impl NameReport {
    pub fn result(&self) -> NumerologyResult {
        NumerologyResult {
            pythagorean: self.pythagorean.reduced,
            chaldean: self.chaldean.reduced,
        }
    }

    pub fn score(&self, system: NumerologySystem) -> SystemScore {
        match system {
            NumerologySystem::Pythagorean => self.pythagorean,
            NumerologySystem::Chaldean => self.chaldean,
        }
    }
}

/// A validated calendar date inside the accepted year range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BirthDate {
    day: u32,
    month: u32,
    year: i32,
}

impl BirthDate {
    pub fn new(day: u32, month: u32, year: i32) -> Result<Self> {
        if !(1..=31).contains(&day) {
            return Err(NumerologyError::invalid_date(
                day,
                month,
                year,
                "day must be between 1 and 31",
            ));
        }
        if !(1..=12).contains(&month) {
            return Err(NumerologyError::invalid_date(
                day,
                month,
                year,
                "month must be between 1 and 12",
            ));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(NumerologyError::invalid_date(
                day,
                month,
                year,
                format!("year must be between {} and {}", MIN_YEAR, MAX_YEAR),
            ));
        }
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(NumerologyError::invalid_date(
                day,
                month,
                year,
                "no such day in the calendar",
            ));
        }

        Ok(Self { day, month, year })
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Canonical digit string: day and month zero-padded, then the year.
    pub fn digit_string(&self) -> String {
        format!("{:02}{:02}{}", self.day, self.month, self.year)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day, self.month, self.year)
    }
}

static DAY_FIRST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{4})$").expect("valid regex"));
static ISO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("valid regex"));
static COMPACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})(\d{2})(\d{4})$").expect("valid regex"));

impl FromStr for BirthDate {
    type Err = NumerologyError;

    /// Accepts `DD/MM/YYYY` (also `-` or `.` separated), `YYYY-MM-DD` and `DDMMYYYY`.
    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        let parse_error = |reason: &str| NumerologyError::DateParse {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let (day, month, year) =
            date_components(input).ok_or_else(|| parse_error("unrecognised date layout"))?;

        let day: u32 = day.parse().map_err(|_| parse_error("day is not a number"))?;
        let month: u32 = month.parse().map_err(|_| parse_error("month is not a number"))?;
        let year: i32 = year.parse().map_err(|_| parse_error("year is not a number"))?;

        BirthDate::new(day, month, year)
    }
}

/// Splits a date string into (day, month, year) text, whatever its layout.
fn date_components(input: &str) -> Option<(&str, &str, &str)> {
    let (re, day, month, year) = if ISO.is_match(input) {
        (&*ISO, 3, 2, 1)
    } else if DAY_FIRST.is_match(input) {
        (&*DAY_FIRST, 1, 2, 3)
    } else {
        (&*COMPACT, 1, 2, 3)
    };
    let caps = re.captures(input)?;
    Some((
        caps.get(day)?.as_str(),
        caps.get(month)?.as_str(),
        caps.get(year)?.as_str(),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoShuGrid {
    pub birth_date: BirthDate,
    /// Date digits in day, month, year order with every zero removed.
    pub digit_string: String,
    /// Occurrences of digits 1..=9, indexed by `digit - 1`.
    pub counts: [usize; 9],
    /// Cell text in `LO_SHU_LAYOUT` order.
    pub cells: [String; 9],
    pub present_numbers: Vec<u8>,
    pub missing_numbers: Vec<u8>,
    pub total_digit_count: usize,
}

impl LoShuGrid {
    pub fn count_of(&self, digit: u8) -> usize {
        match digit {
            1..=9 => self.counts[(digit - 1) as usize],
            _ => 0,
        }
    }

    /// Cell text for the position holding `digit`; empty for digits outside 1..=9.
    pub fn cell_for(&self, digit: u8) -> &str {
        LO_SHU_LAYOUT
            .iter()
            .position(|&d| d == digit)
            .map(|i| self.cells[i].as_str())
            .unwrap_or("")
    }

    pub fn rows(&self) -> [[&str; 3]; 3] {
        let c = &self.cells;
        [
            [&c[0], &c[1], &c[2]],
            [&c[3], &c[4], &c[5]],
            [&c[6], &c[7], &c[8]],
        ]
    }
}

/// One input row of a batch report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub name: String,
    pub birth_date: Option<String>,
}

/// What a batch run does with a row whose birth date does not parse or validate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidDatePolicy {
    /// Keep the row without a grid and record the error text.
    #[default]
    Keep,
    Skip,
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub numerology: NameReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<LoShuGrid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_error: Option<String>,
}

/// Flat CSV projection of a `ReportEntry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub name: String,
    pub pythagorean_total: u64,
    pub pythagorean: u64,
    pub chaldean_total: u64,
    pub chaldean: u64,
    pub birth_date: String,
    pub grid: String,
    pub present_numbers: String,
    pub missing_numbers: String,
    pub total_digit_count: String,
    pub date_error: String,
}

impl From<&ReportEntry> for ReportRow {
    fn from(entry: &ReportEntry) -> Self {
        let join = |digits: &[u8]| {
            digits
                .iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        let grid = entry.grid.as_ref();

        Self {
            name: entry.numerology.name.clone(),
            pythagorean_total: entry.numerology.pythagorean.total,
            pythagorean: entry.numerology.pythagorean.reduced,
            chaldean_total: entry.numerology.chaldean.total,
            chaldean: entry.numerology.chaldean.reduced,
            birth_date: grid
                .map(|g| g.birth_date.to_string())
                .or_else(|| entry.birth_date.clone())
                .unwrap_or_default(),
            grid: grid
                .map(|g| {
                    g.rows()
                        .iter()
                        .map(|row| row.join("|"))
                        .collect::<Vec<_>>()
                        .join("/")
                })
                .unwrap_or_default(),
            present_numbers: grid.map(|g| join(&g.present_numbers)).unwrap_or_default(),
            missing_numbers: grid.map(|g| join(&g.missing_numbers)).unwrap_or_default(),
            total_digit_count: grid
                .map(|g| g.total_digit_count.to_string())
                .unwrap_or_default(),
            date_error: entry.date_error.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportResult {
    pub entries: Vec<ReportEntry>,
    pub skipped: usize,
}

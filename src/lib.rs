pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{LocalStorage, ReportConfig};

pub use crate::core::lo_shu::{build_grid, build_lo_shu_grid, is_valid_calendar_date};
pub use crate::core::numerology::{
    calculate_name_numerology, compute_score, name_report, reduce_to_single_digit,
};
pub use crate::core::{pipeline::CsvReportPipeline, report::ReportEngine};
pub use domain::model::{
    BirthDate, LetterMapping, LoShuGrid, NameReport, NumerologyResult, NumerologySystem,
    CHALDEAN, PYTHAGOREAN,
};
pub use utils::error::{NumerologyError, Result};

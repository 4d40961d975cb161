pub mod lo_shu;
pub mod numerology;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{
    BirthDate, InvalidDatePolicy, LoShuGrid, NameReport, NumerologyResult, PersonRecord,
    ReportEntry, ReportResult, ReportRow,
};
pub use crate::domain::ports::{Pipeline, ReportSettings, Storage};
pub use crate::utils::error::Result;

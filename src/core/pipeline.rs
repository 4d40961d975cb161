use crate::core::lo_shu::build_grid;
use crate::core::numerology::name_report;
use crate::core::{
    BirthDate, InvalidDatePolicy, Pipeline, PersonRecord, ReportEntry, ReportResult, ReportRow,
    ReportSettings, Storage,
};
use crate::utils::error::{NumerologyError, Result};

/// Batch report over a CSV file of names and optional birth dates.
pub struct CsvReportPipeline<S: Storage, C: ReportSettings> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ReportSettings> CsvReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn output_file(&self, filename: &str) -> String {
        format!(
            "{}/{}",
            self.config.output_path().trim_end_matches('/'),
            filename
        )
    }

    fn parse_records(&self, data: &[u8]) -> Result<Vec<PersonRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter())
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(data);

        let headers = reader.headers()?.clone();
        let name_index = headers
            .iter()
            .position(|h| h == self.config.name_field())
            .ok_or_else(|| NumerologyError::ProcessingError {
                message: format!(
                    "Column '{}' not found in input header: {}",
                    self.config.name_field(),
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            })?;
        let birth_date_index = headers
            .iter()
            .position(|h| h == self.config.birth_date_field());

        if birth_date_index.is_none() {
            tracing::warn!(
                "Column '{}' not found, grids will not be generated",
                self.config.birth_date_field()
            );
        }

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let name = row.get(name_index).unwrap_or_default().to_string();
            let birth_date = birth_date_index
                .and_then(|i| row.get(i))
                .filter(|value| !value.is_empty())
                .map(str::to_string);
            records.push(PersonRecord { name, birth_date });
        }

        Ok(records)
    }

    fn to_csv(entries: &[ReportEntry]) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for entry in entries {
            writer.serialize(ReportRow::from(entry))?;
        }
        writer
            .into_inner()
            .map_err(|e| NumerologyError::ProcessingError {
                message: format!("Failed to flush CSV output: {}", e),
            })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ReportSettings> Pipeline for CsvReportPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<PersonRecord>> {
        tracing::debug!("Reading input from: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path()).await?;
        self.parse_records(&data)
    }

    async fn transform(&self, records: Vec<PersonRecord>) -> Result<ReportResult> {
        let policy = self.config.invalid_date_policy();
        let mut entries = Vec::with_capacity(records.len());
        let mut skipped = 0;

        for record in records {
            let numerology = name_report(&record.name);

            let (grid, date_error) = match record.birth_date.as_deref() {
                None => (None, None),
                Some(raw) => match raw.parse::<BirthDate>() {
                    Ok(date) => (Some(build_grid(&date)), None),
                    Err(e) => match policy {
                        InvalidDatePolicy::Fail => return Err(e),
                        InvalidDatePolicy::Skip => {
                            tracing::warn!("Skipping '{}': {}", record.name, e);
                            skipped += 1;
                            continue;
                        }
                        InvalidDatePolicy::Keep => {
                            tracing::warn!("No grid for '{}': {}", record.name, e);
                            (None, Some(e.to_string()))
                        }
                    },
                },
            };

            entries.push(ReportEntry {
                numerology,
                birth_date: record.birth_date,
                grid,
                date_error,
            });
        }

        Ok(ReportResult { entries, skipped })
    }

    async fn load(&self, result: ReportResult) -> Result<String> {
        let mut written = Vec::new();

        for format in self.config.output_formats() {
            let (path, data) = match format.as_str() {
                "csv" => (
                    self.output_file(self.config.csv_filename()),
                    Self::to_csv(&result.entries)?,
                ),
                "json" => (
                    self.output_file(self.config.json_filename()),
                    serde_json::to_vec_pretty(&result.entries)?,
                ),
                other => {
                    return Err(NumerologyError::InvalidConfigValueError {
                        field: "load.output_formats".to_string(),
                        value: other.to_string(),
                        reason: "Unsupported format. Valid formats: csv, json".to_string(),
                    })
                }
            };

            tracing::debug!("Writing {} ({} bytes)", path, data.len());
            self.storage.write_file(&path, &data).await?;
            written.push(path);
        }

        written
            .into_iter()
            .next()
            .ok_or_else(|| NumerologyError::ConfigError {
                message: "No output format configured".to_string(),
            })
    }
}

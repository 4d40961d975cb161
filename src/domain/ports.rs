use crate::domain::model::{InvalidDatePolicy, PersonRecord, ReportResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Settings a batch report needs, whatever their source.
pub trait ReportSettings: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn delimiter(&self) -> u8;
    fn name_field(&self) -> &str;
    fn birth_date_field(&self) -> &str;
    fn invalid_date_policy(&self) -> InvalidDatePolicy;
    fn csv_filename(&self) -> &str;
    fn json_filename(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<PersonRecord>>;
    async fn transform(&self, records: Vec<PersonRecord>) -> Result<ReportResult>;
    async fn load(&self, result: ReportResult) -> Result<String>;
}

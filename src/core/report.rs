use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting report run");

        tracing::info!("Reading input records...");
        let records = self.pipeline.extract().await?;
        tracing::info!("Read {} records", records.len());

        tracing::info!("Computing numerology and grids...");
        let result = self.pipeline.transform(records).await?;
        let with_grid = result.entries.iter().filter(|e| e.grid.is_some()).count();
        tracing::info!(
            "Computed {} entries ({} with a Lo Shu grid, {} skipped)",
            result.entries.len(),
            with_grid,
            result.skipped
        );

        tracing::info!("Writing report...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Report saved to: {}", output_path);

        Ok(output_path)
    }
}

use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting cleaning run");

        let rows = self.pipeline.extract().await?;
        tracing::info!("Extracted {} rows", rows.len());
        self.monitor.log_stats("extract");

        let result = self.pipeline.transform(rows).await?;
        tracing::info!(
            "Kept {} rows ({} dropped for missing identifier)",
            result.output_records.len(),
            result.skipped_missing_id
        );
        tracing::info!(
            "Genre counts: Male={}, Female={}",
            result.gender_counts.male,
            result.gender_counts.female
        );
        self.monitor.log_stats("transform");

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("load");
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}

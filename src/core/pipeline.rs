use crate::core::{ingest, normalize};
use crate::domain::model::{
    GenderCounts, NameSource, OutputRecord, Record, TransformResult, FULL_NAME_LABEL,
    GENDER_OUTPUT_LABEL, ID_OUTPUT_LABEL, OUTPUT_FILENAME,
};
use crate::domain::ports::{ConfigProvider, GenderLookup, Pipeline, Storage};
use crate::gender::classify_binary;
use crate::utils::error::Result;

/// UTF-8 signature expected by the CRM import on the other end.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

pub struct GenrePipeline<S: Storage, C: ConfigProvider, L: GenderLookup> {
    storage: S,
    config: C,
    lookup: L,
}

impl<S: Storage, C: ConfigProvider, L: GenderLookup> GenrePipeline<S, C, L> {
    pub fn new(storage: S, config: C, lookup: L) -> Self {
        Self {
            storage,
            config,
            lookup,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, L: GenderLookup> Pipeline for GenrePipeline<S, C, L> {
    async fn extract(&self) -> Result<Vec<Record>> {
        tracing::debug!("Reading input file: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path()).await?;

        let table = ingest::parse_table(&data)?;
        tracing::debug!(
            "Parsed {} rows with {} columns",
            table.records.len(),
            table.headers.len()
        );
        Ok(table.records)
    }

    async fn transform(&self, data: Vec<Record>) -> Result<TransformResult> {
        let binding = self.config.binding();
        let default = self.config.default_gender();

        let mut output_records = Vec::with_capacity(data.len());
        let mut gender_counts = GenderCounts::default();
        let mut skipped_missing_id = 0usize;

        for record in &data {
            let full_name = match &binding.name_source {
                NameSource::Parts { first, last } => {
                    normalize::join_name(record.get(first), record.get(last))
                }
                NameSource::Full { column } => normalize::collapse_whitespace(record.get(column)),
            };

            let id = record.get(&binding.id_column).trim();
            if id.is_empty() {
                skipped_missing_id += 1;
                continue;
            }

            let gender = classify_binary(&full_name, &self.lookup, default);
            gender_counts.bump(gender);
            output_records.push(OutputRecord {
                id: id.to_string(),
                full_name,
                gender,
            });
        }

        Ok(TransformResult {
            output_records,
            gender_counts,
            skipped_missing_id,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let mut buffer: Vec<u8> = UTF8_BOM.to_vec();
        {
            let mut writer = csv::Writer::from_writer(&mut buffer);
            writer.write_record([ID_OUTPUT_LABEL, FULL_NAME_LABEL, GENDER_OUTPUT_LABEL])?;
            for record in &result.output_records {
                writer.write_record([
                    record.id.as_str(),
                    record.full_name.as_str(),
                    record.gender.as_str(),
                ])?;
            }
            writer.flush()?;
        }

        tracing::debug!("Writing output file ({} bytes)", buffer.len());
        self.storage.write_file(OUTPUT_FILENAME, &buffer).await?;

        Ok(format!("{}/{}", self.config.output_path(), OUTPUT_FILENAME))
    }
}

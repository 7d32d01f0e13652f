use crate::domain::model::{ColumnBinding, GenderLabel, NameGender, Record, TransformResult};
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

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn binding(&self) -> &ColumnBinding;
    fn default_gender(&self) -> GenderLabel;
}

/// Read-only query contract over the name→gender reference table. Callers
/// pass the bare first-name token; implementations own the ASCII folding and
/// case handling.
pub trait GenderLookup: Send + Sync {
    fn get_gender(&self, first_name: &str) -> NameGender;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Record>>;
    async fn transform(&self, data: Vec<Record>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}

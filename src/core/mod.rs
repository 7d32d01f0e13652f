pub mod binder;
pub mod etl;
pub mod ingest;
pub mod normalize;
pub mod pipeline;

pub use crate::domain::model::{Record, TransformResult};
pub use crate::domain::ports::{ConfigProvider, GenderLookup, Pipeline, Storage};
pub use crate::utils::error::Result;

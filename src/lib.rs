pub mod config;
pub mod core;
pub mod domain;
pub mod gender;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig, ResolvedConfig};
pub use core::{etl::EtlEngine, pipeline::GenrePipeline};
pub use gender::Detector;
pub use utils::error::{CleanerError, Result};

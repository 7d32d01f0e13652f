pub mod model;
pub mod ports;

pub use model::{ColumnBinding, GenderLabel, NameSource, Record};
pub use ports::{ConfigProvider, GenderLookup, Pipeline, Storage};

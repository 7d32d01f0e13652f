pub mod detector;

pub use detector::{classify_binary, Detector};

pub mod classification;
pub mod item;

pub use classification::{ClassificationResult, classify, classify_data};
pub use item::Item;

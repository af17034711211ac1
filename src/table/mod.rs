pub mod pivot;
pub mod types;

pub use pivot::from_records;
pub use types::{IndicatorRecord, IndicatorTable};

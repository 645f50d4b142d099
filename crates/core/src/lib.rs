pub mod params;
pub mod record;
pub mod variant;

pub use params::{header_names, PARAM_ABBREVS, PARAM_CEILINGS, PARAM_COUNT};
pub use record::{ParameterRecord, RecordError};
pub use variant::DatasetVariant;

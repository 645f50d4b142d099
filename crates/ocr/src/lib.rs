pub mod harvest;
pub mod locate;
pub mod pipeline;
pub mod preprocess;
pub mod recognizer;
pub mod repair;
pub mod types;

pub use harvest::{harvest_year, HarvestSummary};
pub use locate::locate_score_label;
pub use pipeline::{ExtractError, ScoreExtractor};
pub use preprocess::{crop_score_band, load_grayscale, PreprocessError};
pub use recognizer::{MockEngine, OcrEngine, OcrError};
pub use repair::{apply_position_ceilings, repair_score_line};
pub use types::{OcrWord, ScoreLabel};

//! Record normalization pipeline for geopulse.
//!
//! Converts raw annotated posts into the analysis-ready table: cleaned and
//! normalized text, batch-relative sentiment codes, resolved country names,
//! and parsed timestamps. One synchronous pass per batch; per-record
//! problems degrade to safe defaults, configuration problems abort.

pub mod encode;
pub mod error;
pub mod normalize;
pub mod stopwords;
pub mod table;
pub mod text;

pub use encode::SentimentEncoder;
pub use error::PipelineError;
pub use normalize::{normalize_batch, InvalidRecordPolicy};
pub use table::{read_posts, read_posts_from_path, write_posts};
pub use text::{clean_text, normalize_text};

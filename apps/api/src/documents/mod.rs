// Resume ingestion: file-type dispatch, per-format decoders, scratch files,
// and the `/upload` handler. Nothing here outlives a single request.

pub mod decoders;
pub mod extractor;
pub mod file_type;
pub mod handlers;
pub mod scratch;

pub use extractor::{DocumentExtractor, ExtractError, ExtractedDocument};

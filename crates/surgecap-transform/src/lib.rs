pub mod convert;
pub mod encoding;
pub mod error;
pub mod normalize;
pub mod snapshot;
pub mod transcode;

pub use convert::{Converter, ConverterTable};
pub use encoding::{FeedEncoding, read_feed};
pub use error::{Result, RowError, TransformError};
pub use normalize::RowNormalizer;
pub use snapshot::{Snapshot, discover_snapshots, processed_filename, snapshot_taken_at};
pub use transcode::{FilePolicy, TranscodeOptions, TranscodeOutcome, transcode_file};

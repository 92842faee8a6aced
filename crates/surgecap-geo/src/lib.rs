pub mod directory;
pub mod error;
mod geojson;

pub use directory::LocationDirectory;
pub use error::{GeoError, Result};

pub mod error;
pub mod lookup;

pub use error::{HeaderError, Result};
pub use lookup::{HeaderLookup, public_fields, strip_apostrophes};

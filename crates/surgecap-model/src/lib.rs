pub mod field;
pub mod location;
pub mod row;
pub mod survey;

pub use field::CanonicalField;
pub use location::FacilityLocation;
pub use row::{NormalizedRow, SourceRow, Value};
pub use survey::{SurveyType, UnknownSurveyType};

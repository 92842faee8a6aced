mod hospital;
mod long_term_care;
mod registry;

pub use registry::{SurveyProfile, SurveySchema};

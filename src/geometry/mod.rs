pub mod survey_point;

pub use survey_point::{positions, SurveyPoint};

pub mod health;
pub mod questionnaire;
pub mod results;
pub mod submit;

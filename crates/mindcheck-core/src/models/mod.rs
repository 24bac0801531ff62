pub mod features;
pub mod prediction;
pub mod result;
pub mod user;

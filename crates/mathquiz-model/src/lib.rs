pub mod analysis;
pub mod difficulty;
pub mod question;
pub mod quiz;
pub mod stats;
pub mod upload;

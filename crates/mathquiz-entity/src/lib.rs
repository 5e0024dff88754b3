pub mod question;
pub mod user_progress;

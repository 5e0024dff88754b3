pub mod progress;
pub mod question;
pub mod util;

pub use sea_orm;

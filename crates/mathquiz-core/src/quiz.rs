pub mod answer;
pub mod feedback;
pub mod options;
pub mod selector;
pub mod session;

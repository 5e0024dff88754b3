mod mutation;
mod query;

pub use mutation::{Mutation, NewQuestion};
pub use query::{Query, TopicCount};

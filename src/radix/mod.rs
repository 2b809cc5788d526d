mod find;
mod node;
mod tree;

pub use find::{find, ConstraintValidator};
pub use tree::{InsertOutcome, RadixTree};

pub mod store;
pub mod tokenizer;

pub use store::LineStore;
pub use tokenizer::{Words, normalize_query, words};

pub mod iterate;
pub mod matching;
pub mod query;
pub mod runtime;
pub mod source;

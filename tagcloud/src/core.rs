// src/core.rs
pub mod counter;
pub mod pipeline;
pub mod ranker;
pub mod render;
pub mod scaler;
pub mod separators;
pub mod source;
pub mod tokenizer;

#[cfg(test)]
pub mod test_utils;

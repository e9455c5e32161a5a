// src/models.rs
mod count_bounds;
mod tag_cloud;
mod word_count;

pub use count_bounds::CountBounds;
pub use tag_cloud::{CloudEntry, TagCloud};
pub use word_count::WordCount;

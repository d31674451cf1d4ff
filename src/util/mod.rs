//! Utility modules

pub mod text;

// Re-export text utilities at the util level
pub use text::{char_len, find_unescaped_pipe, is_blank, prefix_chars, split_pair, suffix_chars};

// Resume vs job description comparison.
// Pipeline: normalize → frequency keywords + technical terms → keyword sets → score.
// Everything below handlers.rs is pure and synchronous; no shared mutable state.

pub mod catalog;
pub mod extractor;
pub mod handlers;
pub mod highlight;
pub mod intake;
pub mod matcher;
pub mod models;
pub mod normalizer;
pub mod scorer;
pub mod technical;

//! Resume analysis: field extraction, classification, scoring and ranking

pub mod keywords;
pub mod field_extractor;
pub mod classifier;
pub mod scoring;
pub mod analyzer;
pub mod ranker;
pub mod roadmap;

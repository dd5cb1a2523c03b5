pub mod analyzer;
pub mod highlighter;

pub use analyzer::{analyze, AnalysisResult};
pub use highlighter::Highlighter;

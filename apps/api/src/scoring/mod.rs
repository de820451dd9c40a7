// ATS scoring: vocabulary presence ratios + sentence-length readability,
// folded into an analytics report. Pure functions; no I/O.

pub mod content;
pub mod handlers;
pub mod report;
pub mod vocabulary;

pub use content::ScoringWeights;

//! Analysis engine for deriving a bump recommendation from commits

pub mod version_analyzer;

pub use version_analyzer::VersionAnalyzer;

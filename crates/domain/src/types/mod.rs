//! Domain types and models

pub mod classification;

// Re-export classification types for convenience
pub use classification::{
    AccuracyAssessment, CodeMatch, DualAccuracy, IndustryCategory, PredictionAssessment, SicCode,
    SicPrediction,
};

//! The fixed pipeline step table.

use serde::{Deserialize, Serialize};

/// One named stage of the simulated processing pipeline.
///
/// The sequence is fixed and ordered; each step advances the job's
/// progress to a cumulative target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStep {
    AnalyzeContent,
    DetectCuts,
    AutoCaptions,
    SelectMusic,
    InsertBRoll,
    ColorAndExport,
}

impl PipelineStep {
    /// The full step sequence, in execution order.
    pub const SEQUENCE: [PipelineStep; 6] = [
        PipelineStep::AnalyzeContent,
        PipelineStep::DetectCuts,
        PipelineStep::AutoCaptions,
        PipelineStep::SelectMusic,
        PipelineStep::InsertBRoll,
        PipelineStep::ColorAndExport,
    ];

    /// The first step of the sequence.
    pub fn first() -> Self {
        Self::SEQUENCE[0]
    }

    /// Cumulative progress target reached when this step runs.
    pub fn progress_target(&self) -> u8 {
        match self {
            PipelineStep::AnalyzeContent => 15,
            PipelineStep::DetectCuts => 30,
            PipelineStep::AutoCaptions => 45,
            PipelineStep::SelectMusic => 60,
            PipelineStep::InsertBRoll => 80,
            PipelineStep::ColorAndExport => 100,
        }
    }

    /// Get string representation of the step.
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStep::AnalyzeContent => "analyze_content",
            PipelineStep::DetectCuts => "detect_cuts",
            PipelineStep::AutoCaptions => "auto_captions",
            PipelineStep::SelectMusic => "select_music",
            PipelineStep::InsertBRoll => "insert_b_roll",
            PipelineStep::ColorAndExport => "color_and_export",
        }
    }
}

impl std::fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_step() {
        assert_eq!(PipelineStep::first(), PipelineStep::AnalyzeContent);
        assert_eq!(PipelineStep::first().progress_target(), 15);
    }

    #[test]
    fn test_targets_strictly_increase_to_100() {
        let targets: Vec<u8> = PipelineStep::SEQUENCE
            .iter()
            .map(|s| s.progress_target())
            .collect();
        assert!(targets.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(*targets.last().unwrap(), 100);
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for step in PipelineStep::SEQUENCE {
            let json = serde_json::to_string(&step).unwrap();
            assert_eq!(json, format!("\"{}\"", step.as_str()));

            let back: PipelineStep = serde_json::from_str(&json).unwrap();
            assert_eq!(back, step);
        }
    }
}

use thiserror::Error;
use tone_stats::{Region, StatsError};

/// Failures of a single classification call.
///
/// All are deterministic for a given input, so callers should surface them
/// rather than retry.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("No face detected")]
    NoFaceDetected,

    #[error("Empty region: {0} has no pixels inside the image")]
    EmptyRegion(Region),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<StatsError> for AnalysisError {
    fn from(e: StatsError) -> Self {
        match e {
            StatsError::EmptyRegion { requested } => AnalysisError::EmptyRegion(requested),
            StatsError::InvalidInput(kind) => AnalysisError::InvalidInput(kind.to_string()),
        }
    }
}

/// Failures while turning an uploaded file into a pixel buffer
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Unsupported image format (only JPEG and PNG are accepted)")]
    UnsupportedFormat,

    #[error("File too large: {size} bytes (max {max})")]
    FileTooLarge { size: u64, max: u64 },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tone_stats::InvalidInputKind;

    #[test]
    fn test_analysis_error_no_face() {
        assert_eq!(AnalysisError::NoFaceDetected.to_string(), "No face detected");
    }

    #[test]
    fn test_analysis_error_from_empty_region() {
        let stats_error = StatsError::EmptyRegion {
            requested: Region::new(50, 50, 0, 10),
        };
        let error: AnalysisError = stats_error.into();
        match error {
            AnalysisError::EmptyRegion(region) => assert_eq!(region, Region::new(50, 50, 0, 10)),
            _ => panic!("Expected EmptyRegion variant"),
        }
    }

    #[test]
    fn test_analysis_error_from_invalid_input() {
        let stats_error = StatsError::InvalidInput(InvalidInputKind::ChannelCount(4));
        let error: AnalysisError = stats_error.into();
        assert!(matches!(error, AnalysisError::InvalidInput(_)));
        assert!(error.to_string().starts_with("Invalid input: "));
    }

    #[test]
    fn test_ingest_error_too_large() {
        let error = IngestError::FileTooLarge {
            size: 11_000_000,
            max: 10_485_760,
        };
        assert_eq!(
            error.to_string(),
            "File too large: 11000000 bytes (max 10485760)"
        );
    }

    #[test]
    fn test_ingest_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: IngestError = io_error.into();
        assert!(matches!(error, IngestError::Io(_)));
    }
}

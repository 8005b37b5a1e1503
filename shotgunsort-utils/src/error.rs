use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShotgunError {
    #[error("Array must contain {min} or more elements!")]
    ArrayTooSmall { min: usize, len: i64 },

    #[error("The number of elements in the array cannot exceed {max}.")]
    ArrayTooLarge { max: usize, len: i64 },

    #[error("Failed to install interrupt handler: {0}")]
    SignalHandler(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShotgunError {
    /// Configuration problems are reported and the process still exits cleanly.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ShotgunError::ArrayTooSmall { .. } | ShotgunError::ArrayTooLarge { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ShotgunError::ArrayTooSmall { min: 2, len: 1 };
        assert_eq!(err.to_string(), "Array must contain 2 or more elements!");
        assert!(err.is_config_error());

        let err = ShotgunError::ArrayTooLarge { max: 100, len: 101 };
        assert_eq!(
            err.to_string(),
            "The number of elements in the array cannot exceed 100."
        );
        assert!(err.is_config_error());

        let err = ShotgunError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert!(!err.is_config_error());
    }
}

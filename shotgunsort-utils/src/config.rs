use crate::error::ShotgunError;

pub const MIN_ARRAY_LEN: usize = 2;
pub const MAX_ARRAY_LEN: usize = 100;
pub const DEFAULT_ARRAY_LEN: usize = 5;

/// Settings for a single run, fixed once the run starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub array_len: usize,
    /// `None` keeps shuffling until the array is sorted or the run is interrupted.
    pub attempt_limit: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            array_len: DEFAULT_ARRAY_LEN,
            attempt_limit: None,
        }
    }
}

impl RunConfig {
    pub fn new(array_len: i64, attempt_limit: Option<u64>) -> Result<Self, ShotgunError> {
        if array_len < MIN_ARRAY_LEN as i64 {
            return Err(ShotgunError::ArrayTooSmall {
                min: MIN_ARRAY_LEN,
                len: array_len,
            });
        }
        if array_len > MAX_ARRAY_LEN as i64 {
            return Err(ShotgunError::ArrayTooLarge {
                max: MAX_ARRAY_LEN,
                len: array_len,
            });
        }

        Ok(Self {
            array_len: array_len as usize,
            attempt_limit,
        })
    }

    /// Reads a signed limit the way the command line accepts it: `-1` means
    /// unlimited, any other negative value stops after the first shuffle.
    pub fn attempt_limit_from_signed(limit: Option<i64>) -> Option<u64> {
        match limit {
            None | Some(-1) => None,
            Some(n) if n < 0 => Some(0),
            Some(n) => Some(n as u64),
        }
    }

    pub fn banner(&self) -> String {
        match self.attempt_limit {
            Some(limit) => format!(
                "Attempting to shotgun sort a {} element array in {} tries...",
                self.array_len, limit
            ),
            None => format!(
                "Attempting to shotgun sort a {} element array...",
                self.array_len
            ),
        }
    }
}

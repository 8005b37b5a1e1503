use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::ShotgunError;

/// Cancellation flag shared between the Ctrl-C handler and the attempt loop.
#[derive(Debug, Clone, Default)]
pub struct StopFlag {
    inner: Arc<AtomicBool>,
}

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a flag that is raised on SIGINT. Only one handler can be
    /// registered per process.
    pub fn install() -> Result<Self, ShotgunError> {
        let flag = Self::new();
        let flag_clone = flag.clone();
        ctrlc::set_handler(move || {
            log::info!("Interrupt received, ending the run after the current attempt");
            flag_clone.request_stop();
        })
        .map_err(|e| ShotgunError::SignalHandler(e.to_string()))?;
        Ok(flag)
    }

    pub fn request_stop(&self) {
        self.inner.store(true, Ordering::SeqCst);
    }

    pub fn should_stop(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }
}

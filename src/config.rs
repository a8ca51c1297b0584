use std::fmt;
use std::num::NonZeroUsize;

use crate::error::{Error, Result};
use crate::read::MethodTag;

pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// The single trimming mode applied to every read of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimConfig {
    Base { threshold: i32 },
    Window { threshold: i32, window_size: NonZeroUsize },
}

impl TrimConfig {
    pub fn base(threshold: i32) -> Self {
        TrimConfig::Base { threshold }
    }

    pub fn window(threshold: i32, window_size: usize) -> Result<Self> {
        let window_size = NonZeroUsize::new(window_size).ok_or(Error::UnderflowWindow)?;
        Ok(TrimConfig::Window {
            threshold,
            window_size,
        })
    }

    /// Build from the two optional thresholds a command line provides.
    /// Exactly one of them must be set.
    pub fn from_options(
        base_threshold: Option<i32>,
        window_threshold: Option<i32>,
        window_size: usize,
    ) -> Result<Self> {
        match (base_threshold, window_threshold) {
            (Some(threshold), None) => Ok(TrimConfig::base(threshold)),
            (None, Some(threshold)) => TrimConfig::window(threshold, window_size),
            (Some(_), Some(_)) => Err(Error::ConfigurationConflict(
                "base and window thresholds are mutually exclusive".to_string(),
            )),
            (None, None) => Err(Error::ConfigurationConflict(
                "one of base or window threshold is required".to_string(),
            )),
        }
    }

    pub fn method(&self) -> MethodTag {
        match self {
            TrimConfig::Base { .. } => MethodTag::Base,
            TrimConfig::Window { .. } => MethodTag::Window,
        }
    }
}

impl fmt::Display for TrimConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TrimConfig::Base { threshold } => {
                write!(f, "Base-by-base trimming with threshold {}", threshold)
            }
            TrimConfig::Window {
                threshold,
                window_size,
            } => write!(
                f,
                "Window-based trimming with threshold {} and window size {}",
                threshold, window_size
            ),
        }
    }
}

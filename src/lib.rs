// lib.rs - 质量修剪核心

pub mod config;
pub mod error;
pub mod fastq_io;
pub mod pipeline;
pub mod quality;
pub mod read;
pub mod report;
pub mod runner;
pub mod stats;
pub mod trim;

pub use config::TrimConfig;
pub use error::{Error, Result};
pub use pipeline::{run, TrimmingPipeline};
pub use read::{MethodTag, Read, TrimResult};
pub use stats::{PerSequenceRecord, RunStatistics, TrimStatsAccumulator};
pub use trim::{trim, trim_base, trim_window};

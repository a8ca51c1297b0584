//! Pull-based trimming over a stream of reads.
//!
//! ```
//! use fastq_quality_trimmer::{run, Read, TrimConfig};
//!
//! let reads = vec![
//!     Read::new("r1", "r1", b"ACGTACGT".to_vec(), vec![10, 10, 30, 30, 30, 30, 10, 10]),
//!     Read::new("r2", "r2", b"ACGT".to_vec(), vec![5, 5, 5, 5]),
//! ];
//! let mut pipeline = run(reads, TrimConfig::base(20));
//! let kept: Vec<Read> = pipeline.by_ref().collect::<Result<_, _>>().unwrap();
//! let stats = pipeline.finish();
//!
//! assert_eq!(kept[0].sequence(), b"GTAC");
//! assert_eq!(stats.total_sequences, 2);
//! assert_eq!(stats.discarded_sequences, 1);
//! ```

use tracing::debug;

use crate::config::TrimConfig;
use crate::error::Result;
use crate::read::{Read, TrimResult};
use crate::stats::{RunStatistics, TrimStatsAccumulator};
use crate::trim::trim;

/// Start a trimming run over `records`.
///
/// Nothing is read until the returned iterator is polled.
pub fn run<I>(records: I, config: TrimConfig) -> TrimmingPipeline<I::IntoIter>
where
    I: IntoIterator<Item = Result<Read>>,
{
    TrimmingPipeline::new(records.into_iter(), config)
}

/// Iterator yielding the surviving, trimmed reads of a run.
///
/// The first upstream error is yielded and ends the run.
pub struct TrimmingPipeline<I> {
    records: I,
    config: TrimConfig,
    accumulator: TrimStatsAccumulator,
    failed: bool,
}

impl<I> TrimmingPipeline<I>
where
    I: Iterator<Item = Result<Read>>,
{
    pub fn new(records: I, config: TrimConfig) -> Self {
        TrimmingPipeline {
            records,
            config,
            accumulator: TrimStatsAccumulator::new(),
            failed: false,
        }
    }

    pub fn config(&self) -> &TrimConfig {
        &self.config
    }

    /// Running totals for the reads consumed so far.
    pub fn stats(&self) -> &RunStatistics {
        self.accumulator.snapshot()
    }

    /// Final statistics. Only complete once the iterator is exhausted.
    pub fn finish(self) -> RunStatistics {
        self.accumulator.finish()
    }
}

impl<I> Iterator for TrimmingPipeline<I>
where
    I: Iterator<Item = Result<Read>>,
{
    type Item = Result<Read>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let read = match self.records.next()? {
                Ok(read) => read,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            };

            let outcome = trim(&read, &self.config);
            self.accumulator.record(&outcome, &read, self.config.method());

            match outcome {
                TrimResult::Kept { trimmed_read, .. } => return Some(Ok(trimmed_read)),
                TrimResult::Discarded => {
                    debug!(id = read.id(), len = read.len(), "discarded low-quality read");
                }
            }
        }
    }
}

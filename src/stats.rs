use crate::read::{MethodTag, Read, TrimResult};

/// Trimming details for one surviving read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerSequenceRecord {
    pub id: String,
    pub original_length: usize,
    pub trimmed_length: usize,
    pub bases_trimmed: usize,
    pub left_trim: usize,
    pub right_trim: usize,
    pub method: MethodTag,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStatistics {
    pub total_sequences: usize,
    pub discarded_sequences: usize,
    pub total_bases_trimmed: usize,
    pub total_bases_remaining: usize,
    /// Kept reads only, in arrival order.
    pub per_sequence: Vec<PerSequenceRecord>,
}

impl RunStatistics {
    pub fn kept_sequences(&self) -> usize {
        self.total_sequences - self.discarded_sequences
    }
}

/// Running totals for one pipeline run.
#[derive(Debug, Default)]
pub struct TrimStatsAccumulator {
    stats: RunStatistics,
}

impl TrimStatsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &TrimResult, original: &Read, method: MethodTag) {
        self.stats.total_sequences += 1;

        let TrimResult::Kept {
            trimmed_read,
            left_trim,
            right_trim,
        } = outcome
        else {
            self.stats.discarded_sequences += 1;
            return;
        };

        let original_length = original.len();
        let trimmed_length = trimmed_read.len();
        let bases_trimmed = original_length - trimmed_length;

        self.stats.total_bases_trimmed += bases_trimmed;
        self.stats.total_bases_remaining += trimmed_length;
        self.stats.per_sequence.push(PerSequenceRecord {
            id: original.id().to_string(),
            original_length,
            trimmed_length,
            bases_trimmed,
            left_trim: *left_trim,
            right_trim: *right_trim,
            method,
        });
    }

    /// Totals so far.
    pub fn snapshot(&self) -> &RunStatistics {
        &self.stats
    }

    pub fn finish(self) -> RunStatistics {
        self.stats
    }
}

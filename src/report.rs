use std::fmt;
use std::path::Path;

use crate::config::TrimConfig;
use crate::stats::RunStatistics;

/// Banner printed before a run starts.
pub struct RunBanner<'a> {
    pub input: &'a Path,
    pub config: &'a TrimConfig,
}

impl fmt::Display for RunBanner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Processing {} with:", self.input.display())?;
        writeln!(f, "  {}", self.config)
    }
}

/// Human-readable summary of a finished run.
pub struct Report<'a> {
    pub stats: &'a RunStatistics,
    pub output: &'a Path,
    pub show_details: bool,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let stats = self.stats;
        writeln!(f, "Trimming statistics:")?;
        writeln!(f, "  Total sequences processed: {}", stats.total_sequences)?;
        writeln!(
            f,
            "  Sequences discarded (all low quality): {}",
            stats.discarded_sequences
        )?;
        writeln!(f, "  Sequences kept: {}", stats.kept_sequences())?;
        writeln!(f, "  Total bases trimmed: {}", stats.total_bases_trimmed)?;
        writeln!(f, "  Total bases remaining: {}", stats.total_bases_remaining)?;
        writeln!(f)?;
        writeln!(f, "Trimmed sequences saved to {}", self.output.display())?;

        if !self.show_details {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "Trimming details:")?;
        for seq in &stats.per_sequence {
            writeln!(f, "  Sequence {}:", seq.id)?;
            writeln!(f, "    Original length: {}", seq.original_length)?;
            writeln!(f, "    Trimmed length: {}", seq.trimmed_length)?;
            writeln!(f, "    Bases trimmed: {}", seq.bases_trimmed)?;
            writeln!(f, "    Left trim ({}): {}", seq.method, seq.left_trim)?;
            writeln!(f, "    Right trim ({}): {}", seq.method, seq.right_trim)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

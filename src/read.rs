use std::fmt;

use crate::error::{Error, Result};

/// A sequencing read with one decoded Phred score per base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Read {
    id: String,
    description: String,
    sequence: Vec<u8>,
    qualities: Vec<u8>,
}

impl Read {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        sequence: Vec<u8>,
        qualities: Vec<u8>,
    ) -> Result<Self> {
        let id = id.into();
        if sequence.len() != qualities.len() {
            return Err(Error::InvalidRecord {
                id,
                sequence_len: sequence.len(),
                quality_len: qualities.len(),
            });
        }
        Ok(Read {
            id,
            description: description.into(),
            sequence,
            qualities,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Full header text after `@`, including the id.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    pub fn qualities(&self) -> &[u8] {
        &self.qualities
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Copy of the bases in `start..end`, keeping id and description.
    ///
    /// Panics if the range is out of bounds, like slice indexing.
    pub fn slice(&self, start: usize, end: usize) -> Read {
        Read {
            id: self.id.clone(),
            description: self.description.clone(),
            sequence: self.sequence[start..end].to_vec(),
            qualities: self.qualities[start..end].to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodTag {
    Base,
    Window,
}

impl fmt::Display for MethodTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MethodTag::Base => write!(f, "base"),
            MethodTag::Window => write!(f, "window"),
        }
    }
}

/// Outcome of trimming a single read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrimResult {
    Kept {
        trimmed_read: Read,
        left_trim: usize,
        right_trim: usize,
    },
    Discarded,
}

impl TrimResult {
    pub fn is_kept(&self) -> bool {
        matches!(self, TrimResult::Kept { .. })
    }
}

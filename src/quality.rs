//! Phred+33 quality encoding.

use crate::error::{Error, Result};

pub const PHRED_OFFSET: u8 = 33;
pub const MAX_SCORE: u8 = b'~' - PHRED_OFFSET;

/// Decode one quality character (`'!'..='~'`) into its Phred score.
pub fn decode(ch: u8) -> Result<u8> {
    if !(b'!'..=b'~').contains(&ch) {
        return Err(Error::InvalidQualityChar { ch: ch as char });
    }
    Ok(ch - PHRED_OFFSET)
}

/// Encode a Phred score (0..=93) as its quality character.
pub fn encode(score: u8) -> Result<u8> {
    if score > MAX_SCORE {
        return Err(Error::ScoreOutOfRange { score });
    }
    Ok(score + PHRED_OFFSET)
}

pub fn decode_all(line: &[u8]) -> Result<Vec<u8>> {
    line.iter().map(|&ch| decode(ch)).collect()
}

pub fn encode_all(scores: &[u8]) -> Result<Vec<u8>> {
    scores.iter().map(|&s| encode(s)).collect()
}

//! End-clipping quality trimmers.
//!
//! Both trimmers only ever remove bases from the two ends of a read, so a
//! kept read is always a contiguous slice of the original and
//! `left_trim + trimmed_len + right_trim == original_len`.

use std::num::NonZeroUsize;

use crate::config::TrimConfig;
use crate::read::{Read, TrimResult};

/// Trim a read with whichever trimmer `config` selects.
pub fn trim(read: &Read, config: &TrimConfig) -> TrimResult {
    match *config {
        TrimConfig::Base { threshold } => trim_base(read, threshold),
        TrimConfig::Window {
            threshold,
            window_size,
        } => trim_window(read, threshold, window_size),
    }
}

/// Clip bases scoring strictly below `threshold` from both ends.
///
/// A read with no base at or above the threshold (including an empty read)
/// is discarded.
pub fn trim_base(read: &Read, threshold: i32) -> TrimResult {
    let quals = read.qualities();
    let passes = |q: &u8| i32::from(*q) >= threshold;

    let Some(left) = quals.iter().position(passes) else {
        return TrimResult::Discarded;
    };
    // a passing base exists, so the reverse scan stops at or after `left`
    let right = quals.iter().rposition(passes).unwrap_or(left);

    TrimResult::Kept {
        trimmed_read: read.slice(left, right + 1),
        left_trim: left,
        right_trim: read.len() - right - 1,
    }
}

/// Clip leading and trailing windows whose mean score is below `threshold`.
///
/// The kept region runs from the start of the first window with mean
/// `>= threshold` to the end of the last such window. Reads shorter than
/// the window are discarded.
pub fn trim_window(read: &Read, threshold: i32, window_size: NonZeroUsize) -> TrimResult {
    let len = read.len();
    let w = window_size.get();
    if w > len {
        return TrimResult::Discarded;
    }

    let mut prefix = Vec::with_capacity(len + 1);
    prefix.push(0u64);
    let mut running = 0u64;
    for &q in read.qualities() {
        running += u64::from(q);
        prefix.push(running);
    }

    // mean >= threshold  <=>  sum >= threshold * w, without floating point
    let min_sum = i128::from(threshold) * w as i128;
    let window_passes = |start: usize| i128::from(prefix[start + w] - prefix[start]) >= min_sum;

    let left = (0..=len - w)
        .find(|&start| window_passes(start))
        .unwrap_or(len - w + 1);
    let right = (w..=len)
        .rev()
        .find(|&end| window_passes(end - w))
        .unwrap_or(w - 1);

    // left > right - w, rearranged to stay in unsigned arithmetic
    if left + w > right {
        return TrimResult::Discarded;
    }

    TrimResult::Kept {
        trimmed_read: read.slice(left, right),
        left_trim: left,
        right_trim: len - right,
    }
}

//! Top-N selection over a [`WordCount`].
//!
//! Selection is a two-stage sort: rank everything by count, cut at N, then
//! re-sort the survivors alphabetically for display.

use std::cmp::Ordering;

use itertools::Itertools;
use tracing::debug;

use crate::cloud_types::{RankedEntry, WordCount};
use crate::error::{CloudError, Result};

/// Count descending, then word descending.
pub fn by_count_desc(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.count.cmp(&a.count).then_with(|| b.word.cmp(&a.word))
}

/// Word ascending, then count ascending.
pub fn by_word_asc(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    a.word.cmp(&b.word).then_with(|| a.count.cmp(&b.count))
}

/// The `n` most frequent words of `counts`, in alphabetical order.
///
/// Fails with [`CloudError::InvalidCount`] when `n` exceeds the number of
/// distinct words.
pub fn select_top(counts: &WordCount, n: usize) -> Result<Vec<RankedEntry>> {
    if n > counts.len() {
        return Err(CloudError::invalid_count(n, counts.len()));
    }

    let selected: Vec<RankedEntry> = counts
        .iter()
        .map(|(word, count)| RankedEntry::new(word, count))
        .sorted_by(by_count_desc)
        .take(n)
        .sorted_by(by_word_asc)
        .collect();

    debug!(requested = n, available = counts.len(), "selected top words");
    Ok(selected)
}

use std::io::{BufRead, Write};

use tracing::info;

use crate::cloud_types::{RankedEntry, WordCount};
use crate::config::{CloudConfig, OutputFormat};
use crate::error::Result;
use crate::render::{CloudReport, render_html, render_json};
use crate::select::select_top;
use crate::wc::count_words;

/// A counted document waiting for a cloud size.
///
/// Counting and rendering are split so a caller can look at
/// [`Document::distinct_words`] before choosing how many words to show.
#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    counts: WordCount,
}

impl Document {
    /// Read and count `reader`. `title` names the document in the rendered page.
    pub fn read<R: BufRead>(reader: R, title: impl Into<String>) -> Result<Self> {
        Ok(Self::from_counts(count_words(reader)?, title))
    }

    pub fn from_counts(counts: WordCount, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            counts,
        }
    }

    pub fn counts(&self) -> &WordCount {
        &self.counts
    }

    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }

    pub fn select(&self, n: usize) -> Result<Vec<RankedEntry>> {
        select_top(&self.counts, n)
    }

    /// Select the top `n` words and write them to `out` in `config.format`.
    pub fn render<W: Write>(&self, n: usize, config: &CloudConfig, out: &mut W) -> Result<()> {
        config.validate()?;
        let entries = self.select(n)?;
        match config.format {
            OutputFormat::Html => render_html(&entries, n, &self.title, config, out)?,
            OutputFormat::Json => {
                let report = CloudReport::new(&entries, n, &self.title, &self.counts, config);
                render_json(&report, out)?
            }
        }
        info!(
            title = %self.title,
            words = entries.len(),
            format = ?config.format,
            "wrote tag cloud"
        );
        Ok(())
    }
}

/// Count `input`, pick the top `n` words and render them to `out`.
pub fn generate<R: BufRead, W: Write>(
    input: R,
    n: usize,
    title: &str,
    config: &CloudConfig,
    out: &mut W,
) -> Result<()> {
    Document::read(input, title)?.render(n, config, out)
}

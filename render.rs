//! Markup output for a selected set of words.
//!
//! [`render_html`] writes the tag cloud page. [`render_json`] writes the same
//! selection as a machine-readable report. Both borrow the sink and leave
//! closing it to the caller.

use std::io::{self, Write};

use itertools::Itertools;
use serde::Serialize;
use tracing::debug;

use crate::cloud_types::{RankedEntry, WordCount};
use crate::config::CloudConfig;
use crate::error::{CloudError, Result};

/// Font-size class for `count` within the selection's `[min, max]` count range.
///
/// Scales linearly from `config.min_font` to `config.max_font` and truncates.
/// A flat range (`min == max`) always maps to the minimum size.
pub fn font_size(count: u64, min: u64, max: u64, config: &CloudConfig) -> u32 {
    if max == min {
        return config.min_font;
    }
    let ratio = (count as f64 - min as f64) / (max as f64 - min as f64);
    let span = f64::from(config.max_font.saturating_sub(config.min_font));
    (ratio * span + f64::from(config.min_font)) as u32
}

/// `(min, max)` count over the entries, `None` for an empty selection.
fn count_range(entries: &[RankedEntry]) -> Option<(u64, u64)> {
    entries.iter().map(|e| e.count).minmax().into_option()
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Write the tag cloud page for `entries` to `out`.
///
/// `requested` is the cloud size shown in the title and heading, and `title`
/// names the source document. Entries are emitted in the order given.
pub fn render_html<W: Write>(
    entries: &[RankedEntry],
    requested: usize,
    title: &str,
    config: &CloudConfig,
    out: &mut W,
) -> Result<()> {
    config.validate()?;
    write_page(entries, requested, title, config, out).map_err(CloudError::OutputWrite)?;
    debug!(words = entries.len(), "rendered html cloud");
    Ok(())
}

fn write_page<W: Write>(
    entries: &[RankedEntry],
    requested: usize,
    title: &str,
    config: &CloudConfig,
    out: &mut W,
) -> io::Result<()> {
    let title = html_escape(title);

    // beginning tags
    writeln!(out, "<html>")?;
    writeln!(out, "\t<head>")?;
    writeln!(out, "\t\t<title>{requested} words in {title}</title>")?;
    writeln!(
        out,
        "\t\t<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">",
        html_escape(config.stylesheet_url.as_str())
    )?;
    writeln!(
        out,
        "\t\t<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">",
        html_escape(&config.local_stylesheet)
    )?;
    writeln!(out, "\t</head>")?;
    writeln!(out, "\t<body>")?;
    writeln!(out, "\t\t<h2>Top {requested} words in {title}</h2>")?;
    writeln!(out, "\t\t<hr>")?;
    writeln!(out, "\t\t<div class=\"cdiv\">")?;
    writeln!(out, "\t\t\t<p class=\"cbox\">")?;

    if let Some((min, max)) = count_range(entries) {
        for entry in entries {
            let size = font_size(entry.count, min, max, config);
            writeln!(
                out,
                "\t\t\t\t<span style=\"cursor:default\" class=\"f{size}\" title=\"count: {}\">{}</span>",
                entry.count,
                html_escape(&entry.word)
            )?;
        }
    }

    // ending tags
    writeln!(out, "\t\t\t</p>")?;
    writeln!(out, "\t\t</div>")?;
    writeln!(out, "\t</body>")?;
    writeln!(out, "</html>")?;
    out.flush()
}

/// One word of a [`CloudReport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub word: String,
    pub count: u64,
    pub font_size: u32,
}

/// JSON form of a rendered cloud
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloudReport {
    pub title: String,
    pub requested: usize,
    pub distinct_words: usize,
    pub total_words: u64,
    pub entries: Vec<ReportEntry>,
}

impl CloudReport {
    pub fn new(
        entries: &[RankedEntry],
        requested: usize,
        title: &str,
        counts: &WordCount,
        config: &CloudConfig,
    ) -> Self {
        let entries = match count_range(entries) {
            Some((min, max)) => entries
                .iter()
                .map(|e| ReportEntry {
                    word: e.word.clone(),
                    count: e.count,
                    font_size: font_size(e.count, min, max, config),
                })
                .collect(),
            None => Vec::new(),
        };
        Self {
            title: title.to_string(),
            requested,
            distinct_words: counts.len(),
            total_words: counts.total(),
            entries,
        }
    }
}

/// Write `report` as pretty-printed JSON followed by a newline.
pub fn render_json<W: Write>(report: &CloudReport, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).map_err(|e| {
        if e.is_io() {
            CloudError::OutputWrite(e.into())
        } else {
            CloudError::Serialization(e)
        }
    })?;
    writeln!(out).and_then(|()| out.flush()).map_err(CloudError::OutputWrite)?;
    debug!(words = report.entries.len(), "rendered json report");
    Ok(())
}

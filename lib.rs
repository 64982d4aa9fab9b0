//! Word-frequency tag clouds.
//!
//! A document is tokenized on a fixed separator set and counted
//! case-insensitively ([`wc`]). The N most frequent words are picked and put
//! in alphabetical order ([`select`]). They are then written as an HTML page
//! whose font-size classes scale with frequency ([`render`]).
//!
//! ```
//! use tag_cloud::{CloudConfig, generate};
//!
//! let mut page = Vec::new();
//! generate("the cat sat. The CAT ran!".as_bytes(), 2, "story.txt", &CloudConfig::default(), &mut page)?;
//! let page = String::from_utf8(page).unwrap();
//! assert!(page.contains(">cat</span>"));
//! # Ok::<(), tag_cloud::CloudError>(())
//! ```

pub mod cloud_types;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod prompt;
pub mod render;
pub mod select;
pub mod wc;

pub use cloud_types::{RankedEntry, WordCount};
pub use config::{CloudConfig, OutputFormat};
pub use error::{CloudError, Result};
pub use pipeline::{Document, generate};

//! Frontmatter splitting and parsing.
//!
//! A document opens with a `---` line (an optional BOM before it is fine),
//! carries YAML up to a closing `---` or `...` line, and the rest is body.

use serde::de::DeserializeOwned;

/// Why a document could not be split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    /// The first line is not a `---` fence.
    Missing,
    /// No closing fence follows the opening one.
    Unterminated,
}

/// A document split into its metadata block and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document<'a> {
    /// Raw YAML between the fences.
    pub metadata: &'a str,
    /// Everything after the closing fence.
    pub body: &'a str,
}

impl<'a> Document<'a> {
    /// Split `input` at its frontmatter fences.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError`] if the opening or closing fence is missing.
    pub fn split(input: &'a str) -> Result<Self, SplitError> {
        let input = input.trim_start_matches('\u{feff}');
        let mut lines = input.split_inclusive('\n');

        let first = lines.next().ok_or(SplitError::Missing)?;
        if first.trim_end() != "---" {
            return Err(SplitError::Missing);
        }

        let start = first.len();
        let mut offset = start;
        for line in lines {
            let trimmed = line.trim_end();
            if trimmed == "---" || trimmed == "..." {
                return Ok(Self {
                    metadata: &input[start..offset],
                    body: &input[offset + line.len()..],
                });
            }
            offset += line.len();
        }

        Err(SplitError::Unterminated)
    }

    /// Deserialize the metadata block.
    ///
    /// An empty block deserializes as an empty mapping, so types with
    /// `#[serde(default)]` come back with their defaults.
    ///
    /// # Errors
    ///
    /// Returns the YAML error if the block does not fit `T`.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, serde_yaml::Error> {
        if self.metadata.trim().is_empty() {
            serde_yaml::from_str("{}")
        } else {
            serde_yaml::from_str(self.metadata)
        }
    }
}

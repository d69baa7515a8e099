//! `git ls-tree` listing records.
//!
//! The repository tree is built from the output of `git ls-tree -r -t`,
//! either as JSON records or as the raw text format:
//!
//! ```text
//! 040000 tree 9c1e0d6a...	src
//! 100644 blob 4b825dc6...	src/lib.rs
//! ```

use std::str::FromStr;

use serde::Deserialize;

use crate::core::error::TreeError;

/// Git object type of a listing record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Blob,
    Tree,
    /// Submodule reference
    Commit,
}

impl FromStr for ObjectType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blob" => Ok(Self::Blob),
            "tree" => Ok(Self::Tree),
            "commit" => Ok(Self::Commit),
            _ => Err(()),
        }
    }
}

/// A single `git ls-tree` record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LsTreeElement {
    /// File mode, e.g. `100644`
    pub mode: String,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    /// Object id (hex)
    pub object: String,
    /// Repository-relative path
    pub file: String,
}

#[cfg(test)]
impl LsTreeElement {
    pub fn blob(file: impl Into<String>) -> Self {
        Self {
            mode: "100644".into(),
            object_type: ObjectType::Blob,
            object: String::new(),
            file: file.into(),
        }
    }

    pub fn tree(file: impl Into<String>) -> Self {
        Self {
            mode: "040000".into(),
            object_type: ObjectType::Tree,
            object: String::new(),
            file: file.into(),
        }
    }
}

impl FromStr for LsTreeElement {
    type Err = TreeError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let invalid = || TreeError::InvalidLine(line.to_string());

        let (meta, file) = line.split_once('\t').ok_or_else(invalid)?;
        let mut fields = meta.split_whitespace();
        let (Some(mode), Some(kind), Some(object), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(invalid());
        };
        let object_type = kind.parse().map_err(|_| invalid())?;
        if file.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            mode: mode.to_string(),
            object_type,
            object: object.to_string(),
            file: file.to_string(),
        })
    }
}

/// Parse the text output of `git ls-tree`, skipping blank lines.
pub fn parse_ls_tree(text: &str) -> Result<Vec<LsTreeElement>, TreeError> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Parse a JSON array of listing records.
pub fn parse_listing_json(json: &str) -> Result<Vec<LsTreeElement>, TreeError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a listing in either format. JSON listings start with `[`.
pub fn parse_listing(listing: &str) -> Result<Vec<LsTreeElement>, TreeError> {
    if listing.trim_start().starts_with('[') {
        parse_listing_json(listing)
    } else {
        parse_ls_tree(listing)
    }
}

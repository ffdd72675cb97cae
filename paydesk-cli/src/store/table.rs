//! Flat-file tabular storage
//!
//! Low-level CSV codec and file I/O behind the roster and ledger stores.
//!
//! # Durability
//!
//! Every persist writes the full table to a sibling temp file and renames
//! it over the target, so a failed write (disk full, file locked by
//! another program) leaves the previous on-disk contents untouched. There
//! is no cross-process coordination: the design assumes one interactive
//! operator per process, last-write-wins at the OS level.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Error reading file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not save '{path}'. Is the file open in another program? ({source})")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed table '{path}': {reason}")]
    Malformed { path: PathBuf, reason: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// One CSV table file with a fixed column schema
#[derive(Debug, Clone)]
pub struct TableFile {
    path: PathBuf,
    columns: &'static [&'static str],
}

impl TableFile {
    pub fn new(path: impl Into<PathBuf>, columns: &'static [&'static str]) -> Self {
        Self {
            path: path.into(),
            columns,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the full table.
    ///
    /// An absent file is an empty table, not an error. A present file must
    /// carry the expected header and consistent row widths.
    pub fn load(&self) -> StoreResult<Vec<Vec<String>>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        let mut lines = contents.lines();
        let Some(header) = lines.next() else {
            return Ok(Vec::new());
        };
        self.check_header(header)?;

        let mut rows = Vec::new();
        for (idx, line) in lines.enumerate() {
            if line.is_empty() {
                continue;
            }
            let fields = split_line(line);
            if fields.len() != self.columns.len() {
                return Err(StoreError::Malformed {
                    path: self.path.clone(),
                    reason: format!(
                        "row {} has {} fields, expected {}",
                        idx + 2,
                        fields.len(),
                        self.columns.len()
                    ),
                });
            }
            rows.push(fields);
        }

        Ok(rows)
    }

    /// Overwrite the full table.
    pub fn persist(&self, rows: &[Vec<String>]) -> StoreResult<()> {
        let mut out = String::new();
        out.push_str(&self.columns.join(","));
        out.push('\n');
        for row in rows {
            let encoded: Vec<String> = row.iter().map(|f| escape_field(f)).collect();
            out.push_str(&encoded.join(","));
            out.push('\n');
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, &out).map_err(|source| StoreError::Persist {
            path: self.path.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| {
            let _ = fs::remove_file(&tmp);
            StoreError::Persist {
                path: self.path.clone(),
                source,
            }
        })?;

        Ok(())
    }

    fn check_header(&self, header: &str) -> StoreResult<()> {
        let fields = split_line(header);
        let matches = fields.len() == self.columns.len()
            && fields.iter().zip(self.columns).all(|(a, b)| a == b);
        if !matches {
            return Err(StoreError::Malformed {
                path: self.path.clone(),
                reason: format!("header '{header}' does not match [{}]", self.columns.join(", ")),
            });
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("table"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Escape a CSV field (handle commas, quotes, newlines)
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Split one CSV line into fields, honoring quoted fields and `""` escapes
fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

//! Play reference data and the catalog performances are priced against.

use crate::error::{Result, StatementError};
use csv::{ReaderBuilder, Trim};
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::str::FromStr;

/// A play as listed in the catalog.
///
/// `kind` keeps the raw genre label so catalogs may carry genres this crate
/// does not price yet; it is resolved into a [`PlayType`] only when a
/// performance of the play is billed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play {
    /// Display name used on statement lines.
    pub name: String,

    /// Genre label, e.g. `tragedy` or `comedy`.
    pub kind: String,
}

impl Play {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Play {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Resolves the genre label into a priced genre.
    pub fn play_type(&self) -> Result<PlayType> {
        self.kind.parse()
    }
}

/// Genres with a pricing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayType {
    Tragedy,
    Comedy,
}

impl FromStr for PlayType {
    type Err = StatementError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "tragedy" => Ok(PlayType::Tragedy),
            "comedy" => Ok(PlayType::Comedy),
            other => Err(StatementError::UnknownPlayType(other.to_string())),
        }
    }
}

impl fmt::Display for PlayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayType::Tragedy => f.write_str("tragedy"),
            PlayType::Comedy => f.write_str("comedy"),
        }
    }
}

/// Raw catalog row as read from CSV.
#[derive(Debug, Deserialize)]
struct PlayRecord {
    id: String,
    name: String,
    #[serde(rename = "type")]
    kind: String,
}

/// Plays indexed by play id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayCatalog {
    plays: HashMap<String, Play>,
}

impl PlayCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        PlayCatalog {
            plays: HashMap::new(),
        }
    }

    /// Reads a catalog from CSV with the header `id,name,type`.
    ///
    /// Loading stops at the first bad row: a blank id or name is an
    /// [`StatementError::InvalidRecord`], a repeated id is a
    /// [`StatementError::DuplicatePlayId`]. Genre labels are not checked here.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let mut catalog = PlayCatalog::new();

        for (row_idx, result) in csv_reader.deserialize::<PlayRecord>().enumerate() {
            let row = row_idx + 2; // 1-indexed, accounting for header row
            let record = result.map_err(|e| StatementError::from_csv_row(e, row))?;

            if record.id.is_empty() {
                return Err(StatementError::InvalidRecord {
                    row,
                    message: "play id is empty".to_string(),
                });
            }
            if record.name.is_empty() {
                return Err(StatementError::InvalidRecord {
                    row,
                    message: format!("play {} has no name", record.id),
                });
            }
            if catalog.contains(&record.id) {
                return Err(StatementError::DuplicatePlayId {
                    play_id: record.id,
                    row,
                });
            }

            debug!("Row {}: Loaded play {} ({})", row, record.id, record.kind);
            catalog.insert(record.id, Play::new(record.name, record.kind));
        }

        Ok(catalog)
    }

    /// Adds or replaces a play, returning the previous entry for that id.
    pub fn insert(&mut self, play_id: impl Into<String>, play: Play) -> Option<Play> {
        self.plays.insert(play_id.into(), play)
    }

    /// Looks up a play, failing with [`StatementError::UnknownPlay`] when absent.
    pub fn get(&self, play_id: &str) -> Result<&Play> {
        self.plays
            .get(play_id)
            .ok_or_else(|| StatementError::UnknownPlay(play_id.to_string()))
    }

    pub fn contains(&self, play_id: &str) -> bool {
        self.plays.contains_key(play_id)
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Play)> for PlayCatalog {
    fn from_iter<I: IntoIterator<Item = (K, Play)>>(iter: I) -> Self {
        PlayCatalog {
            plays: iter
                .into_iter()
                .map(|(id, play)| (id.into(), play))
                .collect(),
        }
    }
}

//! Load season records from JSON or YAML.
//!
//! The record set is read once at startup and never mutated afterwards.
//! Suspicious records (non-numeric seasons, repeated ranks) are logged but
//! kept: the data is trusted input.

pub mod error;

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::data::error::DataError;
use crate::model::SeasonRecord;

/// The sample dataset compiled into the binary.
pub const BUNDLED_SEASONS: &str = include_str!("../../data/seasons.json");

/// Pseudo-path reported in errors and logs for the bundled dataset.
pub const BUNDLED_PATH: &str = "<bundled>/seasons.json";

/// Serialized formats accepted for a season file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// `.yaml` / `.yml` read as YAML, anything else as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Load the season file at `path`, or the bundled dataset when `None`.
pub fn load_seasons(path: Option<&Path>) -> Result<Vec<SeasonRecord>, DataError> {
    let records = match path {
        Some(path) => {
            if !path.exists() {
                return Err(DataError::NotFound(path.to_path_buf()));
            }
            let content = std::fs::read_to_string(path).map_err(|e| DataError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
            parse_seasons(&content, Format::from_path(path), path)?
        }
        None => bundled_seasons()?,
    };

    info!(
        source = %path.map(|p| p.display().to_string()).unwrap_or_else(|| BUNDLED_PATH.into()),
        records = records.len(),
        "loaded season data"
    );
    Ok(records)
}

pub fn bundled_seasons() -> Result<Vec<SeasonRecord>, DataError> {
    parse_seasons(BUNDLED_SEASONS, Format::Json, Path::new(BUNDLED_PATH))
}

/// Parse a season list. `origin` is only used for diagnostics.
pub fn parse_seasons(
    content: &str,
    format: Format,
    origin: &Path,
) -> Result<Vec<SeasonRecord>, DataError> {
    let invalid = |message: String| DataError::Invalid {
        path: origin.to_path_buf(),
        message,
    };

    let records: Vec<SeasonRecord> = match format {
        Format::Json => serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?,
        Format::Yaml => serde_yaml::from_str(content).map_err(|e| invalid(e.to_string()))?,
    };

    audit(&records);
    debug!(origin = %origin.display(), ?format, records = records.len(), "parsed seasons");
    Ok(records)
}

fn audit(records: &[SeasonRecord]) {
    let mut ranks = HashSet::new();
    for record in records {
        if record.year().is_none() {
            warn!(
                rank = record.rank,
                season = %record.season,
                "season is not a year; record will only match the All era"
            );
        }
        if !ranks.insert(record.rank) {
            warn!(rank = record.rank, player = %record.player, "duplicate rank");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("s.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("s.YML")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("s.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("seasons")), Format::Json);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
- rank: 1
  score: 95.5
  player: A
  season: "2021"
  team: X
  mvpFinish: 1st
  anyaPlus: 10
  ydsLeader: true
"#;
        let records = parse_seasons(yaml, Format::Yaml, Path::new("t.yaml")).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].player, "A");
        assert!(records[0].yds_leader);
    }

    #[test]
    fn test_parse_empty_list() {
        let records = parse_seasons("[]", Format::Json, Path::new("t.json")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_invalid_json_names_origin() {
        let err = parse_seasons("{ not json", Format::Json, Path::new("bad.json")).unwrap_err();
        match err {
            DataError::Invalid { path, .. } => assert_eq!(path, PathBuf::from("bad.json")),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_required_field_is_invalid() {
        let json = r#"[{ "rank": 1, "score": 90.0 }]"#;
        assert!(matches!(
            parse_seasons(json, Format::Json, Path::new("t.json")),
            Err(DataError::Invalid { .. })
        ));
    }
}

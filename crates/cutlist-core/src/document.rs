// crates/cutlist-core/src/document.rs
//
// Persisted cut-list document and its two-pass validation.
//
// Shape on disk:
//
//   {
//     "source_path":           "/videos/talk.mp4",
//     "destination_directory": "/videos/cuts",
//     "intervals": [ [[0,0,0],[0,1,30]], [[0,2,0],[0,3,0]] ]
//   }
//
// Pass 1 (structural): the JSON is an object with the three fields, strings
// where strings belong and non-negative integer triples for the intervals.
// Pass 2 (temporal): every triple is a valid Timecode and begin <= end.
// A single bad interval rejects the whole document.
//
// Older files are still accepted on load:
//   path_src / path_dst_dir       — earlier key names
//   src_path_dir + src_filename   — source path split in two
// Saving always writes the canonical keys above.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LoadError;
use crate::interval::{Interval, IntervalTriples};

/// The document exactly as stored, before temporal validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawDocument {
    pub source_path:           String,
    pub destination_directory: String,
    pub intervals:             Vec<IntervalTriples>,
}

/// Everything the loader will look at. Unknown keys are ignored.
#[derive(Deserialize)]
struct WireDocument {
    #[serde(alias = "path_src")]
    source_path:           Option<String>,
    src_path_dir:          Option<String>,
    src_filename:          Option<String>,
    #[serde(alias = "path_dst_dir")]
    destination_directory: Option<String>,
    intervals:             Option<Vec<IntervalTriples>>,
}

impl WireDocument {
    fn into_raw(self) -> Result<RawDocument, LoadError> {
        let source_path = match (self.source_path, self.src_path_dir, self.src_filename) {
            (Some(path), _, _)             => path,
            (None, Some(dir), Some(name))  => Path::new(&dir).join(name).to_string_lossy().into_owned(),
            _                              => return Err(missing("source_path")),
        };
        Ok(RawDocument {
            source_path,
            destination_directory: self.destination_directory.ok_or_else(|| missing("destination_directory"))?,
            intervals:             self.intervals.ok_or_else(|| missing("intervals"))?,
        })
    }
}

fn missing(field: &str) -> LoadError {
    LoadError::Schema(format!("missing field `{field}`"))
}

/// Parse text into a JSON value. Only syntax problems fail here.
pub fn parse(text: &str) -> Result<Value, LoadError> {
    serde_json::from_str(text).map_err(LoadError::Parse)
}

/// Structural pass only.
pub fn read_structure(value: &Value) -> Result<RawDocument, LoadError> {
    if !value.is_object() {
        return Err(LoadError::Schema("expected a JSON object at the top level".into()));
    }
    WireDocument::deserialize(value)
        .map_err(|e| LoadError::Schema(e.to_string()))?
        .into_raw()
}

/// Temporal pass: materialize every interval or report the first bad one.
pub fn check_intervals(raw: &RawDocument) -> Result<Vec<Interval>, LoadError> {
    raw.intervals
        .iter()
        .enumerate()
        .map(|(index, triples)| {
            Interval::from_triples(*triples).map_err(|source| LoadError::Temporal { index, source })
        })
        .collect()
}

/// Both passes. On success returns the raw document and its materialized
/// intervals, in order.
pub fn validate_value(value: &Value) -> Result<(RawDocument, Vec<Interval>), LoadError> {
    let raw = read_structure(value)?;
    let intervals = check_intervals(&raw)?;
    Ok((raw, intervals))
}

/// Boolean form of [`validate_value`] for callers that only need a yes/no.
pub fn is_valid(value: &Value) -> bool {
    validate_value(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::error::IntervalError;

    fn good() -> Value {
        json!({
            "source_path": "/v/in.mp4",
            "destination_directory": "/v/out",
            "intervals": [ [[0,0,0],[0,1,30]], [[0,2,0],[0,3,0]] ]
        })
    }

    #[test]
    fn canonical_document_passes_both_passes() {
        let (raw, intervals) = validate_value(&good()).unwrap();
        assert_eq!(raw.source_path, "/v/in.mp4");
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].end().as_secs(), 90);
    }

    #[test]
    fn syntax_error_is_a_parse_error() {
        assert!(matches!(parse("{\"source_path\": "), Err(LoadError::Parse(_))));
        assert!(matches!(parse("{} trailing"),        Err(LoadError::Parse(_))));
    }

    #[test]
    fn wrong_shapes_are_schema_errors() {
        let cases = [
            json!([]),
            json!("text"),
            json!({ "destination_directory": "", "intervals": [] }),
            json!({ "source_path": "", "intervals": [] }),
            json!({ "source_path": "", "destination_directory": "" }),
            json!({ "source_path": 3, "destination_directory": "", "intervals": [] }),
            json!({ "source_path": "", "destination_directory": "", "intervals": {} }),
            json!({ "source_path": "", "destination_directory": "", "intervals": [[[0,0,0]]] }),
            json!({ "source_path": "", "destination_directory": "", "intervals": [[[0,0],[0,0,1]]] }),
            json!({ "source_path": "", "destination_directory": "", "intervals": [[[0,0,-1],[0,0,1]]] }),
            json!({ "source_path": "", "destination_directory": "", "intervals": [[[0,0,1.5],[0,0,2]]] }),
        ];
        for case in cases {
            assert!(
                matches!(validate_value(&case), Err(LoadError::Schema(_))),
                "expected schema error for {case}"
            );
        }
    }

    #[test]
    fn inverted_interval_is_temporal_with_index() {
        let doc = json!({
            "source_path": "", "destination_directory": "",
            "intervals": [ [[0,0,0],[0,0,1]], [[0,0,5],[0,0,3]] ]
        });
        match validate_value(&doc) {
            Err(LoadError::Temporal { index: 1, source: IntervalError::Inverted { .. } }) => {}
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn minute_61_is_temporal() {
        let doc = json!({
            "source_path": "", "destination_directory": "",
            "intervals": [ [[0,61,0],[1,0,0]] ]
        });
        assert!(matches!(
            validate_value(&doc),
            Err(LoadError::Temporal { index: 0, source: IntervalError::Endpoint(_) })
        ));
        assert!(!is_valid(&doc));
    }

    #[test]
    fn legacy_key_names_are_accepted() {
        let doc = json!({ "path_src": "a.mkv", "path_dst_dir": "out", "intervals": [] });
        let raw = read_structure(&doc).unwrap();
        assert_eq!(raw.source_path, "a.mkv");
        assert_eq!(raw.destination_directory, "out");
    }

    #[test]
    fn split_source_path_is_joined() {
        let doc = json!({
            "src_path_dir": "videos", "src_filename": "a.mkv",
            "destination_directory": "out", "intervals": []
        });
        let raw = read_structure(&doc).unwrap();
        assert_eq!(raw.source_path, Path::new("videos").join("a.mkv").to_string_lossy());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut doc = good();
        doc["comment"] = json!("made by hand");
        assert!(is_valid(&doc));
    }
}

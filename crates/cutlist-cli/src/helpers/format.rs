// crates/cutlist-cli/src/helpers/format.rs
//
// Terminal string utilities for the `show` listing.
//
// Time formatting lives in cutlist_core::helpers::time and Timecode's
// Display — use those for anything involving seconds. This module only lays
// rows out for a terminal.

use cutlist_core::helpers::time::format_duration;
use cutlist_core::{CutList, Interval};

/// One listing row: `index  begin  end  (duration)`, index right-aligned to
/// `width` columns.
pub fn interval_row(index: usize, iv: &Interval, width: usize) -> String {
    format!(
        "{index:>width$}  {}  {}  ({})",
        iv.begin(),
        iv.end(),
        format_duration(iv.duration()),
    )
}

/// Header plus one row per interval.
pub fn listing(list: &CutList) -> Vec<String> {
    let width = list.len().saturating_sub(1).to_string().len();
    let mut lines = vec![
        format!("source:      {}", or_unset(&list.source_path)),
        format!("destination: {}", or_unset(&list.destination_directory)),
    ];
    if list.is_empty() {
        lines.push("(no intervals)".into());
    }
    lines.extend(list.iter().enumerate().map(|(i, iv)| interval_row(i, iv, width)));
    lines
}

fn or_unset(s: &str) -> &str {
    if s.is_empty() { "<unset>" } else { s }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutlist_core::Timecode;

    #[test]
    fn row_layout() {
        let iv = Interval::new(Timecode::from_secs(65), Timecode::from_secs(250)).unwrap();
        assert_eq!(interval_row(3, &iv, 2), " 3  00:01:05  00:04:10  (3:05)");
    }

    #[test]
    fn empty_listing_marks_unset_fields() {
        let lines = listing(&CutList::default());
        assert_eq!(lines, vec![
            "source:      <unset>",
            "destination: <unset>",
            "(no intervals)",
        ]);
    }

    #[test]
    fn index_column_grows_with_row_count() {
        let mut list = CutList::new("a.mp4", "out");
        for i in 0..11 {
            list.push(Timecode::from_secs(i), Timecode::from_secs(i + 1)).unwrap();
        }
        let lines = listing(&list);
        assert!(lines[2].starts_with(" 0  "));
        assert!(lines[12].starts_with("10  "));
    }
}

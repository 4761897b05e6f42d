// crates/cutlist-core/src/commands.rs
//
// Every user edit of a cut list is expressed as an EditCommand.
// Frontends build these; CutList::apply processes them.
// Adding a new edit = add a variant here + one match arm in apply().

use crate::error::Result;
use crate::state::CutList;
use crate::timecode::Timecode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    // ── Rows ─────────────────────────────────────────────────────────────────
    Append { begin: Timecode, end: Timecode },
    /// Insert before `index`; `index == len` appends.
    Insert { index: usize, begin: Timecode, end: Timecode },
    Remove(usize),
    /// `None` leaves that bound unchanged.
    SetBounds { index: usize, begin: Option<Timecode>, end: Option<Timecode> },
    /// Move one row; negative offsets move toward the top.
    Move { index: usize, offset: isize },
    Clear,

    // ── Metadata ─────────────────────────────────────────────────────────────
    SetSource(String),
    SetDestination(String),
}

impl CutList {
    /// Apply one edit. On error the list is unchanged.
    pub fn apply(&mut self, command: EditCommand) -> Result<()> {
        match command {
            EditCommand::Append { begin, end }         => self.push(begin, end),
            EditCommand::Insert { index, begin, end }  => self.insert(index, begin, end),
            EditCommand::Remove(index)                 => self.remove(index).map(drop),
            EditCommand::SetBounds { index, begin, end } => self.set_bounds(index, begin, end),
            EditCommand::Move { index, offset }        => self.move_by(index, offset),
            EditCommand::Clear => {
                self.clear();
                Ok(())
            }
            EditCommand::SetSource(path) => {
                self.source_path = path;
                Ok(())
            }
            EditCommand::SetDestination(dir) => {
                self.destination_directory = dir;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EditError;

    fn secs(n: u64) -> Timecode {
        Timecode::from_secs(n)
    }

    #[test]
    fn sequence_of_commands() {
        let mut list = CutList::default();
        let script = vec![
            EditCommand::SetSource("talk.mp4".into()),
            EditCommand::SetDestination("cuts".into()),
            EditCommand::Append { begin: secs(0), end: secs(90) },
            EditCommand::Append { begin: secs(120), end: secs(180) },
            EditCommand::Insert { index: 1, begin: secs(100), end: secs(110) },
            EditCommand::Move { index: 2, offset: -2 },
            EditCommand::SetBounds { index: 0, begin: None, end: Some(secs(200)) },
            EditCommand::Remove(1),
        ];
        for cmd in script {
            list.apply(cmd).unwrap();
        }
        assert_eq!(list.source_path, "talk.mp4");
        assert_eq!(list.destination_directory, "cuts");
        let rows: Vec<(u64, u64)> = list.iter()
            .map(|iv| (iv.begin().as_secs(), iv.end().as_secs()))
            .collect();
        assert_eq!(rows, vec![(120, 200), (100, 110)]);
    }

    #[test]
    fn failing_command_leaves_list_unchanged() {
        let mut list = CutList::default();
        list.apply(EditCommand::Append { begin: secs(1), end: secs(2) }).unwrap();
        let before = list.clone();
        assert_eq!(
            list.apply(EditCommand::Move { index: 0, offset: 1 }),
            Err(EditError::DestinationOutOfRange { index: 0, offset: 1, len: 1 })
        );
        assert!(list.apply(EditCommand::Remove(3)).is_err());
        assert_eq!(list, before);
    }

    #[test]
    fn clear_command_keeps_paths() {
        let mut list = CutList::new("a", "b");
        list.apply(EditCommand::Append { begin: secs(1), end: secs(2) }).unwrap();
        list.apply(EditCommand::Clear).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.source_path, "a");
    }
}

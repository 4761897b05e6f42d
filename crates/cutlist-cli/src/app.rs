// crates/cutlist-cli/src/app.rs
//
// Turns parsed arguments into work: open the session, translate the
// subcommand into EditCommands or a read-only action, save if anything
// changed. Output meant for the user goes to stdout; diagnostics go through
// `log` to stderr.

use std::collections::BTreeSet;

use anyhow::{bail, Context, Result};
use log::info;

use cutlist_core::{document, CutList, EditCommand};
use cutlist_media::{paths, plan_cuts, render_all, CutOptions};

use crate::cli::{AddArgs, Bounds, Cli, Command, SetArgs};
use crate::helpers::format::listing;
use crate::session::Session;

pub fn run(cli: Cli) -> Result<()> {
    let pretty = cli.pretty;

    match cli.command {
        Command::New { file, source, dest, force } => {
            if file.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", file.display());
            }
            let list = CutList::new(source.unwrap_or_default(), dest.unwrap_or_default());
            Session::create(&file, list).save(pretty)?;
        }

        Command::Show { file } => {
            let session = Session::open(&file)?;
            for line in listing(&session.list) {
                println!("{line}");
            }
        }

        Command::Add(AddArgs { file, begin, end, at }) => {
            let cmd = match at {
                Some(index) => EditCommand::Insert { index, begin, end },
                None        => EditCommand::Append { begin, end },
            };
            edit(&file, pretty, vec![cmd])?;
        }

        Command::Remove { file, rows } => {
            let mut session = Session::open(&file)?;
            // Validate all rows up front so a bad index removes nothing.
            let len = session.list.len();
            let rows: BTreeSet<usize> = rows.into_iter().collect();
            if let Some(bad) = rows.iter().find(|&&r| r >= len) {
                bail!("row {bad} out of range ({} has {len} intervals)", file.display());
            }
            // Highest first so earlier removals don't shift later targets.
            for row in rows.into_iter().rev() {
                session.apply(EditCommand::Remove(row))?;
            }
            session.save(pretty)?;
        }

        Command::Move { file, row, offset } => {
            edit(&file, pretty, vec![EditCommand::Move { index: row, offset }])?;
        }

        Command::Set(SetArgs { file, row, bounds: Bounds { begin, end } }) => {
            edit(&file, pretty, vec![EditCommand::SetBounds { index: row, begin, end }])?;
        }

        Command::SaveAs { file, new_file, force } => {
            if new_file.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", new_file.display());
            }
            let mut session = Session::open(&file)?;
            session.save_as(&new_file, pretty)?;
            println!("{} -> {}", file.display(), session.path().display());
        }

        Command::Clear { file } => edit(&file, pretty, vec![EditCommand::Clear])?,

        Command::Source { file, path } => edit(&file, pretty, vec![EditCommand::SetSource(path)])?,

        Command::Dest { file, dir } => edit(&file, pretty, vec![EditCommand::SetDestination(dir)])?,

        Command::Check { file } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let value = document::parse(&text)
                .with_context(|| format!("checking {}", file.display()))?;
            let (_, intervals) = document::validate_value(&value)
                .with_context(|| format!("checking {}", file.display()))?;
            println!("{}: ok, {} intervals", file.display(), intervals.len());
        }

        Command::Commands { file } => {
            let session = Session::open(&file)?;
            let opts = CutOptions {
                ffmpeg: paths::ffmpeg_bin(cli.ffmpeg.as_deref()),
                ..CutOptions::default()
            };
            let cuts = plan_cuts(&session.list)
                .with_context(|| format!("planning cuts for {}", file.display()))?;
            if cuts.is_empty() {
                info!("[app] {} has no intervals, nothing to cut", file.display());
            }
            for line in render_all(&cuts, &opts) {
                println!("{line}");
            }
        }

        Command::Export { file } => {
            let session = Session::open(&file)?;
            println!("{}", session.list.to_json(pretty)?);
        }
    }
    Ok(())
}

/// Open, apply every command in order, save. Nothing is written unless all
/// commands succeed.
fn edit(file: &std::path::Path, pretty: bool, commands: Vec<EditCommand>) -> Result<()> {
    let mut session = Session::open(file)?;
    for cmd in commands {
        session.apply(cmd)?;
    }
    if session.is_dirty() {
        session.save(pretty)?;
    }
    Ok(())
}

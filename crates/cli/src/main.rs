use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, Context};
use trigsmith_core::{
    delete_range, duplicate_range_per_player, move_range, unduplicate_range,
    unduplicate_trigger_run, DuplicateOptions, SelectionRange, TriggerCollection,
};
use trigsmith_data::{load_options, load_trigger_set, save_trigger_set};

const USAGE: &str = "\
usage: trigsmith-cli --file <set.json> [flags] <command>

commands:
  list                                  show triggers in display order
  duplicate <slot>                      per-player copies of one trigger
  duplicate-range <begin> <end>         per-player copies of a display range
  unduplicate <slot>                    collapse a per-player run
  unduplicate-range <begin> <end>       collapse whole per-player batches
  delete-range <begin> <end>            delete a display range
  move-range <begin> <end> <target>     move a display range

flags:
  --file <path>        trigger-set JSON document (required)
  --options <path>     load duplication options from this file
  --active <n>         active player count for unduplicate (default 8)
  --players <list>     comma-separated target players, e.g. 2,3,5
  --reference <n>      reference player (default 1)
  --no-source          leave source_player fields unchanged
  --no-target          leave target_player fields unchanged
  --all-fields         rewrite fields regardless of their current player
  --gaia               include Gaia in the target set
  --mark               tag originals and copies in descriptions
  --force              override the similarity check on unduplicate
";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    List,
    Duplicate { slot: usize },
    DuplicateRange { begin: usize, end: usize },
    Unduplicate { slot: usize },
    UnduplicateRange { begin: usize, end: usize },
    DeleteRange { begin: usize, end: usize },
    MoveRange { begin: usize, end: usize, target: usize },
}

#[derive(Debug)]
struct CliArgs {
    file: PathBuf,
    options_path: Option<PathBuf>,
    active_players: u8,
    force: bool,
    players: Option<Vec<i32>>,
    reference: Option<i32>,
    no_source: bool,
    no_target: bool,
    all_fields: bool,
    gaia: bool,
    mark: bool,
    command: Command,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut file = None;
    let mut options_path = None;
    let mut active_players = 8u8;
    let mut force = false;
    let mut players = None;
    let mut reference = None;
    let mut no_source = false;
    let mut no_target = false;
    let mut all_fields = false;
    let mut gaia = false;
    let mut mark = false;
    let mut positional: Vec<&str> = Vec::new();

    let mut idx = 0;
    while idx < args.len() {
        match args[idx].as_str() {
            "--file" => {
                file = Some(PathBuf::from(flag_value(args, idx, "--file")?));
                idx += 1;
            }
            "--options" => {
                options_path = Some(PathBuf::from(flag_value(args, idx, "--options")?));
                idx += 1;
            }
            "--active" => {
                active_players = flag_value(args, idx, "--active")?
                    .parse()
                    .map_err(|_| "--active expects a player count".to_string())?;
                idx += 1;
            }
            "--players" => {
                let list = flag_value(args, idx, "--players")?
                    .split(',')
                    .map(|part| part.trim().parse::<i32>())
                    .collect::<Result<Vec<i32>, _>>()
                    .map_err(|_| "--players expects numbers like 2,3,5".to_string())?;
                players = Some(list);
                idx += 1;
            }
            "--reference" => {
                reference = Some(
                    flag_value(args, idx, "--reference")?
                        .parse()
                        .map_err(|_| "--reference expects a player number".to_string())?,
                );
                idx += 1;
            }
            "--force" => force = true,
            "--no-source" => no_source = true,
            "--no-target" => no_target = true,
            "--all-fields" => all_fields = true,
            "--gaia" => gaia = true,
            "--mark" => mark = true,
            other if other.starts_with("--") => {
                return Err(format!("unknown flag {other}"));
            }
            other => positional.push(other),
        }
        idx += 1;
    }

    let file = file.ok_or_else(|| "--file is required".to_string())?;
    let command = parse_command(&positional)?;
    Ok(CliArgs {
        file,
        options_path,
        active_players,
        force,
        players,
        reference,
        no_source,
        no_target,
        all_fields,
        gaia,
        mark,
        command,
    })
}

fn flag_value<'a>(args: &'a [String], idx: usize, flag: &str) -> Result<&'a str, String> {
    args.get(idx + 1)
        .map(|value| value.as_str())
        .ok_or_else(|| format!("{flag} expects a value"))
}

fn parse_command(positional: &[&str]) -> Result<Command, String> {
    let (&name, rest) = positional
        .split_first()
        .ok_or_else(|| "a command is required".to_string())?;
    let slot_at = |at: usize| -> Result<usize, String> {
        rest.get(at)
            .and_then(|value| value.parse().ok())
            .ok_or_else(|| format!("{name} expects display slot numbers"))
    };
    match name {
        "list" => Ok(Command::List),
        "duplicate" => Ok(Command::Duplicate { slot: slot_at(0)? }),
        "duplicate-range" => Ok(Command::DuplicateRange {
            begin: slot_at(0)?,
            end: slot_at(1)?,
        }),
        "unduplicate" => Ok(Command::Unduplicate { slot: slot_at(0)? }),
        "unduplicate-range" => Ok(Command::UnduplicateRange {
            begin: slot_at(0)?,
            end: slot_at(1)?,
        }),
        "delete-range" => Ok(Command::DeleteRange {
            begin: slot_at(0)?,
            end: slot_at(1)?,
        }),
        "move-range" => Ok(Command::MoveRange {
            begin: slot_at(0)?,
            end: slot_at(1)?,
            target: slot_at(2)?,
        }),
        other => Err(format!("unknown command {other}")),
    }
}

fn resolve_options(args: &CliArgs) -> anyhow::Result<DuplicateOptions> {
    let mut options = match &args.options_path {
        Some(path) => load_options(path)?,
        None => DuplicateOptions::default(),
    };
    if let Some(players) = &args.players {
        options.players = Some(players.clone());
    }
    if let Some(reference) = args.reference {
        options.reference_player = reference;
    }
    if args.no_source {
        options.include_source = false;
    }
    if args.no_target {
        options.include_target = false;
    }
    if args.all_fields {
        options.change_from_reference_only = false;
    }
    if args.gaia {
        options.include_gaia = true;
    }
    if args.mark {
        options.mark_originals = true;
    }
    Ok(options)
}

fn print_listing(collection: &TriggerCollection) {
    for (slot, trigger) in (0..collection.len()).filter_map(|slot| {
        collection
            .get_displayed(slot)
            .map(|trigger| (slot, trigger))
    }) {
        println!(
            "{slot:>4}  [{}] {}  ({} conditions, {} effects)",
            trigger.id,
            trigger.name,
            trigger.conditions.len(),
            trigger.effects.len(),
        );
    }
}

fn run(args: &[String]) -> anyhow::Result<()> {
    let args = parse_args(args).map_err(|message| anyhow!("{message}\n\n{USAGE}"))?;
    let mut collection = load_trigger_set(&args.file)?;
    let options = resolve_options(&args)?;

    let changed = match args.command {
        Command::List => {
            print_listing(&collection);
            false
        }
        Command::Duplicate { slot } => {
            let created = duplicate_range_per_player(
                &mut collection,
                SelectionRange::new(slot, slot),
                &options,
                None,
            )?;
            println!("created {} copies", created.len());
            true
        }
        Command::DuplicateRange { begin, end } => {
            let created = duplicate_range_per_player(
                &mut collection,
                SelectionRange::new(begin, end),
                &options,
                None,
            )?;
            println!("created {} copies", created.len());
            true
        }
        Command::Unduplicate { slot } => {
            let removed =
                unduplicate_trigger_run(&mut collection, slot, args.active_players, args.force)?;
            println!("removed {removed} triggers");
            true
        }
        Command::UnduplicateRange { begin, end } => {
            let removed = unduplicate_range(
                &mut collection,
                SelectionRange::new(begin, end),
                args.active_players,
            )?;
            println!("removed {removed} triggers");
            true
        }
        Command::DeleteRange { begin, end } => {
            let removed = delete_range(&mut collection, SelectionRange::new(begin, end))?;
            println!("removed {removed} triggers");
            true
        }
        Command::MoveRange { begin, end, target } => {
            move_range(
                &mut collection,
                SelectionRange::with_target(begin, end, target),
            )?;
            println!("moved {} triggers", end.saturating_sub(begin) + 1);
            true
        }
    };

    if changed {
        save_trigger_set(&args.file, &collection)
            .with_context(|| format!("save {}", args.file.display()))?;
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

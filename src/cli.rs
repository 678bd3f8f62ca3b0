// src/cli.rs
use std::env;

use color_eyre::eyre::{Result, bail, eyre};

use crate::{
    config::{LabelOptions, ScraperConfig, SortMode, TrackQuery, consts::WORKERS},
    error::DecodeError,
    model::{DiscType, Entity, Label},
    progress::Progress,
    scrape::{self, HitState, LabelParser, TrackSearchService},
    session::Session,
};

pub enum Command {
    Label { ids: Vec<u64>, options: LabelOptions, workers: usize },
    Tracks { query: TrackQuery, lyrics: bool },
}

pub struct Invocation {
    pub command: Command,
    pub verbose: bool,
}

pub fn run() -> Result<()> {
    let Some(inv) = parse_args(env::args().skip(1))? else {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    };
    init_logging(inv.verbose);

    let session = Session::new(ScraperConfig::from_env());
    match inv.command {
        Command::Label { ids, options, workers } => run_labels(&session, &ids, options, workers),
        Command::Tracks { query, lyrics } => run_tracks(&session, &query, lyrics),
    }
}

fn init_logging(verbose: bool) {
    let mut clog = colog::default_builder();
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    clog.filter(None, level);
    // a second init (tests, embedding) is harmless
    let _ = clog.try_init();
}

/// `None` means "print help".
pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Option<Invocation>> {
    let mut args = args.into_iter();
    let Some(sub) = args.next() else {
        return Ok(None);
    };
    let mut verbose = false;

    let command = match sub.as_str() {
        "-h" | "--help" | "help" => return Ok(None),
        "label" | "labels" => {
            let mut ids = Vec::new();
            let mut options = LabelOptions::default();
            let mut workers = WORKERS;
            while let Some(a) = args.next() {
                match a.as_str() {
                    "--current-roster" => options.current_roster = sort_arg(&a, args.next())?,
                    "--past-roster" => options.past_roster = sort_arg(&a, args.next())?,
                    "--releases" => options.releases = sort_arg(&a, args.next())?,
                    "--all" => options = LabelOptions::everything(),
                    "--links" => options.load.load_links = true,
                    "--logo" => options.load.load_image = true,
                    "--workers" => workers = number_arg(&a, args.next())?,
                    "-v" | "--verbose" => verbose = true,
                    "-h" | "--help" => return Ok(None),
                    other => ids.push(other.parse().map_err(|_| DecodeError::Id(s!(other)))?),
                }
            }
            if ids.is_empty() {
                bail!("label: at least one label id is required");
            }
            Command::Label { ids, options, workers: workers.max(1) }
        }
        "tracks" | "songs" => {
            let mut query = TrackQuery::default();
            let mut lyrics = false;
            while let Some(a) = args.next() {
                match a.as_str() {
                    "--title" => query.song_title = text_arg(&a, args.next())?,
                    "--band" => query.band_name = text_arg(&a, args.next())?,
                    "--release" => query.release_title = text_arg(&a, args.next())?,
                    "--genre" => query.genre = text_arg(&a, args.next())?,
                    "--lyrics-text" => query.lyrics = text_arg(&a, args.next())?,
                    "--exact-band" => query.exact_band_match = true,
                    "--type" => {
                        let v = text_arg(&a, args.next())?;
                        let kind = DiscType::from_name(&v);
                        if !kind.is_known() {
                            bail!("Unknown release type: {v}");
                        }
                        query.release_types.push(kind);
                    }
                    "--lyrics" => lyrics = true,
                    "--limit" => query.limit = Some(number_arg(&a, args.next())?),
                    "-v" | "--verbose" => verbose = true,
                    "-h" | "--help" => return Ok(None),
                    other => bail!("Unknown arg: {other}"),
                }
            }
            if query.is_empty() {
                bail!("tracks: give at least one of --title, --band, --release, --genre");
            }
            Command::Tracks { query, lyrics }
        }
        other => bail!("Unknown command: {other} (try --help)"),
    };
    Ok(Some(Invocation { command, verbose }))
}

fn text_arg(flag: &str, v: Option<String>) -> Result<String> {
    v.filter(|s| !s.is_empty()).ok_or_else(|| eyre!("Missing value for {flag}"))
}

fn number_arg(flag: &str, v: Option<String>) -> Result<usize> {
    let v = text_arg(flag, v)?;
    v.parse().map_err(|_| eyre!("{flag} expects a number, got {v:?}"))
}

fn sort_arg(flag: &str, v: Option<String>) -> Result<SortMode> {
    let v = text_arg(flag, v)?;
    SortMode::parse(&v).ok_or_else(|| eyre!("{flag}: unknown sort mode {v:?}"))
}

struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Parsing {total} label(s)...");
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, id: u64, name: &str) {
        eprintln!("  ok   {id} {name}");
    }

    fn item_failed(&mut self, id: u64, reason: &str) {
        eprintln!("  FAIL {id}: {reason}");
    }
}

fn run_labels(session: &Session, ids: &[u64], options: LabelOptions, workers: usize) -> Result<()> {
    if let [id] = ids {
        let (label, report) = LabelParser::new(session, *id, options).parse_with_report()?;
        print_label(&label);
        for (field, reason) in report.failures() {
            println!("  ! {field:?} not loaded: {reason}");
        }
        return Ok(());
    }
    let result = scrape::parse_labels(session, ids, options, workers, Some(&mut StderrProgress));
    for label in &result.labels {
        print_label(label);
        println!();
    }
    if !result.failures.is_empty() {
        bail!("{} of {} label(s) failed", result.failures.len(), ids.len());
    }
    Ok(())
}

fn print_label(label: &Label) {
    println!("{} [{}]", label.name, label.id());
    let line = |k: &str, v: &str| {
        if !v.is_empty() {
            println!("  {k:<16}{v}");
        }
    };
    line("Country", label.country.name());
    line("Status", label.status.name());
    line("Founded", &label.founding_date);
    line("Specialties", &label.specialisation);
    line("Phone", &label.phone_number);
    line("Address", &label.address.replace('\n', ", "));
    line("Email", &label.email);
    if !label.website.is_none() {
        line("Website", &label.website.url);
    }
    if let Some(parent) = &label.parent_label {
        line("Parent label", &format!("{} [{}]", parent.name, parent.id()));
    }
    if !label.sub_labels.is_empty() {
        let names: Vec<_> = label.sub_labels.iter().map(|l| l.name.as_str()).collect();
        line("Sub-labels", &names.join(", "));
    }
    line("Online shop", if label.online_shopping { "yes" } else { "no" });
    if let Some(logo) = &label.logo {
        line("Logo", &format!("{}x{}", logo.width(), logo.height()));
    }
    for link in &label.links {
        println!("  link            {} ({}) {}", link.name, link.category, link.url);
    }
    if !label.current_roster.is_empty() {
        println!("  Current roster ({}):", label.current_roster.len());
        for band in &label.current_roster {
            println!("    {} - {} ({})", band.name, band.genre, band.country);
        }
    }
    if !label.past_roster.is_empty() {
        println!("  Past roster ({}):", label.past_roster.len());
        for (band, count) in &label.past_roster {
            println!("    {} - {count} release(s)", band.name);
        }
    }
    if !label.releases.is_empty() {
        println!("  Releases ({}):", label.release_count());
        for (band, discs) in &label.releases {
            for disc in discs {
                println!("    {} - {} ({}, {})", band.name, disc.name, disc.disc_type, disc.year);
            }
        }
    }
}

fn run_tracks(session: &Session, query: &TrackQuery, lyrics: bool) -> Result<()> {
    let hits = TrackSearchService::new(session).load_extras(lyrics).search(query)?;
    for hit in &hits {
        let t = &hit.entity;
        let marker = match hit.state {
            HitState::ReusedFromCache => "*",
            HitState::Skeletal => " ",
        };
        println!("{marker} [{}] {} - {} - {} ({})", t.id(), t.band.name, t.disc.name, t.name, t.disc_type);
        if lyrics && !t.lyrics.is_empty() {
            for l in t.lyrics.lines() {
                println!("      {l}");
            }
        }
    }
    println!("{} hit(s)", hits.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn parses_label_command() {
        let inv = parse_args(args("label 3 --releases genre --links -v")).unwrap().unwrap();
        assert!(inv.verbose);
        let Command::Label { ids, options, .. } = inv.command else { panic!("not a label command") };
        assert_eq!(ids, vec![3]);
        assert_eq!(options.releases, SortMode::ByGenre);
        assert_eq!(options.current_roster, SortMode::Disabled);
        assert!(options.load.load_links && !options.load.load_image);
    }

    #[test]
    fn parses_track_command() {
        let inv = parse_args(args("tracks --title Raining --band Slayer --type EP --limit 5"))
            .unwrap()
            .unwrap();
        let Command::Tracks { query, lyrics } = inv.command else { panic!("not a track command") };
        assert!(!lyrics);
        assert_eq!(query.song_title, "Raining");
        assert_eq!(query.release_types, vec![DiscType::Ep]);
        assert_eq!(query.limit, Some(5));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_args(args("label")).is_err());
        assert!(parse_args(args("label x")).is_err());
        assert!(parse_args(args("label 3 --releases sideways")).is_err());
        assert!(parse_args(args("tracks --limit 3")).is_err());
        assert!(parse_args(args("dance")).is_err());
        assert!(parse_args(args("--help")).unwrap().is_none());
        assert!(parse_args(Vec::new()).unwrap().is_none());
    }
}

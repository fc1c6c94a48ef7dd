//! `denkapp` command-line entry point.
//!
//! # Responsibility
//! - Capture free text into the local store and browse the three views.
//! - Own the wall clock: core calls receive `now` from here.

mod display;

use anyhow::{bail, Context};
use chrono::{Local, NaiveDateTime};
use clap::{Parser, Subcommand};
use denkapp_core::db::open_db;
use denkapp_core::{
    analyze, default_log_level, init_logging, BoardService, CaptureService, InboxRepository,
    Profile, SqliteInboxRepository, SqliteItemRepository, SqliteTopicRepository,
    TopicRepository,
};
use rusqlite::Connection;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "denkapp", version, about = "Turn free text into tasks, agenda items and topics")]
struct Cli {
    /// SQLite database file.
    #[arg(long, env = "DENKAPP_DB_PATH", default_value = "denkapp.sqlite3")]
    db: PathBuf,

    /// Data partition: work or priv.
    #[arg(long, short, env = "DENKAPP_PROFILE", default_value = "work")]
    profile: Profile,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, env = "DENKAPP_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, env = "DENKAPP_LOG_LEVEL")]
    log_level: Option<String>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Capture text from the arguments, or from stdin when none are given.
    Capture {
        /// Show per-sentence classification without storing anything.
        #[arg(long)]
        explain: bool,
        text: Vec<String>,
    },
    /// List tasks, open first.
    Tasks {
        /// Include completed tasks.
        #[arg(long)]
        all: bool,
    },
    /// List agenda items to discuss.
    Agenda,
    /// Group items by topic.
    Mindmap,
    /// Mark a task done.
    Done {
        id: Uuid,
        /// Reopen instead.
        #[arg(long)]
        undo: bool,
    },
    /// Show the raw input log.
    Inbox,
    /// List known topics.
    Topics,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("denkapp: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(log_dir) = cli.log_dir.as_ref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        let log_dir = log_dir
            .to_str()
            .context("log directory must be valid UTF-8")?;
        if let Err(message) = init_logging(level, log_dir) {
            bail!("logging init failed: {message}");
        }
    }

    let now = Local::now().naive_local();

    if let Command::Capture {
        explain: true,
        text,
    } = &cli.command
    {
        let raw = read_text(text)?;
        return explain(&raw, now, cli.json);
    }

    let mut conn = open_db(&cli.db)
        .with_context(|| format!("failed to open database `{}`", cli.db.display()))?;

    match cli.command {
        Command::Capture { text, .. } => {
            let raw = read_text(&text)?;
            let report = CaptureService::new(&mut conn).submit(cli.profile, &raw, now)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                display::print_capture_report(&report, cli.profile);
            }
        }
        Command::Tasks { all } => {
            let tasks = board(&conn)?.tasks(cli.profile, all)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else {
                display::print_tasks(&tasks);
            }
        }
        Command::Agenda => {
            let agenda = board(&conn)?.agenda(cli.profile)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&agenda)?);
            } else {
                display::print_agenda(&agenda);
            }
        }
        Command::Mindmap => {
            let mindmap = board(&conn)?.mindmap(cli.profile)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&mindmap)?);
            } else {
                display::print_mindmap(&mindmap);
            }
        }
        Command::Done { id, undo } => {
            let task = board(&conn)?.set_task_done(cli.profile, id, !undo)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&task)?);
            } else {
                display::print_tasks(std::slice::from_ref(&task));
            }
        }
        Command::Inbox => {
            let entries = SqliteInboxRepository::try_new(&conn)?.list_entries(cli.profile)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                display::print_inbox(&entries);
            }
        }
        Command::Topics => {
            let topics = SqliteTopicRepository::try_new(&conn)?.list_topics(cli.profile)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&topics)?);
            } else {
                for topic in &topics {
                    println!("{}", topic.title);
                }
            }
        }
    }

    Ok(())
}

fn board(
    conn: &Connection,
) -> anyhow::Result<BoardService<SqliteItemRepository<'_>, SqliteTopicRepository<'_>>> {
    Ok(BoardService::new(
        SqliteItemRepository::try_new(conn)?,
        SqliteTopicRepository::try_new(conn)?,
    ))
}

fn explain(raw: &str, now: NaiveDateTime, json: bool) -> anyhow::Result<()> {
    let analyses = analyze(raw, now);
    if json {
        println!("{}", serde_json::to_string_pretty(&analyses)?);
    } else {
        display::print_analyses(&analyses);
    }
    Ok(())
}

fn read_text(args: &[String]) -> anyhow::Result<String> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("failed to read capture text from stdin")?;
    Ok(raw)
}

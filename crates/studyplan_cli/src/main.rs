//! Terminal front end for the study planner.
//!
//! # Responsibility
//! - Translate command-line actions into task store and view-state calls.
//! - Render derived views as plain text.

mod render;

use clap::{Parser, Subcommand};
use log::warn;
use std::path::PathBuf;
use std::process::ExitCode;
use studyplan_core::{
    init_logging, AppConfig, Clock, IsoDate, KvTaskRepository, Mutation, SortMode, SqliteKvStore,
    StatusFilter, SystemClock, Task, TaskDraft, TaskStore, ViewState,
};

type CliStore = TaskStore<KvTaskRepository<SqliteKvStore>>;

#[derive(Parser, Debug)]
#[command(name = "studyplan", version)]
#[command(about = "Study planner - track, filter and sort study tasks")]
struct Cli {
    /// SQLite file holding the task collection (overrides STUDYPLAN_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Log level: trace|debug|info|warn|error (overrides STUDYPLAN_LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files (overrides STUDYPLAN_LOG_DIR)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new task
    Add {
        title: String,
        #[arg(long, default_value = "")]
        subject: String,
        /// Due date as YYYY-MM-DD
        #[arg(long, default_value = "")]
        due: String,
    },
    /// Edit title, subject or due date of a task
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        subject: Option<String>,
        /// New due date as YYYY-MM-DD, or "" to clear it
        #[arg(long)]
        due: Option<String>,
    },
    /// Toggle a task between pending and done
    Toggle { id: String },
    /// Delete a task
    Rm { id: String },
    /// List tasks
    List {
        /// all, pending or done
        #[arg(long, default_value = "all")]
        filter: StatusFilter,
        /// Case-insensitive text matched against title and subject
        #[arg(long, default_value = "")]
        search: String,
        /// due, newest or oldest
        #[arg(long, default_value = "due")]
        sort: SortMode,
        /// Override today's date for overdue markers (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },
    /// Print collection counts
    Summary,
    /// Check core linkage and storage access
    Ping,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = resolve_config(&cli);
    if let Some(log_dir) = &config.log_dir {
        // Logging is optional for a one-shot command.
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let kv = SqliteKvStore::open(&config.db_path)
        .map_err(|err| format!("failed to open `{}`: {err}", config.db_path.display()))?;
    let mut store: CliStore = TaskStore::open(KvTaskRepository::new(kv));
    let mut state = ViewState::new();

    match cli.command {
        Commands::Add {
            title,
            subject,
            due,
        } => {
            *state.draft_mut() = TaskDraft::new(title, subject, due);
            let outcome = state.submit(&mut store).map_err(|err| err.to_string())?;
            report("Added", &outcome);
        }
        Commands::Edit {
            id,
            title,
            subject,
            due,
        } => {
            state
                .begin_edit_by_id(&store, &id)
                .map_err(|err| err.to_string())?;
            let draft = state.draft_mut();
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(subject) = subject {
                draft.subject = subject;
            }
            if let Some(due) = due {
                draft.due = due;
            }
            let outcome = state.submit(&mut store).map_err(|err| err.to_string())?;
            report("Updated", &outcome);
        }
        Commands::Toggle { id } => {
            let outcome = store.toggle_done(&id).map_err(|err| err.to_string())?;
            let label = if outcome.value.done {
                "Completed"
            } else {
                "Reopened"
            };
            report(label, &outcome);
        }
        Commands::Rm { id } => {
            let outcome = state
                .remove(&mut store, &id)
                .map_err(|err| err.to_string())?;
            report("Deleted", &outcome);
        }
        Commands::List {
            filter,
            search,
            sort,
            today,
        } => {
            state.set_active_filter(filter);
            state.set_search_query(search);
            state.set_sort_mode(sort);
            let today = match today {
                Some(raw) => IsoDate::parse(&raw).map_err(|err| err.to_string())?,
                None => SystemClock.today(),
            };
            print!("{}", render::render_view(&state.view(&store, &today)));
        }
        Commands::Summary => {
            let summary = studyplan_core::summarize(store.all());
            println!("{}", render::render_summary(&summary));
        }
        Commands::Ping => {
            println!("studyplan_core ping={}", studyplan_core::ping());
            println!("studyplan_core version={}", studyplan_core::core_version());
            println!("tasks={}", store.len());
        }
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> AppConfig {
    let mut config = AppConfig::from_env();
    if let Some(db) = &cli.db {
        config.db_path = db.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(dir) = &cli.log_dir {
        config.log_dir = Some(dir.clone());
    }
    config
}

fn report(action: &str, outcome: &Mutation<Task>) {
    println!("{action}: {}", render::render_task_line(&outcome.value, false));
    if let Some(err) = outcome.write_error() {
        warn!("event=cli_write module=cli status=error error={err}");
        eprintln!("warning: change kept for this session only, save failed: {err}");
    }
}

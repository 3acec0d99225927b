//! Binary entry point for quickassist.
//!
//! This binary provides the CLI interface for the quickassist catalog.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use quickassist::cli::{self, AssumeYes, Confirm, ExportTarget, StdinConfirm};
use quickassist::config::QuickAssistConfig;
use quickassist::io::{ExportService, ImportService};
use quickassist::observability::{self, InitOptions};
use quickassist::services::{CatalogStore, SystemClipboard};
use quickassist::storage::persistence::FilesystemBackend;
use quickassist::{ImportMode, RecordId};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// `QuickAssist` - a personal canned-response manager.
#[derive(Parser)]
#[command(name = "quickassist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the stored catalog.
    #[arg(long, global = true, env = "QUICKASSIST_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// List responses, optionally filtered.
    List {
        /// Case-insensitive search term.
        query: Option<String>,
    },

    /// Print one response in full.
    Show {
        /// Response id.
        id: RecordId,
    },

    /// Add a response.
    Add {
        /// Short title.
        title: String,

        /// Response text.
        #[arg(required_unless_present = "text_file", conflicts_with = "text_file")]
        text: Option<String>,

        /// Read the text from a file (`-` for stdin).
        #[arg(long)]
        text_file: Option<PathBuf>,
    },

    /// Edit a response.
    Edit {
        /// Response id.
        id: RecordId,

        /// New title.
        #[arg(long)]
        title: Option<String>,

        /// New text.
        #[arg(long)]
        text: Option<String>,
    },

    /// Delete a response.
    Delete {
        /// Response id.
        id: RecordId,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Copy a response's text to the clipboard.
    Copy {
        /// Response id.
        id: RecordId,
    },

    /// Export a dated JSON backup.
    Export {
        /// Output file, directory, or `-` for stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import a JSON backup.
    Import {
        /// Backup file.
        file: PathBuf,

        /// Merge (keep existing, add missing) or replace everything.
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Skip confirmation prompts.
        #[arg(short, long)]
        yes: bool,
    },

    /// Restore the starter responses.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Show configuration.
    Config {
        /// Print the resolved configuration, not just its location.
        #[arg(long)]
        show: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

/// Import mode argument.
#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Add responses whose id is not already present.
    Merge,
    /// Discard the current list.
    Replace,
}

impl From<ModeArg> for ImportMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Merge => Self::Merge,
            ModeArg::Replace => Self::Replace,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    let mut config = match QuickAssistConfig::resolve(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };
    if let Some(dir) = args.data_dir.clone() {
        config.data_dir = dir;
    }

    if let Err(e) = observability::init_from_settings(
        &config.logging,
        InitOptions {
            verbose: args.verbose,
        },
    ) {
        eprintln!("Failed to initialize observability: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn confirmer(yes: bool) -> Box<dyn Confirm> {
    if yes {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinConfirm)
    }
}

async fn run_command(args: Cli, config: QuickAssistConfig) -> quickassist::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Commands that never touch the catalog.
    match &args.command {
        Commands::Config { show } => {
            let source = QuickAssistConfig::locate(args.config.as_deref());
            if *show {
                return cli::cmd_config(&config, source.as_deref(), &mut out);
            }
            let location = source
                .or_else(QuickAssistConfig::default_path)
                .map_or_else(|| "(none)".to_string(), |p| p.display().to_string());
            writeln!(out, "{location}")
                .map_err(|e| quickassist::Error::operation("write_output", e))?;
            return Ok(());
        },
        Commands::Completions { shell } => {
            clap_complete::generate(*shell, &mut Cli::command(), "quickassist", &mut out);
            return Ok(());
        },
        _ => {},
    }

    // The directory is created on the first write, so read-only commands
    // still work (on the starter records) when it cannot be.
    let backend = FilesystemBackend::new(&config.data_dir);
    let mut store = CatalogStore::load(backend, config.storage_key.clone());

    match args.command {
        Commands::List { query } => {
            cli::cmd_list(&store, query.as_deref(), config.preview_length, &mut out)
        },
        Commands::Show { id } => cli::cmd_show(&store, id, &mut out),
        Commands::Add {
            title,
            text,
            text_file,
        } => {
            let text = match (text, text_file) {
                (Some(text), _) => text,
                (None, Some(path)) => cli::read_text_source(&path)?,
                (None, None) => String::new(),
            };
            cli::cmd_add(&mut store, title, text, &mut out)
        },
        Commands::Edit { id, title, text } => cli::cmd_edit(&mut store, id, title, text, &mut out),
        Commands::Delete { id, yes } => {
            let mut confirm = confirmer(yes);
            cli::cmd_delete(&mut store, id, confirm.as_mut(), &mut out)
        },
        Commands::Copy { id } => {
            let clipboard = config
                .clipboard_command
                .clone()
                .map_or_else(SystemClipboard::new, SystemClipboard::with_command);
            cli::cmd_copy(&store, id, &clipboard, &mut out)
        },
        Commands::Export { output } => cli::cmd_export(
            &store,
            &ExportService::new(),
            ExportTarget::from_arg(output.as_deref()),
            &mut out,
        ),
        Commands::Import { file, mode, yes } => {
            let mut confirm = confirmer(yes);
            cli::cmd_import(
                &mut store,
                &ImportService::new(),
                &file,
                mode.map(ImportMode::from),
                confirm.as_mut(),
                &mut out,
            )
            .await
        },
        Commands::Reset { yes } => {
            let mut confirm = confirmer(yes);
            cli::cmd_reset(&mut store, confirm.as_mut(), &mut out)
        },
        Commands::Config { .. } | Commands::Completions { .. } => Ok(()),
    }
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use git_logger::areas::repository::Repository;
use git_logger::artifacts::core::PagerWriter;
use git_logger::commands::porcelain::show::ShowOptions;
use git_logger::config::Config;
use is_terminal::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "git-logger",
    version,
    about = "Append the latest commit to a spreadsheet audit log",
    long_about = "Records the latest commit of a git repository (hash, author, added lines) \
    as a new row of an .xlsx workbook, creating the workbook on first use. \
    Meant to run from a post-commit hook or a CI step; without a subcommand it records.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(
        short = 'C',
        long = "repo",
        env = "GIT_LOGGER_REPO",
        global = true,
        help = "Run as if started in this directory"
    )]
    repo: Option<PathBuf>,

    #[arg(
        short = 'f',
        long = "log-file",
        env = "GIT_LOGGER_FILE",
        global = true,
        help = "Workbook to append to, relative to the repository [default: commit_log.xlsx]"
    )]
    log_file: Option<PathBuf>,

    #[arg(
        long = "git",
        env = "GIT_LOGGER_GIT",
        global = true,
        help = "The git executable to run [default: git]"
    )]
    git: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone)]
enum Commands {
    #[command(
        name = "record",
        about = "Append the HEAD commit to the log",
        long_about = "This command reads the hash, author and added line count of HEAD \
        and appends them as a new row of the log. Failures are reported on stderr \
        but do not change the exit status unless --strict is given."
    )]
    Record {
        #[arg(long, help = "Exit with a non-zero status when the commit cannot be logged")]
        strict: bool,
    },
    #[command(
        name = "inspect",
        about = "Print the record for HEAD without writing it"
    )]
    Inspect,
    #[command(
        name = "show",
        about = "List the logged commits",
        long_about = "This command prints the rows of the log, oldest first."
    )]
    Show {
        #[arg(short = 'n', long = "max-count", help = "Only show the newest <MAX_COUNT> rows")]
        max_count: Option<usize>,
        #[arg(long, help = "Show abbreviated commit hashes")]
        abbrev_commit: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let command = cli
        .command
        .clone()
        .unwrap_or(Commands::Record { strict: false });
    let result = Config::resolve(cli.repo, cli.log_file, cli.git)
        .and_then(|config| run(&config, &command));

    match (result, &command) {
        (Ok(()), _) => ExitCode::SUCCESS,
        (Err(err), Commands::Record { strict }) => {
            // A logging failure must not block the commit that triggered it
            eprintln!("Error logging commit: {err:#}");
            if *strict {
                ExitCode::FAILURE
            } else {
                tracing::warn!("commit not logged, exiting successfully");
                ExitCode::SUCCESS
            }
        }
        (Err(err), _) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &Config, command: &Commands) -> Result<()> {
    match command {
        Commands::Record { .. } => {
            let repository = Repository::new(config, Box::new(std::io::stdout()))?;
            repository.record()
        }
        Commands::Inspect => {
            let repository = Repository::new(config, Box::new(std::io::stdout()))?;
            repository.inspect()
        }
        Commands::Show {
            max_count,
            abbrev_commit,
        } => {
            let opts = ShowOptions {
                max_count: *max_count,
                abbrev_commit: *abbrev_commit,
            };

            if use_pager() {
                let pager = minus::Pager::new();
                let repository =
                    Repository::new(config, Box::new(PagerWriter::new(pager.clone())))?;
                repository.show(&opts)?;
                minus::page_all(pager)?;
                Ok(())
            } else {
                let repository = Repository::new(config, Box::new(std::io::stdout()))?;
                repository.show(&opts)
            }
        }
    }
}

fn use_pager() -> bool {
    std::env::var_os("NO_PAGER").is_none() && std::io::stdout().is_terminal()
}

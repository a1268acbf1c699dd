// Rust guideline compliant 2026-10-19

//! issuedesk CLI application
//!
//! Command-line interface for the issuedesk issue service.

use clap::Parser;
use issuedesk_app::MemoryIssueService;
use issuedesk_cli::{commands, create_formatter, logging, OutputFormatter};
use issuedesk_core::{Config, IssueId, OutputFormat, UserId};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "issuedesk",
    version,
    about = "issuedesk: a small issue tracker with assign-on-update status rules",
    long_about = "issuedesk serves issues from an in-memory store seeded with demo data. One-shot commands mutate the store for a single invocation; `session` keeps one store alive and answers JSON requests line by line.",
    after_help = "Examples:\n  issuedesk list --status pending\n  issuedesk create \"Broken login\" --description \"500 on submit\" --user 2\n  issuedesk update 1 --user 3\n  echo '{\"op\":\"get\",\"id\":1}' | issuedesk session\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed file with users and issues
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Plain,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// List issues
    List {
        /// Filter by status
        #[arg(long)]
        status: Option<String>,

        /// Filter by assignee id
        #[arg(long, conflicts_with = "unassigned")]
        assignee: Option<UserId>,

        /// Only issues without an assignee
        #[arg(long)]
        unassigned: bool,

        /// Sort by field (title, status, created_at, updated_at)
        #[arg(long)]
        sort: Option<String>,
    },

    /// Show details of an issue
    Show {
        /// Issue ID
        id: IssueId,
    },

    /// List users in the directory
    Users,

    /// Create a new issue
    Create {
        /// Title of the issue
        title: String,

        /// Description of the issue
        #[arg(long)]
        description: Option<String>,

        /// Assignee user id
        #[arg(long)]
        user: Option<UserId>,
    },

    /// Update an existing issue
    Update {
        /// Issue ID
        id: IssueId,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New status
        #[arg(long)]
        status: Option<String>,

        /// Assignee user id
        #[arg(long)]
        user: Option<UserId>,
    },

    /// Answer JSON requests from stdin, one per line
    Session,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.seed_path = Some(seed);
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.format {
        config.output_format = format.into();
    } else if cli.json {
        config.output_format = OutputFormat::Json;
    }

    let guard = logging::init_tracing(&config)?;

    let service = MemoryIssueService::from_config(&config)?;
    let formatter = create_formatter(config.output_format);

    if let Err(err) = dispatch(cli.command, &service, formatter.as_ref()) {
        eprintln!("{}", formatter.format_error(&format!("{:#}", err)));
        drop(guard);
        std::process::exit(1);
    }

    Ok(())
}

fn dispatch(
    command: Option<Commands>,
    service: &MemoryIssueService,
    formatter: &dyn OutputFormatter,
) -> anyhow::Result<()> {
    match command {
        Some(Commands::List {
            status,
            assignee,
            unassigned,
            sort,
        }) => {
            commands::list::execute(service, status, assignee, unassigned, sort, formatter)?;
        }
        Some(Commands::Show { id }) => {
            commands::show::execute(service, id, formatter)?;
        }
        Some(Commands::Users) => {
            commands::users::execute(service, formatter);
        }
        Some(Commands::Create {
            title,
            description,
            user,
        }) => {
            commands::create::execute(service, title, description, user, formatter)?;
        }
        Some(Commands::Update {
            id,
            title,
            description,
            status,
            user,
        }) => {
            commands::update::execute(service, id, title, description, status, user, formatter)?;
        }
        Some(Commands::Session) => {
            commands::session::execute(service)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

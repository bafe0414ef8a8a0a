use clap::{ArgAction, Parser, Subcommand};
use commands::{browse, config, history, profile, session};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "biscoop")]
#[command(about = "Biscoop - Your movie-theater companion")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Write logs to this file (rotated daily) instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in to your account
    #[command(long_about = "Sign in to Biscoop. Credentials are currently checked by a placeholder that accepts any non-empty email/password pair; the session is stored until you log out.")]
    Login {
        /// Email address (if not provided, will prompt)
        #[arg(long)]
        email: Option<String>,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Create an account
    #[command(long_about = "Create a Biscoop account. This is a demo flow: non-empty fields are accepted and nothing is stored. Sign in afterwards with 'biscoop login'.")]
    Register {
        /// Full name (if not provided, will prompt)
        #[arg(long)]
        name: Option<String>,

        /// Email address (if not provided, will prompt)
        #[arg(long)]
        email: Option<String>,
    },

    /// Browse the screening room
    #[command(long_about = "Show the movies currently on the screening-room board. Use --movie to see the detail view for a single entry.")]
    Browse {
        /// Show details for one movie instead of the whole board
        #[arg(long, value_name = "ID")]
        movie: Option<u32>,
    },

    /// Show or edit your profile
    Profile {
        #[command(subcommand)]
        cmd: Option<ProfileCommands>,
    },

    /// Manage your watch history
    #[command(long_about = "View and edit the list of movies you have watched, including ratings, reviews, and derived statistics.")]
    History {
        #[command(subcommand)]
        cmd: HistoryCommands,
    },

    /// Show the effective configuration
    Config,
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Show the profile card
    Show,

    /// Edit name, email and bio
    Edit,
}

#[derive(Subcommand)]
enum HistoryCommands {
    /// List every watched movie
    List,

    /// Add a movie, or update the entry with the same id
    #[command(long_about = "Add a movie to the watch history, stamped with today's date. If an entry with the same id already exists it is replaced in place instead of being moved to the front.")]
    Add {
        #[arg(long)]
        id: u32,

        #[arg(long)]
        title: String,

        /// Poster glyph shown next to the title
        #[arg(long, default_value = "🎬")]
        poster: String,

        #[arg(long)]
        genre: String,

        /// Release year
        #[arg(long)]
        year: u32,

        /// Runtime in minutes
        #[arg(long)]
        duration: u32,

        /// Star rating, 0-5
        #[arg(long, default_value_t = 0.0)]
        rating: f32,

        #[arg(long)]
        review: Option<String>,
    },

    /// Remove an entry by id
    Remove { id: u32 },

    /// Update the rating and/or review of an entry
    Rate {
        id: u32,

        /// New star rating, 0-5
        #[arg(long)]
        rating: Option<f32>,

        /// New review text
        #[arg(long)]
        review: Option<String>,
    },

    /// Show watch statistics
    Stats,

    /// Delete the entire history
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, action = ArgAction::SetTrue)]
        yes: bool,
    },

    /// Write the sample entries if the history is empty
    Seed,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging_with_file(cli.verbose, cli.quiet, cli.log_file.clone())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Login { email } => session::run_login(email, &output),
        Commands::Logout => session::run_logout(&output),
        Commands::Register { name, email } => session::run_register(name, email, &output),
        Commands::Browse { movie } => browse::run_browse(movie, &output),
        Commands::Profile { cmd } => {
            profile::run_profile(cmd.unwrap_or(ProfileCommands::Show), &output)
        }
        Commands::History { cmd } => history::run_history(cmd, &output),
        Commands::Config => config::run_config(&output),
    }
}

mod api;
mod commands;
mod config;
mod ui;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "qotd")]
#[command(about = "Quote of the day from your terminal")]
#[command(version)]
#[command(after_help = "Examples:
  qotd today                 Today's quote (same for everyone)
  qotd today --lang de       Today's quote in German
  qotd random --category 3   A random quote from category 3
  qotd show 42               Quote #42")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the quote of the day (random on repeat calls)
    #[command(after_help = "Example: qotd today --lang fr")]
    Today {
        /// Language to translate the quote into
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Show a random quote
    #[command(after_help = "Examples:
  qotd random
  qotd random --category 2 --lang es")]
    Random {
        /// Only pick from this category
        #[arg(short, long)]
        category: Option<i32>,
        /// Language to translate the quote into
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Show a quote by id
    #[command(after_help = "Example: qotd show 42")]
    Show {
        /// Quote id
        id: i32,
        /// Language to translate the quote into
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Generate shell completions
    #[command(after_help = "Examples:
  qotd completions bash > ~/.bash_completion.d/qotd
  qotd completions zsh > ~/.zfunc/_qotd
  qotd completions fish > ~/.config/fish/completions/qotd.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        ui::print_error(&err);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = envy::prefixed("QOTD_").from_env::<Config>()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Today { lang } => commands::today::run(&config, lang).await,
        Commands::Random { category, lang } => {
            commands::random::run(&config, category, lang).await
        }
        Commands::Show { id, lang } => commands::show::run(&config, id, lang).await,
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "qotd", &mut std::io::stdout());
            Ok(())
        }
    }
}

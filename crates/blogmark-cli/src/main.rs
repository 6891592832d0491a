use anyhow::{Context, Result};
use blogmark_config::Config;
use blogmark_engine::{excerpt, render_html, slugify};
use clap::{Parser, Subcommand};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};

/// Render blog post bodies to safe HTML.
#[derive(Debug, Parser)]
#[command(name = "blogmark", version, about)]
struct Cli {
    /// Config file (defaults to ~/.config/blogmark/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a post body to an HTML fragment
    Render {
        /// Post body file
        file: PathBuf,
    },
    /// Print the plain-text excerpt of a post body
    Excerpt {
        /// Post body file
        file: PathBuf,
        /// Maximum length in chars (defaults to the configured excerpt length)
        #[arg(long)]
        length: Option<usize>,
    },
    /// Print the URL slug for a title
    Slug {
        /// Title words
        #[arg(required = true)]
        title: Vec<String>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let output = match cli.command {
        Command::Render { file } => render_html(&read_post(&file)?),
        Command::Excerpt { file, length } => {
            let length = match length {
                Some(length) => length,
                None => load_config(cli.config.as_deref())?.excerpt_length,
            };
            let mut text = excerpt(&read_post(&file)?, length);
            text.push('\n');
            text
        }
        Command::Slug { title } => {
            let mut slug = slugify(&title.join(" "));
            slug.push('\n');
            slug
        }
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write output")?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    Config::load_or_default(path).context("Failed to load configuration")
}

fn read_post(path: &Path) -> Result<String> {
    log::debug!("reading post body from {}", path.display());
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use unisweep_config::Config;
use unisweep_core::{EmojiHandling, NormalizationForm, analyze_dataset_unicode, process_records};

mod io;
mod profile;
mod report;

#[derive(Parser)]
#[command(name = "unisweep", about = "Unicode and emoji cleanup for text datasets")]
struct Cli {
    /// JSON config profile
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report unicode and emoji prevalence in a dataset
    Analyze {
        /// JSON Lines file or JSON array of objects
        path: PathBuf,

        /// Text column, overrides the config
        #[arg(long)]
        column: Option<String>,
    },

    /// Preprocess a column and write the records with derived columns
    Process {
        path: PathBuf,

        #[arg(long)]
        column: Option<String>,

        /// keep, remove or replace
        #[arg(long)]
        emoji: Option<String>,

        /// Add has-emoji, emoji-count and category columns
        #[arg(long)]
        analysis: bool,

        /// Output file, stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Preprocess a single string
    Clean {
        text: String,

        #[arg(long)]
        emoji: Option<String>,

        /// NFC, NFD, NFKC or NFKD
        #[arg(long)]
        form: Option<String>,
    },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = profile::load_config(cli.config.as_deref())?;
    run(cli.command, config)
}

fn run(command: Command, config: Config) -> anyhow::Result<()> {
    let mut options = config.preprocess.to_options()?;

    match command {
        Command::Analyze { path, column } => {
            let column = column.unwrap_or(config.dataset.text_column);
            let dataset = io::read_dataset(&path)?;
            let summary = analyze_dataset_unicode(&dataset, &column)?;

            for line in report::summary_lines(&path.display().to_string(), &dataset, &summary) {
                println!("{line}");
            }
        }
        Command::Process {
            path,
            column,
            emoji,
            analysis,
            output,
        } => {
            let column = column.unwrap_or(config.dataset.text_column);
            if let Some(emoji) = emoji {
                options.emoji_handling = emoji.parse::<EmojiHandling>()?;
            }
            let include_analysis = analysis || config.dataset.create_analysis_columns;

            let dataset = io::read_dataset(&path)?;
            let processed = process_records(&dataset, &column, &options, include_analysis)?;

            match output {
                Some(out) => {
                    let file =
                        File::create(&out).with_context(|| format!("creating {}", out.display()))?;
                    io::write_json_lines(&processed, BufWriter::new(file))?;
                    tracing::info!("Wrote {} records to {}", processed.len(), out.display());
                }
                None => io::write_json_lines(&processed, std::io::stdout().lock())?,
            }
        }
        Command::Clean { text, emoji, form } => {
            if let Some(emoji) = emoji {
                options.emoji_handling = emoji.parse::<EmojiHandling>()?;
            }
            if let Some(form) = form {
                options.normalization_form = form.parse::<NormalizationForm>()?;
            }
            println!("{}", unisweep_core::preprocess_text(&text, &options));
        }
    }

    Ok(())
}

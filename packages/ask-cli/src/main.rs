//! `wa` - ask Wolfram|Alpha a question and print the best answer.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wolframalpha_client::{AnswerExtractor, Document, ExtractConfig, Subsection, WolframClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Numerical answer, or the longest answer if there is none
    Answer,
    /// Value and unit only
    Numerical,
    /// Longest subsection text
    Longest,
    /// Spoken results API (one sentence)
    Spoken,
    /// Raw full results JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "wa", about = "Ask Wolfram|Alpha a question", version)]
struct Cli {
    /// The question; multiple words are joined with spaces
    #[arg(required_unless_present = "file")]
    query: Vec<String>,

    #[arg(long, value_enum, default_value_t = Mode::Answer)]
    mode: Mode,

    /// Keep parenthesized text in answers
    #[arg(long)]
    keep_parens: bool,

    /// Don't drop the "Input interpretation" section before extracting
    #[arg(long)]
    keep_input_interpretation: bool,

    /// Decode a saved full results response instead of calling the API
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Print every section before the answer
    #[arg(long)]
    sections: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,wolframalpha_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let query = cli.query.join(" ");

    let mut config = ExtractConfig::from_env().context("Failed to load extraction config")?;
    if cli.keep_parens {
        config = config.with_keep_parens(true);
    }
    let extractor = AnswerExtractor::new(&config);

    if let Some(path) = &cli.file {
        if matches!(cli.mode, Mode::Spoken) {
            bail!("--mode spoken needs the API, it can't read --file");
        }
        let body = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if matches!(cli.mode, Mode::Json) {
            println!("{}", String::from_utf8_lossy(&body));
            return Ok(());
        }
        let doc = Document::from_slice(&body).context("Failed to decode response")?;
        return print_answer(&cli, doc, &extractor);
    }

    let client = WolframClient::from_env().context("Failed to create Wolfram|Alpha client")?;
    tracing::debug!(query = %query, mode = ?cli.mode, "Asking Wolfram|Alpha");

    match cli.mode {
        Mode::Spoken => {
            let text = client.ask_spoken(&query).await.context("Spoken query failed")?;
            println!("{}", text);
            Ok(())
        }
        Mode::Json => {
            let body = client.ask_json(&query).await.context("Query failed")?;
            println!("{}", String::from_utf8_lossy(&body));
            Ok(())
        }
        _ => {
            let doc = client.ask(&query).await.context("Query failed")?;
            print_answer(&cli, doc, &extractor)
        }
    }
}

fn print_answer(cli: &Cli, mut doc: Document, extractor: &AnswerExtractor) -> Result<()> {
    if let Some(detail) = doc.result().and_then(|r| r.failure_detail()) {
        bail!("Wolfram|Alpha error {}: {}", detail.code, detail.msg);
    }

    if !cli.keep_input_interpretation {
        doc.remove_input_interpretation();
    }

    if cli.sections {
        print_sections(&doc, extractor);
    }

    match cli.mode {
        Mode::Numerical => {
            let found = doc.numerical_answer(extractor).context("No numerical answer")?;
            println!("{}\t{}", found.value, found.unit);
        }
        Mode::Longest => {
            println!("{}", doc.longest_answer(extractor).context("No answer")?);
        }
        _ => {
            println!("{}", doc.answer(extractor).context("No answer")?);
        }
    }

    Ok(())
}

fn print_sections(doc: &Document, extractor: &AnswerExtractor) {
    doc.for_each_section(|section| {
        let title = if section.primary {
            section.title.bright_green().bold()
        } else {
            section.title.bright_cyan()
        };
        eprintln!("{}", title);
        section.for_each_subsection(|sub| {
            for line in subsection_lines(sub, extractor) {
                eprintln!("  {}", line.dimmed());
            }
        });
    });
    eprintln!();
}

/// Subsection text as the extractor sees it, one entry per line.
fn subsection_lines(sub: &Subsection, extractor: &AnswerExtractor) -> Vec<String> {
    extractor
        .normalizer()
        .normalize(&sub.plaintext)
        .lines()
        .map(str::to_string)
        .collect()
}

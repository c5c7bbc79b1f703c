//! sopdoc CLI - render SOP JSON descriptions to Word documents

use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;

use sopdoc::{RenderOptions, SectionKind, SopDocument};

#[derive(Parser)]
#[command(name = "sopdoc")]
#[command(version)]
#[command(about = "Render a structured SOP description (JSON) to a .docx document", long_about = None)]
struct Cli {
    /// Input JSON file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file (suggested name in the current directory if not specified)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Override the artifact filename stem
    #[arg(long, value_name = "STEM")]
    stem: Option<String>,

    /// Replace the trigger-label set of the blank-line heuristic
    #[arg(long = "trigger-label", value_name = "LABEL")]
    trigger_labels: Vec<String>,

    /// Body font family
    #[arg(long, default_value = "Calibri")]
    font: String,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .init();

    if let Err(message) = run(&cli) {
        eprintln!("{} {}", "error:".red().bold(), message);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let data = std::fs::read(&cli.input)
        .map_err(|e| format!("cannot read {}: {}", cli.input.display(), e))?;
    let doc = sopdoc::from_json_bytes(&data).map_err(|e| e.to_string())?;
    log::debug!("decoded {} sections from {}", doc.section_count(), cli.input.display());

    print_summary(&doc);

    let mut options = RenderOptions::new().with_font(cli.font.as_str());
    if !cli.trigger_labels.is_empty() {
        options = options.with_trigger_labels(cli.trigger_labels.clone());
    }
    if let Some(stem) = &cli.stem {
        options = options.with_filename_stem(stem.as_str());
    }

    let artifact = sopdoc::render_with_options(&doc, &options).map_err(|e| e.to_string())?;

    let path = match &cli.output {
        Some(path) => {
            artifact.write_to(path).map_err(|e| e.to_string())?;
            path.clone()
        }
        None => artifact.write_to_dir(".").map_err(|e| e.to_string())?,
    };

    println!(
        "{} {} ({} bytes)",
        "Wrote".green().bold(),
        path.display(),
        artifact.len()
    );
    Ok(())
}

fn print_summary(doc: &SopDocument) {
    let tables = doc
        .sections
        .iter()
        .filter(|s| s.kind == SectionKind::Table)
        .count();
    println!(
        "{} {} [{}] - {} sections, {} revision tables",
        "Rendering".cyan().bold(),
        doc.title,
        doc.id,
        doc.section_count(),
        tables
    );
}

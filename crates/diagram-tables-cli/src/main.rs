use anyhow::{Context, Result};
use diagram_tables_config::Config;
use diagram_tables_engine::{DEFAULT_PATTERN, EnhanceRules, FileOutcome, RunSummary, pipeline};
use std::{env, path::PathBuf, process};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Convert,
    Enhance,
}

#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    command: Command,
    content_path: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Option<Invocation> {
    let command = match args.get(1).map(String::as_str) {
        Some("convert") => Command::Convert,
        Some("enhance") => Command::Enhance,
        _ => return None,
    };

    match args.len() {
        2 => Some(Invocation {
            command,
            content_path: None,
        }),
        3 => Some(Invocation {
            command,
            content_path: Some(PathBuf::from(&args[2])),
        }),
        _ => None,
    }
}

fn usage(program_name: &str) -> String {
    format!(
        "Usage: {program_name} <convert|enhance> [content-dir]\n\
         Or set content_path in {}",
        Config::config_path().display()
    )
}

fn run(invocation: Invocation, config: Option<Config>) -> Result<RunSummary> {
    let (content_path, pattern, rules) = match (invocation.content_path, config) {
        (Some(path), Some(config)) => {
            log::info!("Using content path from CLI argument: {}", path.display());
            (path, config.pattern, config.enhance)
        }
        (Some(path), None) => {
            log::info!("Using content path from CLI argument: {}", path.display());
            (path, DEFAULT_PATTERN.to_string(), EnhanceRules::default())
        }
        (None, Some(config)) => {
            log::info!(
                "Loaded content path from config: {}",
                config.content_path.display()
            );
            (config.content_path, config.pattern, config.enhance)
        }
        (None, None) => anyhow::bail!("No content path provided and no config file found"),
    };

    let summary = match invocation.command {
        Command::Convert => pipeline::convert_all(&content_path, &pattern),
        Command::Enhance => pipeline::enhance_all(&content_path, &pattern, &rules),
    }
    .with_context(|| format!("Failed to process {}", content_path.display()))?;

    Ok(summary)
}

fn print_summary(command: Command, summary: &RunSummary) {
    for (article, outcome) in &summary.outcomes {
        match outcome {
            FileOutcome::Converted { blocks } => {
                println!("✓ {} ({blocks} diagram(s) converted)", article.relative_path())
            }
            FileOutcome::Enhanced { replacements } => {
                println!(
                    "✓ {} ({replacements} diagram(s) enhanced)",
                    article.relative_path()
                )
            }
            FileOutcome::Unchanged => {}
        }
    }
    for (article, error) in &summary.failures {
        eprintln!("✗ {}: {error}", article.relative_path());
    }

    let verb = match command {
        Command::Convert => "converted",
        Command::Enhance => "enhanced",
    };
    println!(
        "\n{} of {} file(s) {verb}, {} failed",
        summary.changed_count(),
        summary.outcomes.len() + summary.failures.len(),
        summary.failures.len()
    );
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program_name = args
        .first()
        .cloned()
        .unwrap_or_else(|| "diagram-tables".to_string());

    let Some(invocation) = parse_args(&args) else {
        eprintln!("{}", usage(&program_name));
        process::exit(1);
    };
    let command = invocation.command;

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Config::load() failed with error: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    match run(invocation, config) {
        Ok(summary) => {
            print_summary(command, &summary);
            if summary.has_failures() {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            eprintln!("{}", usage(&program_name));
            process::exit(1);
        }
    }
}

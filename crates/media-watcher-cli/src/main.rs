mod clipboard;
mod commands;
mod logging;
mod progress;
mod prompt;
mod review;

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use colored::*;
use commands::{Cli, Commands};
use dotenv::dotenv;
use media_watcher_core::{config, delete, gallery, scan, script, AppConfig, SilentReporter};
use progress::ScanSpinner;
use review::ReviewSession;
use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let config = match config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let args = Cli::parse();

    match args.command {
        Some(Commands::List { root }) => {
            if let Err(err) = run_list(&config, root) {
                error!("Error: {}", err);
            }
        }
        Some(Commands::Review {
            root,
            delete_on_view,
        }) => {
            if let Err(err) = run_review(&config, root, delete_on_view) {
                error!("Error: {}", err);
            }
        }
        Some(Commands::Export {
            root,
            rels,
            copy,
            out_dir,
        }) => {
            if let Err(err) = run_export(&config, root, rels, copy, out_dir) {
                error!("Error: {}", err);
            }
        }
        Some(Commands::Delete { root, rels, yes }) => {
            if let Err(err) = run_delete(&config, root, rels, yes) {
                error!("Error: {}", err);
            }
        }
        Some(Commands::Generate { root, all }) => {
            if let Err(err) = run_generate(&config, root, all) {
                error!("Error: {}", err);
            }
        }
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:?}", config);
        }
        None => {
            let _ = Cli::command().print_long_help();
        }
    }

    Ok(())
}

fn resolve_root(config: &AppConfig, root: Option<PathBuf>) -> PathBuf {
    root.or_else(|| config.media_root.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn run_list(
    config: &AppConfig,
    root: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = resolve_root(config, root);
    let files = scan::list_files(&root, &config.ignore_patterns, &ScanSpinner::new())?;

    println!("Media: {}", root.display());
    for rel in &files {
        if gallery::is_image(rel) {
            println!("{} {}", "img".cyan(), rel);
        } else {
            println!("    {}", rel);
        }
    }
    info!("{} file(s) under {}", files.len(), root.display());
    Ok(())
}

fn run_review(
    config: &AppConfig,
    root: Option<PathBuf>,
    delete_on_view: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = resolve_root(config, root);
    let files = scan::list_files(&root, &config.ignore_patterns, &ScanSpinner::new())?;
    if files.is_empty() {
        println!("No files found under {}.", root.display());
        return Ok(());
    }

    let mut session = ReviewSession::new(
        root,
        files,
        delete_on_view || config.delete_on_view,
        Duration::from_secs(config.undo_window_secs),
    );
    session.run()?;
    Ok(())
}

fn run_export(
    config: &AppConfig,
    root: Option<PathBuf>,
    rels: Vec<String>,
    copy: bool,
    out_dir: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = resolve_root(config, root);
    let rels = if rels.is_empty() { read_rels_from_stdin()? } else { rels };
    if rels.is_empty() {
        println!("Nothing to export.");
        return Ok(());
    }

    let root_str = root.to_string_lossy();
    let posix = script::posix_script(&root_str, &rels);
    let windows = script::windows_script(&root_str, &rels);

    let out_dir = out_dir.unwrap_or_else(|| PathBuf::from("."));
    let posix_path = out_dir.join(script::POSIX_SCRIPT_NAME);
    let windows_path = out_dir.join(script::BATCH_SCRIPT_NAME);
    fs::write(&posix_path, &posix)?;
    fs::write(&windows_path, &windows)?;
    println!(
        "{}",
        format!(
            "Wrote {} and {} ({} files)",
            posix_path.display(),
            windows_path.display(),
            rels.len()
        )
        .green()
    );

    if copy {
        match clipboard::copy_text(&posix) {
            Ok(()) => println!("Bash delete script copied to clipboard."),
            Err(err) => error!("Clipboard copy failed: {}", err),
        }
    }

    Ok(())
}

fn run_delete(
    config: &AppConfig,
    root: Option<PathBuf>,
    rels: Vec<String>,
    yes: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = resolve_root(config, root);
    let rels = if rels.is_empty() { read_rels_from_stdin()? } else { rels };
    if rels.is_empty() {
        println!("Nothing to delete.");
        return Ok(());
    }

    let confirmed = yes
        || prompt::prompt_confirm(
            &format!(
                "Are you sure you want to permanently delete {} file(s)?",
                rels.len()
            ),
            Some(false),
        )?;
    if !confirmed {
        let outcome = delete::DeleteOutcome::cancelled();
        println!("{}", outcome.error.unwrap_or_default().yellow());
        return Ok(());
    }

    let paths: Vec<PathBuf> = rels
        .iter()
        .map(|rel| {
            let mut path = root.clone();
            for part in rel.split('/') {
                path.push(part);
            }
            path
        })
        .collect();

    let outcome = delete::delete_files(&paths);
    if outcome.success {
        println!("{}", format!("Deleted {} file(s).", outcome.deleted).green());
    } else {
        println!(
            "{}",
            format!(
                "Deletion failed after {} file(s): {}",
                outcome.deleted,
                outcome.error.as_deref().unwrap_or("unknown error")
            )
            .red()
        );
    }

    Ok(())
}

fn run_generate(
    config: &AppConfig,
    root: Option<PathBuf>,
    all: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = resolve_root(config, root);
    let candidates = gallery::candidate_dirs(&root)?;
    println!("Detected {} folder(s).", candidates.len());

    let selected = if all {
        candidates
    } else {
        prompt_select_dirs(candidates)?
    };

    let mut generated = Vec::new();
    for folder in &selected {
        match gallery::write_gallery(folder, &config.ignore_patterns, &SilentReporter) {
            Ok(Some(path)) => {
                println!("Wrote: {}", path.display());
                generated.push(path);
            }
            Ok(None) => println!("Skipping {} (no files found).", folder.display()),
            Err(err) => error!("Could not generate for {}: {}", folder.display(), err),
        }
    }

    if generated.is_empty() {
        println!("No galleries generated.");
    } else {
        println!();
        println!("{}", format!("Generated {} galleries:", generated.len()).green());
        for path in &generated {
            println!(" - {}", path.display());
        }
        println!();
        println!("Open each generated gallery (they are placed inside their respective folders).");
        println!("The delete scripts downloadable from the gallery pages reference files relative to the gallery file.");
    }

    Ok(())
}

fn prompt_select_dirs(candidates: Vec<PathBuf>) -> io::Result<Vec<PathBuf>> {
    println!("Choose which folders to generate galleries for:");
    for (index, path) in candidates.iter().enumerate() {
        println!("  {:2}) {}", index, path.display());
    }
    print!("Enter indices separated by commas, or 'all' to select all (default: all): ");
    io::stdout().flush()?;

    let mut choice = String::new();
    io::stdin().read_line(&mut choice)?;
    let choice = choice.trim();
    if choice.is_empty() || choice.eq_ignore_ascii_case("all") {
        return Ok(candidates);
    }

    let mut indices = Vec::new();
    for part in choice.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if let Ok(index) = part.parse::<usize>() {
            if index < candidates.len() && !indices.contains(&index) {
                indices.push(index);
            }
        }
    }
    if indices.is_empty() {
        println!("No valid indices selected; defaulting to all.");
        return Ok(candidates);
    }
    Ok(indices.into_iter().map(|i| candidates[i].clone()).collect())
}

fn read_rels_from_stdin() -> io::Result<Vec<String>> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

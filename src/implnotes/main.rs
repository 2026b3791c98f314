use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use implnotes::api::{CmdMessage, ListedEntry, MessageLevel, NotesApi, RowStatus};
use implnotes::config::NotesConfig;
use implnotes::error::Result;
use implnotes::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_module("implnotes", log::LevelFilter::Debug);
    }
    builder.init();
}

fn run(cli: Cli) -> Result<()> {
    let mut api = init_api(&cli)?;

    match cli.command {
        Commands::Append {
            entry_md,
            title,
            when_read,
            keywords,
            dry_run,
        } => {
            let result =
                api.append_entry_from_file(&entry_md, title, when_read, keywords, dry_run)?;
            if let Some(text) = &result.rendered {
                print!("{}", text);
            }
            print_messages(&result.messages);
        }
        Commands::Reindex { dry_run } => {
            let result = api.reindex(dry_run)?;
            if let Some(text) = &result.rendered {
                print!("{}", text);
            }
            print_messages(&result.messages);
        }
        Commands::List => {
            let result = api.list_entries()?;
            print_entries(&result.listed_entries);
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn init_api(cli: &Cli) -> Result<NotesApi<FileStore>> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let global_dir = ProjectDirs::from("com", "implnotes", "implnotes")
        .map(|dirs| dirs.config_dir().to_path_buf());

    let config = NotesConfig::resolve(&cwd, global_dir.as_deref())?;
    let path = config.notes_file(cli.file.as_deref());
    log::debug!("using notes file {}", path.display());

    Ok(NotesApi::new(FileStore::new(path)))
}

fn print_messages(messages: &[CmdMessage]) {
    // stdout carries document output only.
    for message in messages {
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Success => eprintln!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}

const TITLE_WIDTH: usize = 48;

fn print_entries(entries: &[ListedEntry]) {
    for entry in entries {
        let title = truncate_to_width(&entry.title, TITLE_WIDTH);
        let padding = TITLE_WIDTH.saturating_sub(title.width());

        let status = match (entry.status, entry.actual) {
            (RowStatus::Current, _) => entry.recorded.normal(),
            (RowStatus::Stale, Some(actual)) => {
                format!("{} (now {})", entry.recorded, actual).yellow()
            }
            (RowStatus::Stale, None) => entry.recorded.yellow(),
            (RowStatus::Orphaned, _) => format!("{} (no heading)", entry.recorded).red(),
        };

        println!(
            "{}  {}{}  {}",
            entry.id.yellow(),
            title,
            " ".repeat(padding),
            status
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

//! Interactive review session: the file list rendered as numbered cards,
//! with mark/unmark/view/undo/export commands dispatched into the
//! selection model. Re-renders whenever the model reports a change.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use colored::*;
use media_watcher_core::delete::{self, DeleteOutcome};
use media_watcher_core::gallery;
use media_watcher_core::script;
use media_watcher_core::selection::{Command, SelectionModel};
use tracing::{error, info};

use crate::clipboard;
use crate::prompt::prompt_confirm;

pub struct ReviewSession {
    root: PathBuf,
    model: SelectionModel,
    delete_on_view: bool,
}

enum Flow {
    Continue,
    Quit,
}

impl ReviewSession {
    pub fn new(
        root: PathBuf,
        files: Vec<String>,
        delete_on_view: bool,
        undo_window: Duration,
    ) -> Self {
        Self {
            root,
            model: SelectionModel::new(files).with_undo_window(undo_window),
            delete_on_view,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.render_grid();
        println!("Type 'help' for the command list.");

        let mut input = String::new();
        loop {
            if let Some((rel, remaining)) = self.model.undo_target(Instant::now()) {
                let seconds = remaining.as_secs() + 1;
                println!(
                    "{}",
                    format!("Undo available for \"{}\" ({}s left) - type 'undo'", rel, seconds)
                        .yellow()
                );
            }

            print!("gallery> ");
            io::stdout().flush()?;

            input.clear();
            if io::stdin().read_line(&mut input)? == 0 {
                break;
            }

            match self.dispatch(input.trim())? {
                Flow::Quit => break,
                Flow::Continue => {}
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, line: &str) -> io::Result<Flow> {
        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some(command) => command,
            None => return Ok(Flow::Continue),
        };
        let args: Vec<&str> = parts.collect();

        match command {
            "help" => self.print_help(),
            "ls" | "list" => self.render_grid(),
            "mark" => {
                if let Some(rel) = self.resolve(&args) {
                    self.apply(Command::Mark(rel));
                }
            }
            "unmark" => {
                if let Some(rel) = self.resolve(&args) {
                    self.apply(Command::Unmark(rel));
                }
            }
            "toggle" => {
                if let Some(rel) = self.resolve(&args) {
                    let include = !self.model.is_marked(&rel);
                    self.apply(Command::Toggle(rel, include));
                }
            }
            "view" => self.view(&args),
            "undo" => self.apply(Command::Undo),
            "all" => self.apply(Command::MarkAll),
            "trash" => self.show_trash(),
            "auto" => self.set_auto(&args),
            "export" => self.export(&args),
            "copy" => self.copy_script(),
            "delete" => self.delete_marked()?,
            "quit" | "q" | "exit" => return Ok(Flow::Quit),
            other => println!("Unknown command '{}'. Type 'help'.", other),
        }

        Ok(Flow::Continue)
    }

    /// Accepts a 1-based card index or an exact relative path.
    fn resolve(&self, args: &[&str]) -> Option<String> {
        if args.is_empty() {
            println!("Which file? Give a card number or a relative path.");
            return None;
        }
        let token = args.join(" ");

        if let Ok(index) = token.parse::<usize>() {
            if index >= 1 && index <= self.model.files().len() {
                return Some(self.model.files()[index - 1].clone());
            }
            println!("No card {} (1..{}).", index, self.model.files().len());
            return None;
        }

        if self.model.files().iter().any(|f| *f == token) {
            return Some(token);
        }
        println!("No file named \"{}\".", token);
        None
    }

    fn apply(&mut self, command: Command) {
        if self.model.apply(command, Instant::now()) {
            self.render_grid();
        }
    }

    fn view(&mut self, args: &[&str]) {
        let rel = match self.resolve(args) {
            Some(rel) => rel,
            None => return,
        };
        let path = self.absolute(&rel);

        if let Err(err) = open::that(&path) {
            error!("Could not open {}: {}", path.display(), err);
            println!("{}", format!("Could not open {}: {}", path.display(), err).red());
            return;
        }

        if self.delete_on_view && self.model.apply(Command::Mark(rel.clone()), Instant::now()) {
            println!(
                "{}",
                format!("Marked \"{}\" for deletion - 'undo' reverts it", rel).yellow()
            );
            self.render_grid();
        }
    }

    fn show_trash(&self) {
        let marked = self.model.marked_in_order();
        println!();
        println!("Files marked for deletion ({})", marked.len());
        if marked.is_empty() {
            println!("No files marked for deletion.");
            return;
        }
        for rel in &marked {
            println!("  {}", rel);
        }
        println!("('unmark <file>' removes one; 'export sh|bat' writes the scripts)");
    }

    fn set_auto(&mut self, args: &[&str]) {
        match args.first() {
            Some(&"on") => {
                self.delete_on_view = true;
                println!("Delete on view enabled.");
            }
            Some(&"off") => {
                self.delete_on_view = false;
                println!("Delete on view disabled.");
            }
            _ => println!(
                "Delete on view is {}. Use 'auto on' or 'auto off'.",
                if self.delete_on_view { "on" } else { "off" }
            ),
        }
    }

    fn export(&self, args: &[&str]) {
        let root = self.root.to_string_lossy();
        let marked = self.model.marked_in_order();

        let (name, content) = match args.first() {
            Some(&"sh") => (
                script::POSIX_SCRIPT_NAME,
                script::posix_script(&root, &marked),
            ),
            Some(&"bat") => (
                script::BATCH_SCRIPT_NAME,
                script::windows_script(&root, &marked),
            ),
            _ => {
                println!("Use 'export sh' or 'export bat'.");
                return;
            }
        };

        let target = match args.get(1) {
            Some(dir) => PathBuf::from(dir).join(name),
            None => PathBuf::from(name),
        };
        match fs::write(&target, content) {
            Ok(()) => {
                info!("Wrote {} ({} files)", target.display(), marked.len());
                println!(
                    "{}",
                    format!("Wrote {} ({} files)", target.display(), marked.len()).green()
                );
            }
            Err(err) => {
                error!("Could not write {}: {}", target.display(), err);
                println!("{}", format!("Could not write {}: {}", target.display(), err).red());
            }
        }
    }

    fn copy_script(&self) {
        let root = self.root.to_string_lossy();
        let content = script::posix_script(&root, &self.model.marked_in_order());
        match clipboard::copy_text(&content) {
            Ok(()) => println!("Bash delete script copied to clipboard."),
            Err(err) => {
                error!("Clipboard copy failed: {}", err);
                println!("{}", format!("Clipboard copy failed: {}", err).red());
            }
        }
    }

    fn delete_marked(&mut self) -> io::Result<()> {
        let marked: Vec<String> = self
            .model
            .marked_in_order()
            .into_iter()
            .map(str::to_string)
            .collect();
        if marked.is_empty() {
            println!("No files marked for deletion.");
            return Ok(());
        }

        let confirmed = prompt_confirm(
            &format!(
                "Are you sure you want to permanently delete {} file(s)?",
                marked.len()
            ),
            Some(false),
        )?;
        if !confirmed {
            let outcome = DeleteOutcome::cancelled();
            println!("{}", outcome.error.unwrap_or_default().yellow());
            return Ok(());
        }

        let paths: Vec<PathBuf> = marked.iter().map(|rel| self.absolute(rel)).collect();
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

        // Removed files keep their list slots until the next scan; their
        // marks are cleared so the badge and exports stay truthful.
        let now = Instant::now();
        for rel in marked.iter().take(outcome.deleted) {
            self.model.apply(Command::Toggle(rel.clone(), false), now);
        }
        self.render_grid();
        Ok(())
    }

    fn absolute(&self, rel: &str) -> PathBuf {
        let mut path = self.root.clone();
        for part in rel.split('/') {
            path.push(part);
        }
        path
    }

    fn render_grid(&self) {
        println!();
        println!("Media: {}", self.root.display());
        let count = self.model.count();
        if count > 0 {
            // Badge is visible only while something is marked.
            println!("{}", format!("[marked: {}]", count).red().bold());
        }
        for (index, rel) in self.model.files().iter().enumerate() {
            let checkbox = if self.model.is_marked(rel) {
                "[x]".red().to_string()
            } else {
                "[ ]".to_string()
            };
            let tag = if gallery::is_image(rel) {
                "img".cyan().to_string()
            } else {
                "   ".to_string()
            };
            println!("{:>4} {} {} {}", index + 1, checkbox, tag, rel);
        }
        println!();
    }

    fn print_help(&self) {
        println!("Commands:");
        println!("  ls                    redraw the file list");
        println!("  mark <n|path>         mark a file for deletion (undoable for 5s)");
        println!("  unmark <n|path>       remove a mark");
        println!("  toggle <n|path>       flip the checkbox without arming undo");
        println!("  view <n|path>         open the file with the system handler");
        println!("  undo                  revert the most recent mark");
        println!("  all                   mark every file");
        println!("  trash                 list marked files");
        println!("  auto on|off           delete-on-view setting");
        println!("  export sh|bat [dir]   write the deletion script");
        println!("  copy                  copy the bash script to the clipboard");
        println!("  delete                delete marked files now (asks first)");
        println!("  quit                  leave the session");
    }
}

// Selection state - the set of files marked for deletion plus the undo slot
use std::collections::HashSet;
use std::time::{Duration, Instant};

pub const DEFAULT_UNDO_WINDOW: Duration = Duration::from_secs(5);

/// Every mutation of the selection goes through [`SelectionModel::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Auto-mark: adds the file and arms the undo slot.
    Mark(String),
    /// Removes the file; disarms the undo slot if it points at it.
    Unmark(String),
    /// Sets membership directly without touching the undo slot.
    Toggle(String, bool),
    /// Reverts the most recent auto-mark while its window is still open.
    Undo,
    /// Marks every known file.
    MarkAll,
}

#[derive(Debug)]
struct UndoSlot {
    rel: String,
    deadline: Instant,
}

/// In-memory selection over a fixed file list.
///
/// Members are always drawn from the list the model was created with;
/// marking an unknown path is a silent no-op. The undo slot holds at most
/// one entry - re-marking replaces it and restarts its deadline, so only
/// the single most recent auto-mark is ever undoable.
pub struct SelectionModel {
    files: Vec<String>,
    marked: HashSet<String>,
    undo: Option<UndoSlot>,
    undo_window: Duration,
}

impl SelectionModel {
    pub fn new(files: Vec<String>) -> Self {
        Self {
            files,
            marked: HashSet::new(),
            undo: None,
            undo_window: DEFAULT_UNDO_WINDOW,
        }
    }

    pub fn with_undo_window(mut self, window: Duration) -> Self {
        self.undo_window = window;
        self
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn count(&self) -> usize {
        self.marked.len()
    }

    pub fn is_marked(&self, rel: &str) -> bool {
        self.marked.contains(rel)
    }

    /// Marked paths in file-list enumeration order. This is the input
    /// sequence for the script exporter; iterating the set directly would
    /// not be deterministic.
    pub fn marked_in_order(&self) -> Vec<&str> {
        self.files
            .iter()
            .filter(|rel| self.marked.contains(rel.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// The path currently undoable and how long the window stays open.
    /// A deadline in the past clears the slot (the mark itself stays).
    pub fn undo_target(&mut self, now: Instant) -> Option<(&str, Duration)> {
        let expired = self
            .undo
            .as_ref()
            .map_or(false, |slot| now >= slot.deadline);
        if expired {
            self.undo = None;
        }
        self.undo
            .as_ref()
            .map(|slot| (slot.rel.as_str(), slot.deadline - now))
    }

    /// Applies one command at time `now`. Returns whether observable state
    /// changed, which is the caller's signal to re-render.
    pub fn apply(&mut self, command: Command, now: Instant) -> bool {
        match command {
            Command::Mark(rel) => {
                if !self.knows(&rel) {
                    return false;
                }
                self.marked.insert(rel.clone());
                // Re-marking restarts the window: most recent mark wins.
                self.undo = Some(UndoSlot {
                    rel,
                    deadline: now + self.undo_window,
                });
                true
            }
            Command::Unmark(rel) => {
                let removed = self.marked.remove(&rel);
                let disarmed = self.undo.as_ref().map_or(false, |slot| slot.rel == rel);
                if disarmed {
                    self.undo = None;
                }
                removed || disarmed
            }
            Command::Toggle(rel, included) => {
                if included {
                    self.knows(&rel) && self.marked.insert(rel)
                } else {
                    self.marked.remove(&rel)
                }
            }
            Command::Undo => match self.undo.take() {
                Some(slot) if now >= slot.deadline => false,
                Some(slot) if self.marked.contains(&slot.rel) => {
                    self.marked.remove(&slot.rel);
                    true
                }
                Some(slot) => {
                    // The mark was removed some other way; the undo option
                    // stays armed until its window expires.
                    self.undo = Some(slot);
                    false
                }
                None => false,
            },
            Command::MarkAll => {
                let before = self.marked.len();
                for rel in &self.files {
                    self.marked.insert(rel.clone());
                }
                self.marked.len() != before
            }
        }
    }

    fn knows(&self, rel: &str) -> bool {
        self.files.iter().any(|f| f == rel)
    }
}

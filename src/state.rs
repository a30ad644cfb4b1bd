use log::{info, warn};

use crate::executor::Launcher;
use crate::matcher::{MatchMode, QueryMatcher};
use crate::model::ApplicationEntry;

/// What came of activating the selection.
#[derive(Debug, PartialEq, Eq)]
pub enum Activation<'a> {
    Launched(&'a ApplicationEntry),
    /// The launch failed and was logged; the session should still close.
    Failed(&'a ApplicationEntry),
    /// Nothing is visible, so nothing was launched.
    Empty,
}

/// One launcher session: the catalog plus the view of it the current query selects.
///
/// The view is a list of catalog indices rebuilt from scratch on every query
/// change. Position 0 is always the first catalog entry that matches, so with
/// an untouched selection, activating launches the first alphabetical match.
pub struct Session {
    entries: Vec<ApplicationEntry>,
    filtered_indices: Vec<usize>,
    selected_index: usize,
    query: String,
    matcher: QueryMatcher,
}

impl Session {
    pub fn new(entries: Vec<ApplicationEntry>, mode: MatchMode) -> Self {
        let mut session = Self {
            entries,
            filtered_indices: Vec::new(),
            selected_index: 0,
            query: String::new(),
            matcher: QueryMatcher::new(mode),
        };
        session.update_filter();
        session
    }

    pub fn entries(&self) -> &[ApplicationEntry] {
        &self.entries
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn update_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.update_filter();
    }

    fn update_filter(&mut self) {
        self.filtered_indices = self.matcher.matching_indices(&self.query, &self.entries);
        self.selected_index = 0;
        info!("Session: query='{}', mode={:?}, filtered_count={}", self.query, self.matcher.mode(), self.filtered_indices.len());
    }

    pub fn visible(&self) -> impl Iterator<Item = &ApplicationEntry> + '_ {
        self.filtered_indices.iter().map(|&idx| &self.entries[idx])
    }

    pub fn visible_len(&self) -> usize {
        self.filtered_indices.len()
    }

    pub fn first_visible(&self) -> Option<&ApplicationEntry> {
        self.visible().next()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn move_selection(&mut self, delta: i32) {
        if self.filtered_indices.is_empty() {
            self.selected_index = 0;
            return;
        }

        let len = self.filtered_indices.len() as i32;
        let new_index = (self.selected_index as i32 + delta).rem_euclid(len);
        self.selected_index = new_index as usize;
    }

    /// Selects view position `index`. Out of range leaves the selection alone.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.filtered_indices.len() {
            self.selected_index = index;
            true
        } else {
            false
        }
    }

    pub fn selected(&self) -> Option<&ApplicationEntry> {
        self.filtered_indices.get(self.selected_index)
            .map(|&idx| &self.entries[idx])
    }

    pub fn activate(&self, launcher: &dyn Launcher) -> Activation<'_> {
        let Some(entry) = self.selected() else {
            return Activation::Empty;
        };
        match launcher.launch(&entry.command) {
            Ok(()) => Activation::Launched(entry),
            Err(err) => {
                warn!("Could not launch {:?}: {}", entry.name, err);
                Activation::Failed(entry)
            }
        }
    }
}

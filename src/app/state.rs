// src/app/state.rs
//! Application state management.
//!
//! `App` owns every state machine and translates input events into
//! operations on them. It never talks to the network itself: operations
//! queue `BackendRequest`s in an outbox the event loop drains, and
//! completed calls come back through `apply_event`. That keeps the whole
//! struct driveable from tests without a terminal or a server.

use std::mem;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Frame, widgets::ListState};

use crate::{
    api::{ApiEvent, BackendRequest},
    app::{
        analysis::Analysis,
        browser::{BrowseOutcome, Browser},
        drives::DrivesPanel,
        selection::Selection,
    },
    config::Config,
    fs,
    ui::{
        hits::{Hit, HitMap},
        keybindings::{Action, key_to_action},
        layout::compute_layout,
        theme::palette,
        widgets::{
            render_breadcrumb, render_browser, render_controls, render_drives, render_path_bar,
            render_results,
        },
    },
};

/// Main application state.
pub struct App {
    pub config: Config,
    pub browser: Browser,
    pub selection: Selection,
    pub drives: DrivesPanel,
    pub analysis: Analysis,

    /// Cursor row in the listing.
    pub cursor: usize,
    /// List widget state, kept in sync with `cursor`.
    pub list_state: ListState,

    /// Path field content; mirrors the loaded path except while editing.
    pub path_input: String,
    /// Whether keystrokes go to the path field.
    pub editing: bool,
    /// Field content when the current edit began, restored on Esc.
    saved_input: String,

    /// Animation frame counter for the loading spinners.
    pub frame: usize,

    /// Clickable regions of the last drawn frame.
    pub hits: HitMap,

    /// Requests queued for the API worker, drained once per loop tick.
    outbox: Vec<BackendRequest>,
}

impl App {
    /// Create the application and queue the initial root listing.
    pub fn new(config: Config) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        let mut app = Self {
            config,
            browser: Browser::new(),
            selection: Selection::new(),
            drives: DrivesPanel::new(),
            analysis: Analysis::new(),
            cursor: 0,
            list_state,
            path_input: fs::ROOT.to_string(),
            editing: false,
            saved_input: String::new(),
            frame: 0,
            hits: HitMap::default(),
            outbox: Vec::new(),
        };
        app.navigate(fs::ROOT);
        app
    }

    /// Requests queued since the last drain, in issue order.
    pub fn drain_requests(&mut self) -> Vec<BackendRequest> {
        mem::take(&mut self.outbox)
    }

    /// Advance the spinner animation. Called once per poll interval.
    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// Handle a key event and return true if the app should quit.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        if self.editing {
            return self.on_edit_key(key);
        }
        if self.drives.visible() {
            return self.on_drives_key(key);
        }

        match key_to_action(&key) {
            Action::Down => self.move_cursor(1),
            Action::Up => self.move_cursor(-1),
            Action::Activate => self.activate_cursor_entry(),
            Action::Select => self.select_cursor_entry(),
            Action::Parent => self.go_parent(),
            Action::EditPath => self.start_edit(),
            Action::Refresh => self.refresh(),
            Action::ToggleDrives => self.toggle_drives(),
            Action::Analyze => self.analyze(),
            Action::ToggleExcludeTests => self.analysis.toggle_exclude_tests(),
            Action::ToggleExcludeDocs => self.analysis.toggle_exclude_docs(),
            Action::ToggleExcludeDependencies => self.analysis.toggle_exclude_dependencies(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::Quit => return true,
            Action::None => {}
        }
        false
    }

    /// Keys while the path field has focus.
    fn on_edit_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }
        match key.code {
            KeyCode::Esc => self.cancel_edit(),
            KeyCode::Enter => self.commit_path(),
            KeyCode::Backspace => {
                self.path_input.pop();
            }
            KeyCode::Char(c) => self.path_input.push(c),
            _ => {}
        }
        false
    }

    /// Keys while the drives popup is open.
    fn on_drives_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Esc {
            self.drives.hide();
            return false;
        }
        match key_to_action(&key) {
            Action::Quit => return true,
            Action::Down => self.drives.move_cursor(1),
            Action::Up => self.drives.move_cursor(-1),
            Action::Activate => self.activate_drive(),
            Action::ToggleDrives => self.drives.hide(),
            _ => {}
        }
        false
    }

    /// Handle a mouse event.
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.on_click(mouse.column, mouse.row),
            MouseEventKind::ScrollDown => self.on_scroll(1),
            MouseEventKind::ScrollUp => self.on_scroll(-1),
            _ => {}
        }
    }

    fn on_click(&mut self, column: u16, row: u16) {
        let hit = self.hits.hit_at(column, row).cloned();

        if self.drives.visible() {
            // The popup is modal: only drive rows act, anything else closes it.
            match hit {
                Some(Hit::Drive(index)) => {
                    self.drives.set_cursor(index);
                    self.activate_drive();
                }
                _ => self.drives.hide(),
            }
            return;
        }

        // Clicking away from the field abandons the edit; the field keeps
        // it open and [Go] commits the text being typed.
        if self.editing && !matches!(hit, Some(Hit::PathField | Hit::Go)) {
            self.cancel_edit();
        }

        match hit {
            Some(Hit::PathField) => self.start_edit(),
            Some(Hit::Go) => self.commit_path(),
            Some(Hit::DrivesButton) => self.toggle_drives(),
            Some(Hit::RefreshButton) => self.refresh(),
            Some(Hit::ThemeButton) => self.toggle_theme(),
            Some(Hit::Crumb(target)) => self.navigate(&target),
            Some(Hit::Entry(index)) => self.click_entry(index),
            Some(Hit::ExcludeTests) => self.analysis.toggle_exclude_tests(),
            Some(Hit::ExcludeDocs) => self.analysis.toggle_exclude_docs(),
            Some(Hit::ExcludeDependencies) => self.analysis.toggle_exclude_dependencies(),
            Some(Hit::Analyze) => self.analyze(),
            Some(Hit::Drive(_)) | None => {}
        }
    }

    fn on_scroll(&mut self, delta: isize) {
        if self.drives.visible() {
            self.drives.move_cursor(delta);
        } else {
            self.move_cursor(delta);
        }
    }

    /// Apply one completed backend call.
    pub fn apply_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Browse {
                tag,
                probe,
                path,
                result,
            } => match self.browser.apply(tag, probe, &path, result) {
                BrowseOutcome::ProbeNavigate(target) => self.navigate(&target),
                BrowseOutcome::Applied => {
                    let loaded = self.browser.listing().map(|l| l.current_path.clone());
                    if let Some(current_path) = loaded {
                        if !self.editing {
                            self.path_input = current_path;
                        }
                        self.set_cursor(0);
                    }
                }
                BrowseOutcome::Ignored => {}
            },
            ApiEvent::Drives { tag, result } => self.drives.apply(tag, result),
            ApiEvent::Analysis { tag, result } => self.analysis.apply(tag, result),
        }
    }

    /// Issue a navigation; the listing panel flips to its spinner.
    pub fn navigate(&mut self, path: &str) {
        let request = self.browser.navigate(path);
        self.outbox.push(request);
    }

    fn refresh(&mut self) {
        let text = self.path_input.trim();
        let path = if text.is_empty() { fs::ROOT } else { text };
        let path = path.to_string();
        self.navigate(&path);
    }

    /// Open or select whatever the cursor is on.
    fn activate_cursor_entry(&mut self) {
        let Some(listing) = self.browser.listing() else {
            return;
        };
        let Some(entry) = listing.entries.get(self.cursor).cloned() else {
            return;
        };
        if entry.is_parent {
            self.navigate(&entry.path);
        } else if entry.is_dir {
            self.selection.select(&entry.path, &entry.name);
            self.navigate(&entry.path);
        } else {
            self.selection.select(&entry.path, &entry.name);
        }
    }

    /// Mark the cursor row for analysis without opening it.
    fn select_cursor_entry(&mut self) {
        let Some(listing) = self.browser.listing() else {
            return;
        };
        let Some(entry) = listing.entries.get(self.cursor) else {
            return;
        };
        if !entry.is_parent {
            let (path, name) = (entry.path.clone(), entry.name.clone());
            self.selection.select(&path, &name);
        }
    }

    /// A click on a row moves the cursor there and activates it, with the
    /// same rules as Enter: parent navigates up, a directory is selected
    /// and opened, a file is only selected.
    fn click_entry(&mut self, index: usize) {
        self.set_cursor(index);
        self.activate_cursor_entry();
    }

    fn go_parent(&mut self) {
        let parent = self
            .browser
            .listing()
            .and_then(|listing| listing.parent_entry())
            .map(|entry| entry.path.clone());
        if let Some(path) = parent {
            self.navigate(&path);
        }
    }

    fn toggle_drives(&mut self) {
        if let Some(request) = self.drives.toggle() {
            self.outbox.push(request);
        }
    }

    fn activate_drive(&mut self) {
        let target = self.drives.selected().map(|drive| drive.path.clone());
        if let Some(path) = target {
            self.drives.hide();
            self.navigate(&path);
        }
    }

    /// Run the analysis for the current selection, if there is one.
    fn analyze(&mut self) {
        let Some(path) = self.selection.path().map(str::to_string) else {
            return;
        };
        let request = self.analysis.start(&path);
        self.outbox.push(request);
    }

    fn start_edit(&mut self) {
        if !self.editing {
            self.saved_input = self.path_input.clone();
            self.editing = true;
        }
    }

    fn cancel_edit(&mut self) {
        if self.editing {
            self.editing = false;
            self.path_input = self.saved_input.clone();
        }
    }

    /// Commit the typed path: it becomes the selection immediately, and a
    /// probe decides whether the browser also navigates there.
    fn commit_path(&mut self) {
        let text = self.path_input.trim().to_string();
        if text.is_empty() {
            self.cancel_edit();
            return;
        }
        self.editing = false;
        self.path_input = text.clone();
        self.selection.select_path(&text);
        let request = self.browser.probe(&text);
        self.outbox.push(request);
    }

    fn toggle_theme(&mut self) {
        self.config.theme = self.config.theme.toggled();
        if let Err(err) = self.config.save() {
            log::warn!("could not persist theme: {err:#}");
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self
            .browser
            .listing()
            .map_or(0, |listing| listing.entries.len());
        if len == 0 {
            return;
        }
        let next = if delta < 0 {
            self.cursor.saturating_sub(delta.unsigned_abs())
        } else {
            (self.cursor + delta as usize).min(len - 1)
        };
        self.set_cursor(next);
    }

    fn set_cursor(&mut self, index: usize) {
        self.cursor = index;
        self.list_state.select(Some(index));
    }

    /// Draw the application UI.
    pub fn draw(&mut self, f: &mut Frame<'_>) {
        let area = f.area();
        let colors = palette(self.config.theme);
        let layout = compute_layout(area, !self.browser.trail().is_empty());

        self.hits.clear();
        render_path_bar(
            f,
            layout.path_bar,
            &self.path_input,
            self.editing,
            self.config.theme,
            &mut self.hits,
            &colors,
        );
        if let Some(trail_area) = layout.trail {
            render_breadcrumb(f, trail_area, self.browser.trail(), &mut self.hits, &colors);
        }
        render_browser(
            f,
            layout.browser,
            self.browser.state(),
            &self.selection,
            &mut self.list_state,
            self.frame,
            &mut self.hits,
            &colors,
        );
        render_controls(
            f,
            layout.controls,
            self.analysis.options(),
            self.selection.name(),
            &mut self.hits,
            &colors,
        );
        render_results(
            f,
            layout.results,
            self.analysis.state(),
            &self.config.models,
            self.frame,
            &colors,
        );
        if self.drives.visible() {
            render_drives(
                f,
                area,
                self.drives.state(),
                self.drives.cursor(),
                self.frame,
                &mut self.hits,
                &colors,
            );
        }
    }
}

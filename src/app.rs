//! Application state and core logic for the demo host

use crate::clipboard::{ClipboardSink, SystemClipboard};
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fetchform::{
    compute_snapshot, Control, ControlKind, FetchForm, FetchFormError, Form, Snapshot,
    SnapshotOptions,
};
use std::sync::mpsc::{self, Receiver};

/// A snapshot rendered for display
#[derive(Debug, Clone)]
pub struct SubmittedSnapshot {
    pub json: String,
    pub taken_at: DateTime<Local>,
    /// False for the snapshot taken at construction
    pub from_submit: bool,
}

type SubmitResult = Result<Snapshot, FetchFormError>;

/// Main application struct
pub struct App {
    /// Form and snapshot engine
    pub fetch: FetchForm<Form>,
    /// Index of the focused control in the form
    pub active_field: usize,
    /// Highlighted option when a select is focused
    pub option_cursor: usize,
    /// Most recent snapshot shown in the side panel
    pub last_snapshot: Option<SubmittedSnapshot>,
    /// Status bar feedback
    pub status_message: Option<String>,
    submissions: Receiver<SubmitResult>,
    clipboard: Box<dyn ClipboardSink>,
    quit: bool,
}

impl App {
    /// Create a new App using the system clipboard
    pub fn new(form: Form, options: SnapshotOptions) -> Result<Self> {
        Self::with_clipboard(form, options, Box::new(SystemClipboard))
    }

    pub fn with_clipboard(
        form: Form,
        options: SnapshotOptions,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Result<Self> {
        let mut fetch = FetchForm::new(form, options)?;
        let initial = SubmittedSnapshot {
            json: fetch.data().to_json_pretty()?,
            taken_at: Local::now(),
            from_submit: false,
        };
        let submissions = Self::register_submit_handler(&mut fetch);

        let mut app = Self {
            fetch,
            active_field: 0,
            option_cursor: 0,
            last_snapshot: Some(initial),
            status_message: None,
            submissions,
            clipboard,
            quit: false,
        };
        app.active_field = app.visible_fields().first().copied().unwrap_or(0);
        Ok(app)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn options(&self) -> SnapshotOptions {
        *self.fetch.options()
    }

    /// Indices of controls drawn on screen (hidden inputs are skipped)
    pub fn visible_fields(&self) -> Vec<usize> {
        (0..self.fetch.form().len())
            .filter(|&i| self.fetch.form().control(i).is_some_and(|c| !c.is_hidden()))
            .collect()
    }

    pub fn active_control(&self) -> Option<&Control> {
        self.fetch.form().control(self.active_field)
    }

    /// Register a submit handler using the form's current options.
    /// Returns the receiving end of the handler's channel.
    fn register_submit_handler(fetch: &mut FetchForm<Form>) -> Receiver<SubmitResult> {
        let (tx, rx) = mpsc::channel();
        let options = *fetch.options();
        fetch.submit(move |controls| {
            if tx.send(compute_snapshot(controls, &options)).is_err() {
                tracing::warn!("Submission dropped: receiver gone");
            }
        });
        rx
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('y') if ctrl => self.copy_snapshot(),
            KeyCode::Tab => self.next_field(),
            KeyCode::BackTab => self.prev_field(),
            KeyCode::F(2) => self.toggle_option(|o| &mut o.include_empty),
            KeyCode::F(3) => self.toggle_option(|o| &mut o.include_disabled),
            KeyCode::F(4) => self.toggle_option(|o| &mut o.include_hidden),
            KeyCode::Up => self.move_option_cursor(false),
            KeyCode::Down => self.move_option_cursor(true),
            KeyCode::Enter => {
                if self.active_control().is_some_and(Control::is_multiline) {
                    self.edit_active(|c| c.push_char('\n'));
                } else {
                    self.submit();
                }
            }
            KeyCode::Char(' ') => self.activate(),
            KeyCode::Char(c) if !ctrl => self.edit_active(|control| control.push_char(c)),
            KeyCode::Backspace => self.edit_active(Control::pop_char),
            _ => {}
        }
        Ok(())
    }

    pub fn next_field(&mut self) {
        let visible = self.visible_fields();
        if visible.is_empty() {
            return;
        }
        let pos = visible.iter().position(|&i| i == self.active_field).unwrap_or(0);
        self.active_field = visible[(pos + 1) % visible.len()];
        self.option_cursor = 0;
    }

    pub fn prev_field(&mut self) {
        let visible = self.visible_fields();
        if visible.is_empty() {
            return;
        }
        let pos = visible.iter().position(|&i| i == self.active_field).unwrap_or(0);
        self.active_field = if pos == 0 {
            visible[visible.len() - 1]
        } else {
            visible[pos - 1]
        };
        self.option_cursor = 0;
    }

    fn move_option_cursor(&mut self, down: bool) {
        let count = self.active_control().map_or(0, |c| c.options.len());
        if count == 0 {
            return;
        }
        self.option_cursor = if down {
            (self.option_cursor + 1).min(count - 1)
        } else {
            self.option_cursor.saturating_sub(1)
        };
    }

    /// Apply an edit to the focused control unless it is disabled
    fn edit_active(&mut self, edit: impl FnOnce(&mut Control)) {
        let index = self.active_field;
        if let Some(control) = self.fetch.form_mut().control_mut(index) {
            if control.disabled {
                self.status_message = Some(format!("`{}` is disabled", control.name));
                return;
            }
            edit(control);
        }
    }

    /// Space: toggle checkables and options, or type a space
    fn activate(&mut self) {
        let index = self.active_field;
        let Some(control) = self.fetch.form().control(index) else {
            return;
        };
        if control.disabled {
            self.status_message = Some(format!("`{}` is disabled", control.name));
            return;
        }
        match control.kind.clone() {
            ControlKind::Radio => self.fetch.form_mut().check_radio(index),
            ControlKind::Select { .. } => {
                let cursor = self.option_cursor;
                self.edit_active(|c| c.toggle_option(cursor));
            }
            ControlKind::Checkbox => self.edit_active(Control::toggle_checked),
            _ => self.edit_active(|c| c.push_char(' ')),
        }
    }

    fn toggle_option(&mut self, switch: impl FnOnce(&mut SnapshotOptions) -> &mut bool) {
        let mut options = self.options();
        let flag = switch(&mut options);
        *flag = !*flag;
        self.fetch.set_options(options);
        self.submissions = Self::register_submit_handler(&mut self.fetch);
        tracing::info!("Snapshot options changed: {options:?}");
        self.status_message = Some(format!(
            "empty={} disabled={} hidden={}",
            options.include_empty, options.include_disabled, options.include_hidden
        ));
    }

    /// Fire the form's submit event and collect what the handler produced
    pub fn submit(&mut self) {
        if !self.fetch.form_mut().submit() {
            self.status_message = Some("No submit handler registered".to_string());
            return;
        }
        self.drain_submissions();
    }

    fn drain_submissions(&mut self) {
        while let Ok(result) = self.submissions.try_recv() {
            match result.map_err(anyhow::Error::from).and_then(|snapshot| {
                let json = snapshot.to_json_pretty()?;
                Ok((snapshot.len(), json))
            }) {
                Ok((count, json)) => {
                    self.last_snapshot = Some(SubmittedSnapshot {
                        json,
                        taken_at: Local::now(),
                        from_submit: true,
                    });
                    self.status_message = Some(format!("Submitted {count} entries"));
                }
                Err(err) => {
                    tracing::error!("Submission failed: {err}");
                    self.status_message = Some(format!("Error: {err}"));
                }
            }
        }
    }

    /// Copy the last snapshot JSON to the clipboard
    pub fn copy_snapshot(&mut self) {
        let Some(snapshot) = &self.last_snapshot else {
            return;
        };
        let json = snapshot.json.clone();
        match self.clipboard.set_text(&json) {
            Ok(()) => self.status_message = Some(format!("Copied {} chars", json.len())),
            Err(err) => {
                tracing::warn!("Clipboard unavailable: {err}");
                self.status_message = Some(format!("Copy failed: {err}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MockClipboardSink;
    use crate::demo::registration_form;
    use fetchform::SelectOption;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn test_app(form: Form) -> App {
        let mut clipboard = MockClipboardSink::new();
        clipboard.expect_set_text().never();
        App::with_clipboard(form, SnapshotOptions::default(), Box::new(clipboard)).unwrap()
    }

    fn last_json(app: &App) -> serde_json::Value {
        let snapshot = app.last_snapshot.as_ref().unwrap();
        serde_json::from_str(&snapshot.json).unwrap()
    }

    #[test]
    fn test_initial_snapshot_from_construction() {
        let app = test_app(registration_form());
        let snapshot = app.last_snapshot.as_ref().unwrap();
        assert!(!snapshot.from_submit);
        assert_eq!(last_json(&app)["gender"], "f");
    }

    #[test]
    fn test_new_fails_on_unsupported_control() {
        let form = Form::new(vec![Control::unsupported("go", "BUTTON")]);
        let result = App::with_clipboard(
            form,
            SnapshotOptions::default(),
            Box::new(MockClipboardSink::new()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_tab_skips_hidden_controls() {
        let mut app = test_app(Form::new(vec![
            Control::text("a"),
            Control::hidden("token"),
            Control::text("b"),
        ]));
        assert_eq!(app.active_field, 0);
        app.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(app.active_field, 2);
        app.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(app.active_field, 0);
        app.handle_key(key(KeyCode::BackTab)).unwrap();
        assert_eq!(app.active_field, 2);
    }

    #[test]
    fn test_typing_then_submit() {
        let mut app = test_app(Form::new(vec![Control::text("name")]));
        for c in "Jo".chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
        app.handle_key(key(KeyCode::Enter)).unwrap();

        assert!(app.last_snapshot.as_ref().unwrap().from_submit);
        assert_eq!(last_json(&app), serde_json::json!({"name": "Jo"}));
        assert_eq!(app.status_message.as_deref(), Some("Submitted 1 entries"));
    }

    #[test]
    fn test_enter_in_textarea_inserts_newline() {
        let mut app = test_app(Form::new(vec![Control::textarea("bio")]));
        app.handle_key(key(KeyCode::Char('a'))).unwrap();
        app.handle_key(key(KeyCode::Enter)).unwrap();
        app.handle_key(key(KeyCode::Char('b'))).unwrap();
        assert_eq!(app.active_control().unwrap().value, "a\nb");

        app.handle_key(ctrl('s')).unwrap();
        assert_eq!(last_json(&app), serde_json::json!({"bio": "a\nb"}));
    }

    #[test]
    fn test_disabled_control_is_read_only() {
        let mut app = test_app(Form::new(vec![Control::text("ref").with_value("x").disabled()]));
        app.handle_key(key(KeyCode::Char('y'))).unwrap();
        assert_eq!(app.active_control().unwrap().value, "x");
        assert_eq!(app.status_message.as_deref(), Some("`ref` is disabled"));
    }

    #[test]
    fn test_space_checks_radio_and_unchecks_siblings() {
        let mut app = test_app(Form::new(vec![
            Control::radio("gender", "m").checked(),
            Control::radio("gender", "f"),
        ]));
        app.handle_key(key(KeyCode::Tab)).unwrap();
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        app.submit();
        assert_eq!(last_json(&app), serde_json::json!({"gender": "f"}));
    }

    #[test]
    fn test_space_toggles_multi_select_option_under_cursor() {
        let mut app = test_app(Form::new(vec![Control::select_multiple(
            "letters",
            vec![
                SelectOption::new("A").selected(),
                SelectOption::new("B"),
                SelectOption::new("C"),
            ],
        )]));
        app.handle_key(key(KeyCode::Down)).unwrap();
        app.handle_key(key(KeyCode::Down)).unwrap();
        app.handle_key(key(KeyCode::Down)).unwrap();
        assert_eq!(app.option_cursor, 2);
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        app.submit();
        assert_eq!(last_json(&app), serde_json::json!({"letters": ["A", "C"]}));
    }

    #[test]
    fn test_option_toggle_reregisters_handler() {
        let mut app = test_app(Form::new(vec![
            Control::text("name").with_value("x"),
            Control::hidden("token").with_value("t"),
        ]));
        app.handle_key(key(KeyCode::F(4))).unwrap();
        assert!(!app.options().include_hidden);

        app.submit();
        assert_eq!(last_json(&app), serde_json::json!({"name": "x"}));
    }

    #[test]
    fn test_handler_registered_at_construction() {
        let mut app = test_app(Form::new(vec![Control::text("name").with_value("x")]));
        assert!(app.fetch.form().has_submit_handler());

        app.submit();
        assert!(app.last_snapshot.as_ref().unwrap().from_submit);
        assert_eq!(last_json(&app), serde_json::json!({"name": "x"}));
    }

    #[test]
    fn test_submit_error_is_reported() {
        let mut app = test_app(Form::new(vec![Control::text("name")]));
        app.fetch.form_mut().push(Control::unsupported("go", "BUTTON"));
        app.submit();
        assert!(!app.last_snapshot.as_ref().unwrap().from_submit);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Error: unsupported control kind `BUTTON` (control `go`)")
        );
    }

    #[test]
    fn test_copy_snapshot_uses_clipboard() {
        let mut clipboard = MockClipboardSink::new();
        clipboard
            .expect_set_text()
            .withf(|text| text.contains("\"name\""))
            .times(1)
            .returning(|_| Ok(()));
        let form = Form::new(vec![Control::text("name")]);
        let mut app =
            App::with_clipboard(form, SnapshotOptions::default(), Box::new(clipboard)).unwrap();

        app.handle_key(ctrl('y')).unwrap();
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Copied")));
    }

    #[test]
    fn test_copy_failure_sets_status() {
        let mut clipboard = MockClipboardSink::new();
        clipboard
            .expect_set_text()
            .returning(|_| Err(anyhow::anyhow!("no display")));
        let mut app = App::with_clipboard(
            Form::new(vec![Control::text("name")]),
            SnapshotOptions::default(),
            Box::new(clipboard),
        )
        .unwrap();

        app.copy_snapshot();
        assert_eq!(app.status_message.as_deref(), Some("Copy failed: no display"));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app(Form::default());
        app.handle_key(ctrl('c')).unwrap();
        assert!(app.should_quit());

        let mut app = test_app(Form::default());
        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert!(app.should_quit());
    }
}

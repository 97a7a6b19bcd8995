//! Form handle boundary and an in-memory implementation

use super::control::{Control, ControlKind};
use std::fmt;

/// Callback run when the form is submitted, given the controls current at that moment
pub type SubmitHandler = Box<dyn FnMut(&[Control]) + Send>;

/// Trait for the host-side form the snapshot engine reads from
pub trait FormHandle {
    /// Ordered controls; must stay stable for the duration of one snapshot computation
    fn controls(&self) -> &[Control];

    /// Register the submission handler, replacing any previous one
    fn set_submit_handler(&mut self, handler: SubmitHandler);
}

/// In-memory form: an ordered list of controls plus at most one submit handler
#[derive(Default)]
pub struct Form {
    controls: Vec<Control>,
    submit_handler: Option<SubmitHandler>,
}

impl Form {
    pub fn new(controls: Vec<Control>) -> Self {
        Self {
            controls,
            submit_handler: None,
        }
    }

    /// Append a control
    pub fn push(&mut self, control: Control) {
        self.controls.push(control);
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn control(&self, index: usize) -> Option<&Control> {
        self.controls.get(index)
    }

    pub fn control_mut(&mut self, index: usize) -> Option<&mut Control> {
        self.controls.get_mut(index)
    }

    /// First control with the given name
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Control> {
        self.controls.iter_mut().find(|c| c.name == name)
    }

    /// All controls sharing `name`, in form order
    pub fn radio_group<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Control> + 'a {
        self.controls.iter().filter(move |c| c.name == name)
    }

    /// Check one radio of a group and uncheck its siblings
    pub fn check_radio(&mut self, index: usize) {
        let Some(name) = self.controls.get(index).map(|c| c.name.clone()) else {
            return;
        };
        for (i, control) in self.controls.iter_mut().enumerate() {
            if control.name == name && control.kind == ControlKind::Radio {
                control.set_checked(i == index);
            }
        }
    }

    pub fn has_submit_handler(&self) -> bool {
        self.submit_handler.is_some()
    }

    /// Fire the submission event. Returns false when no handler is registered.
    pub fn submit(&mut self) -> bool {
        match self.submit_handler.as_mut() {
            Some(handler) => {
                handler(&self.controls);
                true
            }
            None => false,
        }
    }
}

impl FormHandle for Form {
    fn controls(&self) -> &[Control] {
        &self.controls
    }

    fn set_submit_handler(&mut self, handler: SubmitHandler) {
        self.submit_handler = Some(handler);
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("controls", &self.controls)
            .field("has_submit_handler", &self.has_submit_handler())
            .finish()
    }
}

impl From<Vec<Control>> for Form {
    fn from(controls: Vec<Control>) -> Self {
        Self::new(controls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn gender_form() -> Form {
        Form::new(vec![
            Control::radio("gender", "m"),
            Control::text("name"),
            Control::radio("gender", "f"),
            Control::radio("gender", "x"),
        ])
    }

    #[test]
    fn test_submit_without_handler() {
        let mut form = gender_form();
        assert!(!form.has_submit_handler());
        assert!(!form.submit());
    }

    #[test]
    fn test_submit_passes_current_controls() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut form = gender_form();
        form.set_submit_handler(Box::new(move |controls: &[Control]| {
            sink.lock().unwrap().push(controls.len());
        }));

        form.push(Control::checkbox("subscribe"));
        assert!(form.submit());
        assert_eq!(*seen.lock().unwrap(), vec![5]);
    }

    #[test]
    fn test_set_submit_handler_replaces_previous() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let first = Arc::clone(&calls);
        let second = Arc::clone(&calls);
        let mut form = gender_form();
        form.set_submit_handler(Box::new(move |_: &[Control]| first.lock().unwrap().push("first")));
        form.set_submit_handler(Box::new(move |_: &[Control]| second.lock().unwrap().push("second")));

        form.submit();
        form.submit();
        assert_eq!(*calls.lock().unwrap(), vec!["second", "second"]);
    }

    #[test]
    fn test_radio_group_spans_whole_form() {
        let form = gender_form();
        let values: Vec<&str> = form.radio_group("gender").map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["m", "f", "x"]);
    }

    #[test]
    fn test_check_radio_unchecks_siblings() {
        let mut form = gender_form();
        form.check_radio(0);
        form.check_radio(2);
        let checked: Vec<bool> = form.radio_group("gender").map(|c| c.checked).collect();
        assert_eq!(checked, vec![false, true, false]);
    }

    #[test]
    fn test_check_radio_leaves_same_named_checkbox() {
        let mut form = Form::new(vec![
            Control::checkbox("pick").checked(),
            Control::radio("pick", "a"),
        ]);
        form.check_radio(1);
        assert_eq!(form.control(0).map(|c| c.checked), Some(true));
        assert_eq!(form.control(1).map(|c| c.checked), Some(true));
    }

    #[test]
    fn test_find_mut() {
        let mut form = gender_form();
        if let Some(name) = form.find_mut("name") {
            name.set_value("Jane".to_string());
        }
        assert_eq!(form.control(1).map(|c| c.value.as_str()), Some("Jane"));
        assert!(form.find_mut("missing").is_none());
    }

    #[test]
    fn test_debug_hides_handler() {
        let mut form = Form::default();
        form.set_submit_handler(Box::new(|_: &[Control]| {}));
        let debug_str = format!("{:?}", form);
        assert!(debug_str.contains("has_submit_handler: true"));
    }
}

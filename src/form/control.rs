//! Form control value objects

/// Input type of the hidden text-like variant
pub const HIDDEN_INPUT_TYPE: &str = "hidden";

/// Closed set of control kinds the snapshot engine understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    /// Text-like input (`text`, `email`, `password`, `number`, `hidden`, ...)
    Text { input_type: String },
    Checkbox,
    Radio,
    /// Selection list, single or multiple
    Select { multiple: bool },
    Textarea,
    /// Anything else, carrying the element's identifying label
    Unsupported(String),
}

impl ControlKind {
    /// Classify an element by tag name and input type.
    ///
    /// Tag matching is case-insensitive. An `INPUT` without a type is `text`.
    pub fn from_element(tag: &str, input_type: Option<&str>) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "INPUT" => {
                let input_type = input_type.unwrap_or("text").to_ascii_lowercase();
                match input_type.as_str() {
                    "checkbox" => ControlKind::Checkbox,
                    "radio" => ControlKind::Radio,
                    _ => ControlKind::Text { input_type },
                }
            }
            "SELECT" => ControlKind::Select {
                multiple: input_type.is_some_and(|t| t.eq_ignore_ascii_case("select-multiple")),
            },
            "TEXTAREA" => ControlKind::Textarea,
            _ => ControlKind::Unsupported(tag.to_string()),
        }
    }

    /// Short label used in logs and errors
    pub fn label(&self) -> &str {
        match self {
            ControlKind::Text { input_type } => input_type,
            ControlKind::Checkbox => "checkbox",
            ControlKind::Radio => "radio",
            ControlKind::Select { multiple: false } => "select-one",
            ControlKind::Select { multiple: true } => "select-multiple",
            ControlKind::Textarea => "textarea",
            ControlKind::Unsupported(label) => label,
        }
    }
}

/// A selectable entry of a select control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    /// Create an unselected option whose label equals its value
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
            selected: false,
        }
    }

    /// Set a display label distinct from the value
    pub fn labeled(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    /// Mark the option as selected
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }
}

/// A single named control with its current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub name: String,
    pub kind: ControlKind,
    /// Raw value; for checkable controls this is the value submitted when checked
    pub value: String,
    pub checked: bool,
    pub disabled: bool,
    pub options: Vec<SelectOption>,
}

impl Control {
    fn new(name: &str, kind: ControlKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            value: String::new(),
            checked: false,
            disabled: false,
            options: Vec::new(),
        }
    }

    /// Create a text-like input of the given type, normalised to lowercase
    pub fn input(name: &str, input_type: &str) -> Self {
        Self::new(
            name,
            ControlKind::Text {
                input_type: input_type.to_ascii_lowercase(),
            },
        )
    }

    /// Create a plain text input
    pub fn text(name: &str) -> Self {
        Self::input(name, "text")
    }

    /// Create a hidden input
    pub fn hidden(name: &str) -> Self {
        Self::input(name, HIDDEN_INPUT_TYPE)
    }

    /// Create a checkbox
    pub fn checkbox(name: &str) -> Self {
        Self::new(name, ControlKind::Checkbox).with_value("on")
    }

    /// Create one radio button of a group
    pub fn radio(name: &str, value: &str) -> Self {
        Self::new(name, ControlKind::Radio).with_value(value)
    }

    /// Create a single-choice select
    pub fn select(name: &str, options: Vec<SelectOption>) -> Self {
        Self {
            options,
            ..Self::new(name, ControlKind::Select { multiple: false })
        }
    }

    /// Create a multiple-choice select
    pub fn select_multiple(name: &str, options: Vec<SelectOption>) -> Self {
        Self {
            options,
            ..Self::new(name, ControlKind::Select { multiple: true })
        }
    }

    /// Create a textarea
    pub fn textarea(name: &str) -> Self {
        Self::new(name, ControlKind::Textarea)
    }

    /// Create a control of a kind the engine does not handle
    pub fn unsupported(name: &str, label: &str) -> Self {
        Self::new(name, ControlKind::Unsupported(label.to_string()))
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// True only for the hidden text-like variant
    pub fn is_hidden(&self) -> bool {
        matches!(
            &self.kind,
            ControlKind::Text { input_type } if input_type.eq_ignore_ascii_case(HIDDEN_INPUT_TYPE)
        )
    }

    /// Whether the control has a checked state at all
    pub fn is_checkable(&self) -> bool {
        matches!(self.kind, ControlKind::Checkbox | ControlKind::Radio)
    }

    /// Whether the control edits free text
    pub fn is_textual(&self) -> bool {
        matches!(self.kind, ControlKind::Text { .. } | ControlKind::Textarea)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, ControlKind::Textarea)
    }

    /// Replace the raw value
    pub fn set_value(&mut self, value: String) {
        self.value = value;
    }

    /// Append a character to a text value
    pub fn push_char(&mut self, c: char) {
        if self.is_textual() {
            self.value.push(c);
        }
    }

    /// Remove the last character of a text value
    pub fn pop_char(&mut self) {
        if self.is_textual() {
            self.value.pop();
        }
    }

    pub fn set_checked(&mut self, checked: bool) {
        if self.is_checkable() {
            self.checked = checked;
        }
    }

    pub fn toggle_checked(&mut self) {
        self.set_checked(!self.checked);
    }

    /// Toggle an option; a single select keeps at most one option selected
    pub fn toggle_option(&mut self, index: usize) {
        let ControlKind::Select { multiple } = self.kind else {
            return;
        };
        if index >= self.options.len() {
            return;
        }
        if multiple {
            let option = &mut self.options[index];
            option.selected = !option.selected;
        } else {
            for (i, option) in self.options.iter_mut().enumerate() {
                option.selected = i == index;
            }
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.kind {
            ControlKind::Checkbox | ControlKind::Radio => {
                let mark = if self.checked { "[x]" } else { "[ ]" };
                format!("{mark} {}", self.value)
            }
            ControlKind::Select { .. } => self
                .options
                .iter()
                .filter(|o| o.selected)
                .map(|o| o.label.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            _ => self.value.clone(),
        }
    }
}

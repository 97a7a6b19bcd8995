//! Inclusion policy: options and the filter predicates they enable

use super::value::FieldValue;
use crate::form::Control;
use serde::{Deserialize, Serialize};

/// Switches controlling which resolved entries are kept. All default to true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotOptions {
    /// Keep entries whose value is the empty string
    pub include_empty: bool,
    /// Keep entries of disabled controls
    pub include_disabled: bool,
    /// Keep entries of hidden inputs
    pub include_hidden: bool,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            include_empty: true,
            include_disabled: true,
            include_hidden: true,
        }
    }
}

impl SnapshotOptions {
    /// Filters enabled by switches set to false
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::with_capacity(3);
        if !self.include_empty {
            filters.push(Filter::Empty);
        }
        if !self.include_disabled {
            filters.push(Filter::Disabled);
        }
        if !self.include_hidden {
            filters.push(Filter::Hidden);
        }
        filters
    }

    /// First filter rejecting the entry, if any
    pub fn rejecting(&self, control: &Control, value: &FieldValue) -> Option<Filter> {
        self.filters()
            .into_iter()
            .find(|f| f.rejects(control, value))
    }
}

/// Independent predicates dropping a resolved entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Empty,
    Disabled,
    Hidden,
}

impl Filter {
    pub fn rejects(&self, control: &Control, value: &FieldValue) -> bool {
        match self {
            Filter::Empty => value.is_empty_string(),
            Filter::Disabled => control.disabled,
            Filter::Hidden => control.is_hidden(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Filter::Empty => "empty",
            Filter::Disabled => "disabled",
            Filter::Hidden => "hidden",
        }
    }
}

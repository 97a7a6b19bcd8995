//! Per-kind value resolution

use super::value::FieldValue;
use crate::error::FetchFormError;
use crate::form::{Control, ControlKind, SelectOption};

/// Resolve a control's value.
///
/// `siblings` is the group of controls sharing the control's name, in form order.
/// Only radio controls consult it.
pub fn resolve<'a, I>(control: &Control, siblings: I) -> Result<FieldValue, FetchFormError>
where
    I: IntoIterator<Item = &'a Control>,
{
    let value = match &control.kind {
        ControlKind::Select { multiple: true } => FieldValue::List(select_values(&control.options)),
        ControlKind::Select { multiple: false } => FieldValue::Text(
            control
                .options
                .iter()
                .find(|o| o.selected)
                .map(|o| o.value.clone())
                .unwrap_or_default(),
        ),
        ControlKind::Checkbox => FieldValue::Bool(control.checked),
        ControlKind::Radio => resolve_radio(siblings).into(),
        ControlKind::Text { .. } | ControlKind::Textarea => FieldValue::Text(control.value.clone()),
        ControlKind::Unsupported(kind) => {
            return Err(FetchFormError::UnsupportedControlKind {
                kind: kind.clone(),
                name: control.name.clone(),
            })
        }
    };
    Ok(value)
}

/// Values of every selected option, in option order
pub fn select_values(options: &[SelectOption]) -> Vec<String> {
    options
        .iter()
        .filter(|o| o.selected)
        .map(|o| o.value.clone())
        .collect()
}

/// Value of the first checked control in a radio group, `None` when nothing is checked
pub fn resolve_radio<'a, I>(group: I) -> Option<String>
where
    I: IntoIterator<Item = &'a Control>,
{
    group
        .into_iter()
        .find(|c| c.is_checkable() && c.checked)
        .map(|c| c.value.clone())
}

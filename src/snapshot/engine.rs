//! Snapshot computation and the `FetchForm` wrapper around a form handle

use super::filter::SnapshotOptions;
use super::resolve::resolve;
use super::value::Snapshot;
use crate::error::FetchFormError;
use crate::form::{Control, FormHandle};

/// Walk `controls` in order, resolve each value and apply the inclusion policy.
///
/// Later controls overwrite earlier entries of the same name. When a filter rejects
/// a control, any earlier entry under its name is dropped as well.
pub fn compute_snapshot(
    controls: &[Control],
    options: &SnapshotOptions,
) -> Result<Snapshot, FetchFormError> {
    let mut snapshot = Snapshot::new();

    for control in controls {
        let siblings = controls.iter().filter(|c| c.name == control.name);
        let value = resolve(control, siblings).inspect_err(|err| {
            tracing::warn!("Snapshot aborted: {err}");
        })?;
        tracing::trace!(name = %control.name, kind = control.kind.label(), ?value, "resolved");

        match options.rejecting(control, &value) {
            None => snapshot.insert(&control.name, value),
            Some(filter) => {
                tracing::debug!(name = %control.name, filter = filter.name(), "dropped entry");
                snapshot.remove(&control.name);
            }
        }
    }

    tracing::debug!("Snapshot computed with {} of {} controls", snapshot.len(), controls.len());
    Ok(snapshot)
}

/// A form handle paired with options and the snapshot taken at construction
pub struct FetchForm<F: FormHandle> {
    form: F,
    options: SnapshotOptions,
    data: Snapshot,
}

impl<F: FormHandle> FetchForm<F> {
    /// Wrap `form` and take its initial snapshot
    pub fn new(form: F, options: SnapshotOptions) -> Result<Self, FetchFormError> {
        let data = compute_snapshot(form.controls(), &options)?;
        Ok(Self {
            form,
            options,
            data,
        })
    }

    /// Wrap `form` with every switch enabled
    pub fn with_defaults(form: F) -> Result<Self, FetchFormError> {
        Self::new(form, SnapshotOptions::default())
    }

    /// Snapshot taken at construction; does not follow later control changes
    pub fn data(&self) -> &Snapshot {
        &self.data
    }

    /// Fresh snapshot of the controls' current state
    pub fn get_data(&self) -> Result<Snapshot, FetchFormError> {
        compute_snapshot(self.form.controls(), &self.options)
    }

    /// Register the form's submit handler, replacing any previous one.
    ///
    /// The callback receives the controls at submission time and is responsible for
    /// taking a fresh snapshot if it needs one.
    pub fn submit<C>(&mut self, callback: C)
    where
        C: FnMut(&[Control]) + Send + 'static,
    {
        self.form.set_submit_handler(Box::new(callback));
    }

    pub fn options(&self) -> &SnapshotOptions {
        &self.options
    }

    /// Change the options used by later `get_data` calls
    pub fn set_options(&mut self, options: SnapshotOptions) {
        self.options = options;
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn into_form(self) -> F {
        self.form
    }
}

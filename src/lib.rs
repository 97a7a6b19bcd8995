//! Fetchform - snapshot the live state of a form
//!
//! Walks a form's controls in order, resolves each control's value by kind
//! (text, checkbox, radio group, select, textarea) and applies the inclusion
//! policy to produce a flat, ordered name/value map.
//!
//! ```
//! use fetchform::{Control, FetchForm, FieldValue, Form, SnapshotOptions};
//!
//! let form = Form::new(vec![
//!     Control::text("name").with_value("John Doe"),
//!     Control::hidden("token"),
//! ]);
//! let options = SnapshotOptions { include_empty: false, ..Default::default() };
//! let fetch = FetchForm::new(form, options).unwrap();
//! assert_eq!(fetch.data().get("name"), Some(&FieldValue::from("John Doe")));
//! assert!(!fetch.data().contains("token"));
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod snapshot;

pub use config::FetchFormConfig;
pub use error::FetchFormError;
pub use form::{Control, ControlKind, Form, FormHandle, SelectOption, SubmitHandler};
pub use snapshot::{compute_snapshot, FetchForm, FieldValue, Filter, Snapshot, SnapshotOptions};

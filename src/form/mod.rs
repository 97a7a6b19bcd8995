//! Form domain layer
//!
//! Controls, their kinds and the handle through which the snapshot engine
//! reads a form and registers its submit handler.

mod control;
mod handle;

pub use control::{Control, ControlKind, SelectOption, HIDDEN_INPUT_TYPE};
pub use handle::{Form, FormHandle, SubmitHandler};

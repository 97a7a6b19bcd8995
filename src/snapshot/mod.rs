//! Snapshot engine: resolve every control's value and apply the inclusion policy

mod engine;
mod filter;
mod resolve;
mod value;

pub use engine::{compute_snapshot, FetchForm};
pub use filter::{Filter, SnapshotOptions};
pub use resolve::{resolve, resolve_radio, select_values};
pub use value::{FieldValue, Snapshot};

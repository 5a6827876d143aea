//! Table metadata, column filtering and schema record assembly.

mod assemble;
mod filter;
mod types;

pub use assemble::assemble;
pub use filter::{check_single_primary_key, is_audit_column, ColumnViews, AUDIT_COLUMNS};
pub use types::*;

pub mod get_record;
pub mod listings;
pub mod search;

pub use get_record::*;
pub use listings::*;
pub use search::*;

use serde::Serialize;

/// Render a tool response as pretty JSON.
pub(crate) fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

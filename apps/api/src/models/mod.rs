pub mod campaign;
pub mod creator;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Decodes a free-form JSONB column. A malformed value is logged and dropped
/// so one bad row never fails the whole candidate query.
fn decode_jsonb<T: DeserializeOwned>(
    table: &str,
    id: i32,
    column: &str,
    value: Option<Value>,
) -> Option<T> {
    let value = value.filter(|v| !v.is_null())?;
    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            warn!("Ignoring malformed {table}.{column} for id {id}: {e}");
            None
        }
    }
}

/// Decodes a JSONB array item by item, skipping items that do not decode.
fn decode_jsonb_list<T: DeserializeOwned>(
    table: &str,
    id: i32,
    column: &str,
    value: Option<Value>,
) -> Vec<T> {
    let Some(items) = decode_jsonb::<Vec<Value>>(table, id, column, value) else {
        return Vec::new();
    };
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!("Skipping malformed {table}.{column} item for id {id}: {e}");
                None
            }
        })
        .collect()
}

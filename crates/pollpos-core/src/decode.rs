//! Input boundary: turns an already-fetched poll payload into [`PollRow`]s.
//!
//! Two payload shapes are accepted:
//! - a flat array of poll-row objects ([`decode_poll_rows`])
//! - the upstream nested shape, an array of week rankings
//!   `{ week, polls: [{ poll, ranks: [...] }] }` ([`flatten_rankings`])
//!
//! Shape errors fail fast: non-array top levels, zero ranks and empty school
//! names are rejected here so the layout stages never see them. Missing
//! optional fields (`color`, `logos`) are never errors and unknown fields
//! are ignored.

use crate::model::PollRow;
use crate::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, Deserialize)]
struct RankEntry {
    rank: u32,
    school: String,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    logos: Vec<String>,
}

fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Some payload producers stringify week numbers; accept both.
fn json_u32(v: &Value) -> Option<u32> {
    match v {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Minimal structural check: published ranks start at 1 and every row names
/// a school. Everything downstream assumes both.
fn check_row_shape(rank: u32, school: &str) -> Result<()> {
    if rank == 0 {
        return Err(Error::InvalidShape {
            message: format!("school {school:?} has rank 0; published ranks start at 1"),
        });
    }
    if school.is_empty() {
        return Err(Error::InvalidShape {
            message: "rank entry has an empty school name".to_string(),
        });
    }
    Ok(())
}

/// Decodes a flat top-level array of [`PollRow`]-shaped objects.
pub fn decode_poll_rows(payload: &Value) -> Result<Vec<PollRow>> {
    let Some(items) = payload.as_array() else {
        return Err(Error::InvalidShape {
            message: format!("expected a top-level array, got {}", value_kind(payload)),
        });
    };

    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        let row: PollRow = serde_json::from_value(item.clone())?;
        check_row_shape(row.rank, &row.school)?;
        rows.push(row);
    }
    debug!(rows = rows.len(), "decoded flat poll payload");
    Ok(rows)
}

/// Flattens the upstream week-rankings payload, keeping only entries of the
/// named poll.
///
/// A week entry without a `polls` array contributes no rows. Weeks whose
/// `week` field is neither a number nor a numeric string are a shape error.
pub fn flatten_rankings(payload: &Value, poll: &str) -> Result<Vec<PollRow>> {
    let Some(weeks) = payload.as_array() else {
        return Err(Error::InvalidShape {
            message: format!("expected a top-level array, got {}", value_kind(payload)),
        });
    };

    let empty: Vec<Value> = Vec::new();
    let mut rows = Vec::new();
    for (idx, entry) in weeks.iter().enumerate() {
        let Some(obj) = entry.as_object() else {
            return Err(Error::InvalidShape {
                message: format!("week entry {idx} is not an object"),
            });
        };
        let week = obj.get("week").and_then(json_u32).ok_or_else(|| Error::InvalidShape {
            message: format!("week entry {idx} has no usable `week` field"),
        })?;

        let polls = obj.get("polls").and_then(Value::as_array).unwrap_or(&empty);
        for poll_entry in polls {
            let name = poll_entry.get("poll").and_then(Value::as_str).unwrap_or("");
            if name != poll {
                continue;
            }
            let ranks = poll_entry.get("ranks").and_then(Value::as_array).unwrap_or(&empty);
            for rank_value in ranks {
                let rank: RankEntry = serde_json::from_value(rank_value.clone())?;
                check_row_shape(rank.rank, &rank.school)?;
                rows.push(PollRow {
                    week,
                    poll: name.to_string(),
                    rank: rank.rank,
                    school: rank.school,
                    color: rank.color,
                    logos: rank.logos,
                });
            }
        }
    }
    debug!(rows = rows.len(), poll, "flattened week-rankings payload");
    Ok(rows)
}

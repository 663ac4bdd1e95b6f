//! Response shaping: engine output to the wire shape each route variant
//! promises. The shapes are a compatibility surface: the 1-D variants
//! exist for clients that predate result grouping, and the discord-safe cap
//! exists for chat-client consumers with a hard message size limit.

use serde_json::{Value, json};

use crate::dispatch::EngineOutput;

/// Fixed character budget for discord-safe responses.
pub const DISCORD_CHAR_BUDGET: usize = 2000;

/// Per-route response shape selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeTag {
    /// Grouped arrays, one group per lexical sense / input token.
    TwoDimensional,
    /// Groups flattened into one ordered sequence, group order then
    /// intra-group order.
    OneDimensional,
    /// Output serialized as-is (numbers, name lines, raw tables).
    Raw,
}

/// Serialized size in characters of a JSON value.
fn serialized_len(value: &Value) -> usize {
    serde_json::to_string(value).map(|s| s.chars().count()).unwrap_or(usize::MAX)
}

pub fn shape(output: EngineOutput, tag: ShapeTag) -> Value {
    match (output, tag) {
        (EngineOutput::Grouped(groups), ShapeTag::OneDimensional) => {
            let flat: Vec<_> = groups.into_iter().flatten().collect();
            json!(flat)
        }
        (EngineOutput::Grouped(groups), _) => json!(groups),
        (EngineOutput::Flat(words), _) => json!(words),
        (EngineOutput::Number(n), _) => json!(n),
        (EngineOutput::Lines(lines), _) => Value::String(lines),
    }
}

/// Cap a shaped response to `budget` serialized characters by dropping whole
/// trailing items (array elements, or lines of a newline-joined string),
/// never by cutting inside an item.
pub fn cap_to_budget(value: Value, budget: usize) -> Value {
    match value {
        Value::Array(mut items) => {
            while !items.is_empty() && serialized_len(&Value::Array(items.clone())) > budget {
                items.pop();
            }
            Value::Array(items)
        }
        Value::String(text) => {
            let mut lines: Vec<&str> = text.lines().collect();
            while !lines.is_empty()
                && serialized_len(&Value::String(lines.join("\n"))) > budget
            {
                lines.pop();
            }
            Value::String(lines.join("\n"))
        }
        other => other,
    }
}

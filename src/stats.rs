use serde::Serialize;
use serde_json::Value;

/// Summary of an already-parsed value: total key/element count, maximum
/// nesting depth, and a human-readable serialized size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonStats {
    pub keys: usize,
    pub depth: usize,
    pub size: String,
}

/// Compute stats by walking the value tree. The root sits at depth 0, so a
/// flat object has depth 1.
pub fn json_stats(value: &Value) -> JsonStats {
    let mut keys = 0usize;
    let mut depth = 0usize;
    walk(value, 0, &mut keys, &mut depth);
    let bytes = serde_json::to_string(value).map(|s| s.len()).unwrap_or(0);
    JsonStats {
        keys,
        depth,
        size: human_size(bytes),
    }
}

fn walk(value: &Value, level: usize, keys: &mut usize, max_depth: &mut usize) {
    if level > *max_depth {
        *max_depth = level;
    }
    match value {
        Value::Array(items) => {
            *keys += items.len();
            for item in items {
                walk(item, level + 1, keys, max_depth);
            }
        }
        Value::Object(map) => {
            *keys += map.len();
            for item in map.values() {
                walk(item, level + 1, keys, max_depth);
            }
        }
        _ => {}
    }
}

fn human_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * 1024;
    if bytes < KB {
        format!("{bytes} B")
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}

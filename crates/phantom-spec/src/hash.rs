//! Canonical parameter hashing.
//!
//! The hash is computed over the parameters serialized as JSON with
//! lexicographically sorted keys, so field order in a config file never
//! changes it.

use crate::error::ParamsError;
use crate::params::GenerationParameters;

/// Computes the canonical BLAKE3 hash of generation parameters.
///
/// ```text
/// params_hash = hex(BLAKE3(sorted_json(params)))
/// ```
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
pub fn canonical_params_hash(params: &GenerationParameters) -> Result<String, ParamsError> {
    let value = serde_json::to_value(params)?;
    canonical_value_hash(&value)
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> Result<String, ParamsError> {
    let canonical = canonicalize_json(value)?;
    let hash = blake3::hash(canonical.as_bytes());
    Ok(hash.to_hex().to_string())
}

/// Serializes a JSON value with object keys sorted and no whitespace.
pub fn canonicalize_json(value: &serde_json::Value) -> Result<String, ParamsError> {
    let mut out = String::new();
    write_canonical(value, &mut out)?;
    Ok(out)
}

fn write_canonical(value: &serde_json::Value, out: &mut String) -> Result<(), ParamsError> {
    match value {
        serde_json::Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&serde_json::to_string(key)?);
                out.push(':');
                write_canonical(&map[key.as_str()], out)?;
            }
            out.push('}');
        }
        serde_json::Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out)?;
            }
            out.push(']');
        }
        other => out.push_str(&serde_json::to_string(other)?),
    }
    Ok(())
}

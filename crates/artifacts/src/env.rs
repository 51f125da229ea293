//! `KEY=VALUE` environment files.
//!
//! Blank lines and `#` comments are ignored; values may be wrapped in
//! single or double quotes. Lines without `=` are skipped with a warning.

use std::collections::BTreeMap;

/// Parsed environment file, ordered by key.
pub type EnvMap = BTreeMap<String, String>;

pub fn parse_env(source: &str) -> EnvMap {
    let mut env = EnvMap::new();
    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            tracing::warn!("ignoring malformed env line {}: {}", index + 1, line);
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            tracing::warn!("ignoring env line {} with empty key", index + 1);
            continue;
        }
        env.insert(key.to_string(), unquote(value.trim()).to_string());
    }
    env
}

pub fn stringify_env(env: &EnvMap) -> String {
    env.iter()
        .map(|(key, value)| format!("{}={}\n", key, value))
        .collect()
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

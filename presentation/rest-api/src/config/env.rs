use std::str::FromStr;

/// Source of configuration values, normally the process environment.
pub type Vars<'a> = &'a dyn Fn(&str) -> Option<String>;

pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Reads `key`, falling back to `default` when unset.
pub fn string_or(vars: Vars, key: &str, default: &str) -> String {
    vars(key).unwrap_or_else(|| default.to_string())
}

/// Parses `key`, falling back to `default` when unset or invalid.
pub fn parse_or<T: FromStr>(vars: Vars, key: &str, default: T) -> T {
    match vars(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid value {:?} for {}, using default", raw, key);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
pub fn vars_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: std::collections::HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

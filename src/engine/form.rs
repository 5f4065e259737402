//! Read-only access to submitted form parameters.

use std::collections::BTreeMap;

/// Submitted key/value pairs for the current administrative action.
///
/// Not a general HTTP abstraction; it only exposes the parameters the
/// settings pages read. Repeated names accumulate, mirroring `name[]`
/// form fields.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    values: BTreeMap<String, Vec<String>>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one submitted value under `name`.
    pub fn push(&mut self, name: &str, value: &str) -> &mut Self {
        self.values
            .entry(name.to_string())
            .or_default()
            .push(value.to_string());
        self
    }

    /// First submitted value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    /// Every submitted value for `name`.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.values.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when `name` was submitted at all, even with an empty value.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_names_accumulate() {
        let mut form = FormData::new();
        form.push("cronjobs", "scan");
        form.push("cronjobs", "report");

        assert_eq!(form.get("cronjobs"), Some("scan"));
        assert_eq!(form.get_all("cronjobs"), ["scan", "report"]);
        assert!(form.contains("cronjobs"));
        assert!(!form.contains("revproxy"));
        assert!(form.get_all("revproxy").is_empty());
    }
}

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Options consumed by the purge step.
///
/// Defaults are applied when the struct is built or deserialised, so code
/// downstream never has to fill in a missing body or header map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurgeOptions {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub zone_id: Option<String>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default = "default_body")]
    pub body: Value,
}

pub fn default_body() -> Value {
    json!({ "purge_everything": true })
}

impl Default for PurgeOptions {
    fn default() -> Self {
        Self {
            token: None,
            zone_id: None,
            headers: BTreeMap::new(),
            body: default_body(),
        }
    }
}

impl PurgeOptions {
    pub fn new(token: impl Into<String>, zone_id: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            zone_id: Some(zone_id.into()),
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    /// Names of required options that are absent or empty, in declaration order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [("token", &self.token), ("zoneId", &self.zone_id)]
            .into_iter()
            .filter(|(_, value)| !is_present(value))
            .map(|(name, _)| name)
            .collect()
    }

    /// Returns `(token, zone_id)` once both are present.
    pub fn validate(&self) -> CoreResult<(&str, &str)> {
        match (self.token.as_deref(), self.zone_id.as_deref()) {
            (Some(token), Some(zone_id)) if !token.is_empty() && !zone_id.is_empty() => {
                Ok((token, zone_id))
            }
            _ => Err(CoreError::MissingOptions(
                self.missing_required()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            )),
        }
    }
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Loose truthiness for JSON values: `null`, `false`, `0`, `NaN` and `""` are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_on_deserialize() {
        let opts: PurgeOptions =
            serde_json::from_value(json!({ "token": "t1", "zoneId": "z1" })).unwrap();
        assert_eq!(opts.zone_id.as_deref(), Some("z1"));
        assert!(opts.headers.is_empty());
        assert_eq!(opts.body, json!({ "purge_everything": true }));
    }

    #[test]
    fn caller_body_replaces_default() {
        let opts: PurgeOptions = serde_json::from_value(json!({
            "token": "t1",
            "zoneId": "z1",
            "body": { "files": ["https://example.com/index.html"] }
        }))
        .unwrap();
        assert_eq!(
            opts.body,
            json!({ "files": ["https://example.com/index.html"] })
        );
    }

    #[test]
    fn missing_required_reports_exact_fields() {
        assert!(PurgeOptions::new("t1", "z1").missing_required().is_empty());

        let no_token = PurgeOptions {
            zone_id: Some("z1".into()),
            ..PurgeOptions::default()
        };
        assert_eq!(no_token.missing_required(), vec!["token"]);

        let no_zone = PurgeOptions {
            token: Some("t1".into()),
            ..PurgeOptions::default()
        };
        assert_eq!(no_zone.missing_required(), vec!["zoneId"]);

        assert_eq!(
            PurgeOptions::default().missing_required(),
            vec!["token", "zoneId"]
        );
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let opts = PurgeOptions::new("", "z1");
        assert_eq!(opts.missing_required(), vec!["token"]);
        match opts.validate() {
            Err(CoreError::MissingOptions(fields)) => assert_eq!(fields, vec!["token"]),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn validate_returns_credentials() {
        let opts = PurgeOptions::new("t1", "z1");
        assert_eq!(opts.validate().unwrap(), ("t1", "z1"));
    }
}

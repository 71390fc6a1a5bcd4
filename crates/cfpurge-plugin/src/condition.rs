use crate::host_api::HostApi;
use crate::options::PluginOptions;
use cfpurge_core::is_truthy;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

pub type PredicateFn = dyn Fn(&dyn HostApi, &PluginOptions) -> bool + Send + Sync;

/// Decides whether the plugin acts during a build.
#[derive(Clone)]
pub enum Condition {
    Static(bool),
    Predicate(Arc<PredicateFn>),
}

impl Condition {
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&dyn HostApi, &PluginOptions) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(f))
    }

    pub fn evaluate(&self, api: &dyn HostApi, options: &PluginOptions) -> bool {
        match self {
            Self::Static(value) => *value,
            Self::Predicate(f) => f(api, options),
        }
    }
}

impl Default for Condition {
    fn default() -> Self {
        Self::Static(true)
    }
}

impl From<bool> for Condition {
    fn from(value: bool) -> Self {
        Self::Static(value)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(value) => f.debug_tuple("Static").field(value).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

// Configuration files may carry any JSON value here; it is coerced the way a
// loosely typed host would.
impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::Static(is_truthy(&value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host_api::{Reporter, StandaloneHost};
    use cfpurge_core::PurgeOptions;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn static_values_pass_through() {
        let host = StandaloneHost::new();
        let opts = PluginOptions::default();
        assert!(Condition::Static(true).evaluate(&host, &opts));
        assert!(!Condition::Static(false).evaluate(&host, &opts));
    }

    #[test]
    fn predicate_sees_current_options() {
        let host = StandaloneHost::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let condition = Condition::predicate(move |api, opts| {
            api.reporter().info("predicate consulted");
            seen.fetch_add(1, Ordering::SeqCst);
            opts.purge.zone_id.as_deref() == Some("prod")
        });

        let prod = PluginOptions::new(condition.clone(), PurgeOptions::new("t", "prod"));
        let staging = PluginOptions::new(condition.clone(), PurgeOptions::new("t", "staging"));

        assert!(condition.evaluate(&host, &prod));
        assert!(!condition.evaluate(&host, &staging));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn json_values_coerce_like_a_loose_host() {
        let cases = [
            (json!(null), false),
            (json!(false), false),
            (json!(0), false),
            (json!(0.0), false),
            (json!(""), false),
            (json!(true), true),
            (json!(1), true),
            (json!("production"), true),
            (json!([]), true),
            (json!({}), true),
        ];
        for (raw, expected) in cases {
            let condition: Condition = serde_json::from_value(raw.clone()).unwrap();
            assert!(
                matches!(condition, Condition::Static(v) if v == expected),
                "{raw} should coerce to {expected}"
            );
        }
    }

    struct Silent;

    impl Reporter for Silent {
        fn info(&self, _: &str) {}
        fn warn(&self, _: &str) {}
        fn panic(&self, _: &str) {}
    }

    struct SilentHost(Silent);

    impl HostApi for SilentHost {
        fn reporter(&self) -> &dyn Reporter {
            &self.0
        }
    }

    #[test]
    fn debug_hides_closure() {
        let condition = Condition::predicate(|_, _| true);
        assert_eq!(format!("{condition:?}"), "Predicate(..)");
        assert!(condition.evaluate(&SilentHost(Silent), &PluginOptions::default()));
    }
}

use std::str::FromStr;

/// What happens to a committed plate pulled back for editing when the
/// customer abandons the edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbandonedEditPolicy {
    /// Put the original plate back into the cart, unchanged, at its old position
    #[default]
    Recommit,
    /// Drop the plate; the customer must add it again
    Discard,
}

impl FromStr for AbandonedEditPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recommit" => Ok(Self::Recommit),
            "discard" => Ok(Self::Discard),
            other => Err(format!("unknown abandoned edit policy: {}", other)),
        }
    }
}

/// Engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | LOG_LEVEL | info | tracing level |
/// | LOG_DIR | (unset) | directory for daily rolling log files |
/// | ABANDONED_EDIT_POLICY | recommit | recommit or discard |
/// | MAX_PORTIONS_PER_LINE | 99 | upper bound on requested portions |
/// | MAX_ITEM_PRICE | 10000 | upper bound on menu item price |
///
/// # Example
///
/// ```ignore
/// LOG_LEVEL=debug ABANDONED_EDIT_POLICY=discard plate-engine catalog.json script.json
/// ```
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub log_level: String,
    pub log_dir: Option<String>,
    pub abandoned_edit_policy: AbandonedEditPolicy,
    pub max_portions_per_line: i32,
    pub max_item_price: f64,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            abandoned_edit_policy: std::env::var("ABANDONED_EDIT_POLICY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.abandoned_edit_policy),
            max_portions_per_line: std::env::var("MAX_PORTIONS_PER_LINE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v: &i32| *v > 0)
                .unwrap_or(defaults.max_portions_per_line),
            max_item_price: std::env::var("MAX_ITEM_PRICE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v: &f64| v.is_finite() && *v > 0.0)
                .unwrap_or(defaults.max_item_price),
        }
    }

    /// Override the abandoned edit policy
    ///
    /// Mostly used by tests
    pub fn with_policy(mut self, policy: AbandonedEditPolicy) -> Self {
        self.abandoned_edit_policy = policy;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
            abandoned_edit_policy: AbandonedEditPolicy::Recommit,
            max_portions_per_line: 99,
            max_item_price: 10_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_from_str() {
        assert_eq!("recommit".parse::<AbandonedEditPolicy>(), Ok(AbandonedEditPolicy::Recommit));
        assert_eq!(" Discard ".parse::<AbandonedEditPolicy>(), Ok(AbandonedEditPolicy::Discard));
        assert!("keep".parse::<AbandonedEditPolicy>().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.abandoned_edit_policy, AbandonedEditPolicy::Recommit);
        assert_eq!(config.max_portions_per_line, 99);
    }

    #[test]
    fn test_with_policy() {
        let config = EngineConfig::default().with_policy(AbandonedEditPolicy::Discard);
        assert_eq!(config.abandoned_edit_policy, AbandonedEditPolicy::Discard);
    }
}

use crate::constants::DEFAULT_COLOR;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("ripple color must not be empty")]
    EmptyColor,
    #[error("`{field}` expects a {expected} value")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("edge padding must be finite and non-negative, got {0}")]
    InvalidPadding(f64),
    #[error("unknown termination policy `{0}`")]
    UnknownPolicy(String),
    #[error("unknown ripple config field `{0}`")]
    UnknownField(String),
}

/// When a pressed ripple is allowed to leave.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TerminationPolicy {
    /// Wait for the pointer release and for the enter motion to finish.
    #[default]
    ReleaseAndComplete,
    /// Leave as soon as the pointer is released. A quick tap cuts the
    /// expansion short, so only use this where that is acceptable.
    ReleaseOnly,
}

impl TerminationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminationPolicy::ReleaseAndComplete => "release-and-complete",
            TerminationPolicy::ReleaseOnly => "release-only",
        }
    }
}

impl FromStr for TerminationPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "release-and-complete" | "strict" => Ok(TerminationPolicy::ReleaseAndComplete),
            "release-only" | "release" => Ok(TerminationPolicy::ReleaseOnly),
            other => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Loosely typed field value, as it arrives from a host configuration record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigValue<'a> {
    Str(&'a str),
    Bool(bool),
    Number(f64),
}

impl ConfigValue<'_> {
    fn as_bool(&self, field: &'static str) -> Result<bool, ConfigError> {
        match self {
            ConfigValue::Bool(b) => Ok(*b),
            _ => Err(ConfigError::WrongType {
                field,
                expected: "boolean",
            }),
        }
    }

    fn as_str(&self, field: &'static str) -> Result<&str, ConfigError> {
        match self {
            ConfigValue::Str(s) => Ok(s),
            _ => Err(ConfigError::WrongType {
                field,
                expected: "string",
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RippleConfig {
    /// Any CSS color; handed to the renderer untouched.
    pub color: String,
    pub center: bool,
    pub disabled: bool,
    pub policy: TerminationPolicy,
    /// Extra pixels added to the diagonal the ripple grows to.
    pub edge_padding: f32,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            center: false,
            disabled: false,
            policy: TerminationPolicy::default(),
            edge_padding: 0.0,
        }
    }
}

impl From<&str> for RippleConfig {
    fn from(color: &str) -> Self {
        Self {
            color: color.to_string(),
            ..Self::default()
        }
    }
}

impl From<String> for RippleConfig {
    fn from(color: String) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }
}

impl RippleConfig {
    pub fn centered(mut self, center: bool) -> Self {
        self.center = center;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_policy(mut self, policy: TerminationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_edge_padding(mut self, padding: f32) -> Self {
        self.edge_padding = padding;
        self
    }

    /// Apply one field of a configuration record. On error the config is
    /// left unchanged.
    pub fn set_field(&mut self, key: &str, value: ConfigValue<'_>) -> Result<(), ConfigError> {
        match key {
            "color" => {
                let color = value.as_str("color")?.trim();
                if color.is_empty() {
                    return Err(ConfigError::EmptyColor);
                }
                self.color = color.to_string();
            }
            "center" => self.center = value.as_bool("center")?,
            "disabled" => self.disabled = value.as_bool("disabled")?,
            "policy" => self.policy = value.as_str("policy")?.parse()?,
            "edgePadding" | "edge_padding" => {
                let px = match value {
                    ConfigValue::Number(n) => n,
                    _ => {
                        return Err(ConfigError::WrongType {
                            field: "edgePadding",
                            expected: "number",
                        })
                    }
                };
                if !px.is_finite() || px < 0.0 {
                    return Err(ConfigError::InvalidPadding(px));
                }
                self.edge_padding = px as f32;
            }
            other => return Err(ConfigError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}

//! Subscription plan types

use serde::{Deserialize, Serialize};

/// Account subscription plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subscription {
    /// Free plan, assigned at registration
    Starter,
    /// Individual paid plan
    Pro,
    /// Team paid plan
    Business,
}

impl Subscription {
    /// Get the wire/storage representation of this plan
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Pro => "pro",
            Self::Business => "business",
        }
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::Starter
    }
}

impl std::fmt::Display for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Subscription {
    type Err = SubscriptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "starter" => Ok(Self::Starter),
            "pro" => Ok(Self::Pro),
            "business" => Ok(Self::Business),
            _ => Err(SubscriptionParseError(s.to_string())),
        }
    }
}

/// Error parsing a subscription string
#[derive(Debug, Clone)]
pub struct SubscriptionParseError(pub String);

impl std::fmt::Display for SubscriptionParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid subscription: {}", self.0)
    }
}

impl std::error::Error for SubscriptionParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_plans() {
        assert_eq!("starter".parse::<Subscription>().unwrap(), Subscription::Starter);
        assert_eq!("pro".parse::<Subscription>().unwrap(), Subscription::Pro);
        assert_eq!("business".parse::<Subscription>().unwrap(), Subscription::Business);
    }

    #[test]
    fn test_parse_rejects_unknown_plans() {
        assert!("gold".parse::<Subscription>().is_err());
        assert!("".parse::<Subscription>().is_err());
        // Only the exact lowercase names are accepted
        assert!("Pro".parse::<Subscription>().is_err());
    }

    #[test]
    fn test_default_is_starter() {
        assert_eq!(Subscription::default(), Subscription::Starter);
    }

    #[test]
    fn test_display_roundtrip() {
        for plan in [Subscription::Starter, Subscription::Pro, Subscription::Business] {
            assert_eq!(plan.to_string().parse::<Subscription>().unwrap(), plan);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Subscription::Business).unwrap();
        assert_eq!(json, "\"business\"");

        let parsed: Subscription = serde_json::from_str("\"pro\"").unwrap();
        assert_eq!(parsed, Subscription::Pro);
    }
}

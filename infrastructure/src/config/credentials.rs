//! Service credentials read from the process environment.

use thiserror::Error;

pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
pub const AZURE_SPEECH_SUBSCRIPTION_KEY: &str = "AZURE_SPEECH_SUBSCRIPTION_KEY";
pub const AZURE_SPEECH_SERVICE_REGION: &str = "AZURE_SPEECH_SERVICE_REGION";

#[derive(Debug, Error, PartialEq)]
pub enum CredentialError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
}

/// Credentials for the generative model and the speech service
#[derive(Clone)]
pub struct Credentials {
    pub google_api_key: String,
    pub speech_subscription_key: String,
    pub speech_region: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("google_api_key", &"<redacted>")
            .field("speech_subscription_key", &"<redacted>")
            .field("speech_region", &self.speech_region)
            .finish()
    }
}

impl Credentials {
    pub fn from_env() -> Result<Self, CredentialError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve credentials through an arbitrary lookup (env, secret store, ...).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CredentialError> {
        let get = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(CredentialError::Missing(name))
        };

        Ok(Self {
            google_api_key: get(GOOGLE_API_KEY)?,
            speech_subscription_key: get(AZURE_SPEECH_SUBSCRIPTION_KEY)?,
            speech_region: get(AZURE_SPEECH_SERVICE_REGION)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_all_present() {
        let creds = Credentials::from_lookup(lookup(&[
            (GOOGLE_API_KEY, "g-key"),
            (AZURE_SPEECH_SUBSCRIPTION_KEY, "a-key"),
            (AZURE_SPEECH_SERVICE_REGION, "westeurope"),
        ]))
        .unwrap();
        assert_eq!(creds.google_api_key, "g-key");
        assert_eq!(creds.speech_region, "westeurope");
    }

    #[test]
    fn test_missing_names_variable() {
        let err = Credentials::from_lookup(lookup(&[(GOOGLE_API_KEY, "g-key")])).unwrap_err();
        assert_eq!(err, CredentialError::Missing(AZURE_SPEECH_SUBSCRIPTION_KEY));
    }

    #[test]
    fn test_blank_counts_as_missing() {
        let err = Credentials::from_lookup(lookup(&[(GOOGLE_API_KEY, "  ")])).unwrap_err();
        assert_eq!(err, CredentialError::Missing(GOOGLE_API_KEY));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let creds = Credentials {
            google_api_key: "secret-1".to_string(),
            speech_subscription_key: "secret-2".to_string(),
            speech_region: "eastus".to_string(),
        };
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("secret"));
        assert!(printed.contains("eastus"));
    }
}

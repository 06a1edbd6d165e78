use aws_sdk_cognitoidentityprovider::error::BuildError;
use aws_sdk_cognitoidentityprovider::types::AttributeType;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Claim granting administrative privileges
pub const ADMIN_CLAIM: &str = "admin";

/// Default prefix mapping a claim name onto a Cognito custom attribute
pub const DEFAULT_ATTRIBUTE_PREFIX: &str = "custom:";

// ========== CLAIMS ==========
/// Custom claims applied to a user record in the identity provider
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct ClaimSet {
    claims: BTreeMap<String, Value>,
}

impl ClaimSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The single claim set this service ever writes: `{ "admin": true }`
    pub fn admin() -> Self {
        Self::new().with(ADMIN_CLAIM, true)
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.claims.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.claims.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.claims.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Project claims onto Cognito user attributes.
    /// Strings are written as-is, everything else as its JSON text (`true` -> `"true"`).
    pub fn to_user_attributes(&self, prefix: &str) -> Result<Vec<AttributeType>, BuildError> {
        self.iter()
            .map(|(name, value)| {
                let value = match value {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                };
                AttributeType::builder()
                    .name(format!("{}{}", prefix, name))
                    .value(value)
                    .build()
            })
            .collect()
    }
}

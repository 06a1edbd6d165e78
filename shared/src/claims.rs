//! Identity-provider seam for writing custom claims

use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider::error::{
    BuildError, DisplayErrorContext, ProvideErrorMetadata, SdkError,
};
use aws_sdk_cognitoidentityprovider::operation::admin_update_user_attributes::AdminUpdateUserAttributesError;
use aws_sdk_cognitoidentityprovider::Client as CognitoClient;
use std::fmt;

use crate::config::AdminConfig;
use crate::types::ClaimSet;

/// Broad classification of a failed claim write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimErrorKind {
    UserNotFound,
    PermissionDenied,
    InvalidArgument,
    Throttled,
    Network,
    Internal,
}

impl ClaimErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserNotFound => "user-not-found",
            Self::PermissionDenied => "permission-denied",
            Self::InvalidArgument => "invalid-argument",
            Self::Throttled => "throttled",
            Self::Network => "network",
            Self::Internal => "internal",
        }
    }
}

fn code_prefix(code: &Option<String>) -> String {
    code.as_deref()
        .map(|code| format!("{}: ", code))
        .unwrap_or_default()
}

/// Error raised by the identity provider while setting claims
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}{message}", code_prefix(.code))]
pub struct ClaimError {
    pub kind: ClaimErrorKind,
    pub code: Option<String>,
    pub message: String,
}

impl ClaimError {
    pub fn new(kind: ClaimErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl From<BuildError> for ClaimError {
    fn from(err: BuildError) -> Self {
        Self::new(ClaimErrorKind::Internal, err.to_string())
    }
}

/// Classify a modeled `AdminUpdateUserAttributes` failure
fn kind_of(err: &AdminUpdateUserAttributesError) -> ClaimErrorKind {
    match err {
        AdminUpdateUserAttributesError::UserNotFoundException(_) => ClaimErrorKind::UserNotFound,
        AdminUpdateUserAttributesError::NotAuthorizedException(_)
        | AdminUpdateUserAttributesError::ResourceNotFoundException(_) => {
            ClaimErrorKind::PermissionDenied
        }
        AdminUpdateUserAttributesError::InvalidParameterException(_)
        | AdminUpdateUserAttributesError::AliasExistsException(_) => {
            ClaimErrorKind::InvalidArgument
        }
        AdminUpdateUserAttributesError::TooManyRequestsException(_) => ClaimErrorKind::Throttled,
        _ => ClaimErrorKind::Internal,
    }
}

impl From<AdminUpdateUserAttributesError> for ClaimError {
    fn from(err: AdminUpdateUserAttributesError) -> Self {
        let kind = kind_of(&err);
        let message = err
            .message()
            .map(str::to_string)
            .unwrap_or_else(|| DisplayErrorContext(&err).to_string());
        let claim_error = Self::new(kind, message);
        match err.code() {
            Some(code) => claim_error.with_code(code),
            None => claim_error,
        }
    }
}

impl<R> From<SdkError<AdminUpdateUserAttributesError, R>> for ClaimError
where
    R: fmt::Debug,
{
    fn from(err: SdkError<AdminUpdateUserAttributesError, R>) -> Self {
        match err {
            SdkError::ServiceError(service) => service.into_err().into(),
            other => {
                let kind = match &other {
                    SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => {
                        ClaimErrorKind::Network
                    }
                    _ => ClaimErrorKind::Internal,
                };
                Self::new(kind, DisplayErrorContext(&other).to_string())
            }
        }
    }
}

/// Administrative capability of an identity provider
#[async_trait]
pub trait ClaimsAdmin: Send + Sync {
    /// Set custom claims on the user identified by `uid`
    async fn set_custom_user_claims(&self, uid: &str, claims: &ClaimSet) -> Result<(), ClaimError>;
}

/// Writes claims as custom attributes of a Cognito user pool
pub struct CognitoClaimsAdmin {
    client: CognitoClient,
    user_pool_id: String,
    attribute_prefix: String,
}

impl CognitoClaimsAdmin {
    pub fn new(client: CognitoClient, config: &AdminConfig) -> Self {
        Self {
            client,
            user_pool_id: config.user_pool_id.clone(),
            attribute_prefix: config.attribute_prefix.clone(),
        }
    }
}

#[async_trait]
impl ClaimsAdmin for CognitoClaimsAdmin {
    async fn set_custom_user_claims(&self, uid: &str, claims: &ClaimSet) -> Result<(), ClaimError> {
        let attributes = claims.to_user_attributes(&self.attribute_prefix)?;

        tracing::info!(
            "Updating {} attribute(s) for user {} in pool {}",
            attributes.len(),
            uid,
            self.user_pool_id
        );

        self.client
            .admin_update_user_attributes()
            .user_pool_id(&self.user_pool_id)
            .username(uid)
            .set_user_attributes(Some(attributes))
            .send()
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_cognitoidentityprovider::error::ErrorMetadata;
    use aws_sdk_cognitoidentityprovider::types::AttributeType;
    use aws_sdk_cognitoidentityprovider::types::error::{
        AliasExistsException, InvalidParameterException, NotAuthorizedException,
        ResourceNotFoundException, TooManyRequestsException, UserNotFoundException,
    };

    type UpdateSdkError = SdkError<AdminUpdateUserAttributesError, ()>;

    fn user_not_found() -> AdminUpdateUserAttributesError {
        AdminUpdateUserAttributesError::UserNotFoundException(
            UserNotFoundException::builder()
                .message("User does not exist.")
                .meta(
                    ErrorMetadata::builder()
                        .code("UserNotFoundException")
                        .message("User does not exist.")
                        .build(),
                )
                .build(),
        )
    }

    #[test]
    fn test_display_with_and_without_code() {
        let err = ClaimError::new(ClaimErrorKind::UserNotFound, "User does not exist.")
            .with_code("UserNotFoundException");
        assert_eq!(err.to_string(), "UserNotFoundException: User does not exist.");

        let err = ClaimError::new(ClaimErrorKind::Internal, "not-found");
        assert_eq!(err.to_string(), "not-found");
    }

    #[test]
    fn test_service_errors_are_classified() {
        let cases = [
            (user_not_found(), ClaimErrorKind::UserNotFound),
            (
                AdminUpdateUserAttributesError::NotAuthorizedException(
                    NotAuthorizedException::builder().build(),
                ),
                ClaimErrorKind::PermissionDenied,
            ),
            (
                AdminUpdateUserAttributesError::ResourceNotFoundException(
                    ResourceNotFoundException::builder().build(),
                ),
                ClaimErrorKind::PermissionDenied,
            ),
            (
                AdminUpdateUserAttributesError::InvalidParameterException(
                    InvalidParameterException::builder().build(),
                ),
                ClaimErrorKind::InvalidArgument,
            ),
            (
                AdminUpdateUserAttributesError::AliasExistsException(
                    AliasExistsException::builder().build(),
                ),
                ClaimErrorKind::InvalidArgument,
            ),
            (
                AdminUpdateUserAttributesError::TooManyRequestsException(
                    TooManyRequestsException::builder().build(),
                ),
                ClaimErrorKind::Throttled,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ClaimError::from(err).kind, expected);
        }
    }

    #[test]
    fn test_sdk_service_error_keeps_code_and_message() {
        let err: ClaimError = UpdateSdkError::service_error(user_not_found(), ()).into();

        assert_eq!(err.kind, ClaimErrorKind::UserNotFound);
        assert_eq!(err.code.as_deref(), Some("UserNotFoundException"));
        assert_eq!(err.message, "User does not exist.");
        assert_eq!(err.to_string(), "UserNotFoundException: User does not exist.");
    }

    #[test]
    fn test_service_error_without_metadata_falls_back_to_context() {
        let err: ClaimError = AdminUpdateUserAttributesError::UserNotFoundException(
            UserNotFoundException::builder().message("User does not exist.").build(),
        )
        .into();
        assert_eq!(err.code, None);
        assert!(err.to_string().contains("User does not exist."));
    }

    #[test]
    fn test_sdk_timeout_is_network() {
        let err: ClaimError = UpdateSdkError::timeout_error("request timed out").into();

        assert_eq!(err.kind, ClaimErrorKind::Network);
        assert_eq!(err.code, None);
        assert!(err.message.contains("request timed out"));
    }

    #[test]
    fn test_sdk_construction_failure_is_internal() {
        let err: ClaimError = UpdateSdkError::construction_failure("missing user pool").into();

        assert_eq!(err.kind, ClaimErrorKind::Internal);
        assert!(err.message.contains("missing user pool"));
    }

    #[test]
    fn test_build_error_is_internal() {
        let build_err = AttributeType::builder().value("true").build().unwrap_err();

        let err = ClaimError::from(build_err);

        assert_eq!(err.kind, ClaimErrorKind::Internal);
        assert_eq!(err.code, None);
    }
}

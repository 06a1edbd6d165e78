use lambda_http::{Body, Error, Response, http::StatusCode};

use crate::claims::ClaimsAdmin;
use crate::params::UidParam;
use crate::types::{ClaimSet, ADMIN_CLAIM};

pub const INVALID_UID_MESSAGE: &str = "UID is required as a query parameter and must be a string.";

fn text_response(status: StatusCode, body: String) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(body.into())
        .map_err(Box::new)?)
}

/// Grant the `admin` claim to the user named by the `uid` query parameter
pub async fn set_admin_claim(
    claims_admin: &dyn ClaimsAdmin,
    uid: UidParam,
) -> Result<Response<Body>, Error> {
    let uid = match uid.into_uid() {
        Some(uid) => uid,
        None => {
            tracing::warn!("Rejected request: uid missing or not a single string");
            return text_response(StatusCode::BAD_REQUEST, INVALID_UID_MESSAGE.to_string());
        }
    };

    tracing::info!("Setting {} claim for user: {}", ADMIN_CLAIM, uid);

    match claims_admin
        .set_custom_user_claims(&uid, &ClaimSet::admin())
        .await
    {
        Ok(()) => {
            tracing::info!("Custom claim set for user: {}", uid);
            text_response(
                StatusCode::OK,
                format!("Custom claim \"{}\" was set for user {}", ADMIN_CLAIM, uid),
            )
        }
        Err(e) => {
            tracing::error!(
                "Failed to set custom claim for user {} ({}, code {:?}): {}",
                uid,
                e.kind.as_str(),
                e.code,
                e.message
            );
            // Raw provider detail is returned to the caller as-is
            text_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error setting custom claim: {}", e),
            )
        }
    }
}

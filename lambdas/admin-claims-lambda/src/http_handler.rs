use admin_claims_shared::{admin, params::UidParam, AppState};
use lambda_http::{Body, Error, Request, RequestExt, Response};
use std::sync::Arc;

/// Main Lambda handler - every method and path sets the admin claim
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    tracing::info!(
        "Admin claim Lambda invoked - Method: {} Path: {}",
        event.method(),
        event.uri().path()
    );

    let uid = UidParam::from_pairs(
        event
            .query_string_parameters_ref()
            .into_iter()
            .flat_map(|params| params.iter()),
    );

    admin::set_admin_claim(state.claims_admin.as_ref(), uid).await
}

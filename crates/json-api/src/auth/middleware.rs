//! Auth middleware.

use std::sync::Arc;

use pricebook_app::auth::AuthServiceError;
use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::debug;

use crate::{extensions::*, state::State};

/// Resolve the bearer access key to a role and store it in the depot.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(access_key) = extract_bearer_token(req) else {
        res.render(StatusError::unauthorized().brief("Missing or invalid Authorization header"));
        ctrl.skip_rest();

        return;
    };

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(status) => {
            res.render(status);
            ctrl.skip_rest();

            return;
        }
    };

    let role = match state.app.auth.authenticate(access_key).await {
        Ok(role) => role,
        Err(AuthServiceError::InvalidAccessKey) => {
            debug!("rejected access key");

            res.render(StatusError::unauthorized().brief("Invalid access key"));
            ctrl.skip_rest();

            return;
        }
    };

    depot.insert_role(role);

    ctrl.call_next(req, depot, res).await;
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}

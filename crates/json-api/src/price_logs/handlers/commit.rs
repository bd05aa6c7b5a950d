//! Commit Grid Changes Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pricebook_app::domain::price_logs::data::{CommitSummary, PriceLogCommit, PriceLogEdit};

use crate::{
    extensions::*,
    price_logs::{errors::into_status_error, update::UpdatePriceLogRequest},
    state::State,
};

/// One edited grid row
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PriceLogEditRequest {
    /// Row being edited
    pub id: Uuid,

    /// Changed cells
    pub changes: UpdatePriceLogRequest,
}

/// Grid change set
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CommitRequest {
    #[serde(default)]
    pub edits: Vec<PriceLogEditRequest>,

    /// Rows to delete
    #[serde(default)]
    pub deletions: Vec<Uuid>,
}

impl CommitRequest {
    fn into_commit(self) -> Result<PriceLogCommit, StatusError> {
        let edits = self
            .edits
            .into_iter()
            .map(|edit| -> Result<PriceLogEdit, StatusError> {
                Ok(PriceLogEdit {
                    uuid: edit.id.into(),
                    update: edit.changes.into_update()?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PriceLogCommit {
            edits,
            deletions: self.deletions.into_iter().map(Into::into).collect(),
        })
    }
}

/// Rows touched by the commit
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CommitResponse {
    pub updated: usize,
    pub deleted: usize,
}

impl From<CommitSummary> for CommitResponse {
    fn from(summary: CommitSummary) -> Self {
        Self {
            updated: summary.updated,
            deleted: summary.deleted,
        }
    }
}

/// Commit Grid Changes Handler
///
/// Applies every edit and deletion in one transaction.
#[endpoint(
    tags("price-logs"),
    summary = "Commit Grid Changes",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Changes committed"),
        (status_code = StatusCode::NOT_FOUND, description = "A referenced price log does not exist"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Role cannot manage price logs"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CommitRequest>,
    depot: &mut Depot,
) -> Result<Json<CommitResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let commit = json.into_inner().into_commit()?;

    let summary = state
        .app
        .price_logs
        .commit_changes(commit)
        .await
        .map_err(into_status_error)?;

    Ok(Json(summary.into()))
}

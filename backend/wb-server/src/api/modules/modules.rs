use crate::{ApiResult, ModuleListResponse};

use wb_ws::AppState;

use axum::{Json, extract::State};

/// GET /api/modules
///
/// The seeded product modules a workspace can be created under.
pub async fn list_modules(State(state): State<AppState>) -> ApiResult<Json<ModuleListResponse>> {
    let modules = state.services.workspaces.list_modules().await?;

    Ok(Json(ModuleListResponse {
        message: "Modules fetched successfully".to_string(),
        modules,
    }))
}

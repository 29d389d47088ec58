//! HTTP handlers for the therapy admin endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_domain_error, ErrorResponse};
use crate::application::handlers::{
    GetTherapyHandler, GetTherapyQuery, ListTherapiesHandler, UpdateTherapySettingsCommand,
    UpdateTherapySettingsHandler, SETTINGS_SAVED_MESSAGE,
};
use crate::domain::foundation::{DomainError, TherapyId};
use crate::domain::therapy::TherapySettings;

use super::dto::{TherapyResponse, TherapySettingsSavedResponse, UpdateTherapySettingsRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct TherapyHandlers {
    list_handler: Arc<ListTherapiesHandler>,
    get_handler: Arc<GetTherapyHandler>,
    update_handler: Arc<UpdateTherapySettingsHandler>,
}

impl TherapyHandlers {
    pub fn new(
        list_handler: Arc<ListTherapiesHandler>,
        get_handler: Arc<GetTherapyHandler>,
        update_handler: Arc<UpdateTherapySettingsHandler>,
    ) -> Self {
        Self {
            list_handler,
            get_handler,
            update_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/admin/therapies - All programs
pub async fn list_therapies(State(handlers): State<TherapyHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(therapies) => {
            let response: Vec<TherapyResponse> = therapies.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

/// GET /api/admin/therapies/:id - One program
pub async fn get_therapy(
    State(handlers): State<TherapyHandlers>,
    Path(therapy_id): Path<String>,
) -> Response {
    let therapy_id = match parse_therapy_id(therapy_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetTherapyQuery { therapy_id }).await {
        Ok(therapy) => (StatusCode::OK, Json(TherapyResponse::from(therapy))).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// PUT /api/admin/therapies/:id/settings - Save the general settings form
pub async fn update_therapy_settings(
    State(handlers): State<TherapyHandlers>,
    Path(therapy_id): Path<String>,
    Json(req): Json<UpdateTherapySettingsRequest>,
) -> Response {
    let therapy_id = match parse_therapy_id(therapy_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let settings = match TherapySettings::try_from(req) {
        Ok(settings) => settings,
        Err(e) => return handle_domain_error(DomainError::from(e)),
    };

    let cmd = UpdateTherapySettingsCommand {
        therapy_id,
        settings,
    };
    match handlers.update_handler.handle(cmd).await {
        Ok(therapy) => {
            let response = TherapySettingsSavedResponse {
                message: SETTINGS_SAVED_MESSAGE.to_string(),
                therapy: therapy.into(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

fn parse_therapy_id(raw: String) -> Result<TherapyId, Response> {
    TherapyId::new(raw).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid therapy ID")),
        )
            .into_response()
    })
}

use actix_web::{delete, get, post, web, HttpResponse, Responder};
use log::{error, warn};
use serde::{Deserialize, Serialize};

use super::render::{render_page, PageView};
use super::AppState;
use crate::app_controller::Notice;
use crate::errors::{StorageError, TranslationError};
use crate::language::{LanguagePair, TranslationRoute};

/// Form fields shared by every page request
#[derive(Debug, Default, Deserialize)]
pub struct PageForm {
    pub language_pair: Option<String>,
    pub direction: Option<String>,
    /// Checkbox, present only when ticked
    pub show_history: Option<String>,
    /// Present once the form has been submitted at least once
    pub submitted: Option<String>,
    pub text: Option<String>,
}

impl PageForm {
    /// Unknown pairs fall back to the first one; a direction that does not
    /// fit the pair falls back to the pair's first direction.
    fn route(&self) -> TranslationRoute {
        let pair = self
            .language_pair
            .as_deref()
            .and_then(|p| p.parse::<LanguagePair>().ok())
            .unwrap_or_default();
        TranslationRoute::from_labels_or_default(pair, self.direction.as_deref())
    }

    /// The panel is shown on first load, afterwards it follows the checkbox
    fn show_history(&self) -> bool {
        self.submitted.is_none() || self.show_history.is_some()
    }

    fn text(&self) -> String {
        self.text.clone().unwrap_or_default()
    }
}

async fn page_response(state: &AppState, form: &PageForm, notice: Option<Notice>) -> HttpResponse {
    let route = form.route();
    let show_history = form.show_history();

    let mut view = PageView {
        route,
        show_history,
        text: form.text(),
        notice,
        ..Default::default()
    };

    match state.controller.history_panel(route.pair, show_history).await {
        Ok(history) => view.history = history,
        Err(e) => {
            error!("Failed to load history: {}", e);
            view.history_error = Some(format!("Error: {}", e));
        }
    }

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page(&view))
}

#[get("/")]
pub async fn index(data: web::Data<AppState>, form: web::Query<PageForm>) -> impl Responder {
    page_response(&data, &form, None).await
}

#[post("/translate")]
pub async fn translate_form(data: web::Data<AppState>, form: web::Form<PageForm>) -> impl Responder {
    // A forged direction gets a warning instead of silently switching routes
    let notice = match strict_route(form.language_pair.as_deref(), form.direction.as_deref()) {
        Ok(route) => data.controller.submit(route, &form.text()).await,
        Err(message) => {
            warn!("Rejected translate form: {}", message);
            Notice::Warning(message)
        }
    };

    page_response(&data, &form, Some(notice)).await
}

#[post("/history/{id}/delete")]
pub async fn delete_form(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    form: web::Form<PageForm>,
) -> impl Responder {
    let notice = match data.controller.delete(path.into_inner()).await {
        Ok(()) => None,
        Err(e) => {
            error!("Failed to delete translation: {}", e);
            Some(Notice::Error(format!("Error: {}", e)))
        }
    };

    page_response(&data, &form, notice).await
}

fn strict_route(pair: Option<&str>, direction: Option<&str>) -> Result<TranslationRoute, String> {
    let pair: LanguagePair = pair.unwrap_or_default().parse().map_err(|e| format!("{}", e))?;
    TranslationRoute::from_labels(pair, direction.unwrap_or_default()).map_err(|e| e.to_string())
}

// =========================================================================
// JSON API
// =========================================================================

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub language_pair: String,
    pub direction: String,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub id: i64,
    pub language_pair: String,
    pub direction: String,
    pub input_text: String,
    pub output_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub language_pair: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthBody {
    pub status: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

fn error_body(message: impl Into<String>) -> ErrorBody {
    ErrorBody {
        error: message.into(),
    }
}

fn storage_failure(e: StorageError) -> HttpResponse {
    error!("History store failure: {}", e);
    HttpResponse::InternalServerError().json(error_body(e.to_string()))
}

#[post("/translate")]
pub async fn api_translate(
    data: web::Data<AppState>,
    req: web::Json<TranslateRequest>,
) -> impl Responder {
    let route = match strict_route(Some(&req.language_pair), Some(&req.direction)) {
        Ok(route) => route,
        Err(message) => return HttpResponse::BadRequest().json(error_body(message)),
    };

    match data.controller.translate(route, &req.text).await {
        Ok(outcome) => HttpResponse::Ok().json(TranslateResponse {
            id: outcome.id,
            language_pair: outcome.route.pair.label().to_string(),
            direction: outcome.route.direction_label().to_string(),
            input_text: outcome.input_text,
            output_text: outcome.output_text,
        }),
        Err(TranslationError::Validation(e)) => {
            HttpResponse::BadRequest().json(error_body(e.to_string()))
        }
        Err(TranslationError::Provider(e)) => {
            error!("Translation call failed: {}", e);
            HttpResponse::BadGateway().json(error_body(e.to_string()))
        }
        Err(TranslationError::Storage(e)) => storage_failure(e),
    }
}

#[get("/history")]
pub async fn api_history(data: web::Data<AppState>, query: web::Query<HistoryQuery>) -> impl Responder {
    let pair: LanguagePair = match query.language_pair.parse() {
        Ok(pair) => pair,
        Err(e) => return HttpResponse::BadRequest().json(error_body(e.to_string())),
    };

    match data.controller.recent_records(pair, query.limit).await {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => storage_failure(e),
    }
}

#[delete("/history/{id}")]
pub async fn api_delete(data: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    match data.controller.delete(path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => storage_failure(e),
    }
}

#[get("/health")]
pub async fn api_health(data: web::Data<AppState>) -> impl Responder {
    match data.controller.health_check().await {
        Ok(()) => HttpResponse::Ok().json(HealthBody {
            status: "ok".to_string(),
            model: data.model_name.clone(),
            error: None,
        }),
        Err(e) => HttpResponse::ServiceUnavailable().json(HealthBody {
            status: "unavailable".to_string(),
            model: data.model_name.clone(),
            error: Some(e.to_string()),
        }),
    }
}

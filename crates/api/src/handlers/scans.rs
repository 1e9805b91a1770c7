use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use subrecon_domain::DomainError;
use tracing::error;

use crate::{
    dto::{EnumerateRequest, ErrorResponse, ScanResponse},
    state::AppState,
};

type ErrorReply = (StatusCode, Json<ErrorResponse>);

fn error_reply(status: StatusCode, message: impl Into<String>) -> ErrorReply {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// POST /find: runs (or replays) the enumeration for a domain and returns
/// the bare subdomain array.
pub async fn find_subdomains(
    State(state): State<AppState>,
    payload: Result<Json<EnumerateRequest>, JsonRejection>,
) -> Result<Json<Vec<String>>, ErrorReply> {
    let Json(req) = payload
        .map_err(|_| error_reply(StatusCode::BAD_REQUEST, "Invalid request body"))?;

    match state.enumerate_domain.execute(&req.domain).await {
        Ok(subdomains) => Ok(Json(subdomains)),
        Err(DomainError::InvalidDomainName(_)) => {
            Err(error_reply(StatusCode::BAD_REQUEST, "Domain is required"))
        }
        Err(e @ DomainError::NoSubdomainsFound(_)) => {
            Err(error_reply(StatusCode::NOT_FOUND, e.to_string()))
        }
        Err(e) => {
            error!(error = %e, "Enumeration failed");
            Err(error_reply(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

/// GET /subdomains/{domain}: read-only lookup against the scan store.
pub async fn get_scan(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<Json<ScanResponse>, ErrorReply> {
    match state.get_scan.execute(&domain).await {
        Ok(Some(record)) => Ok(Json(ScanResponse::from_record(record))),
        Ok(None) => Err(error_reply(
            StatusCode::NOT_FOUND,
            format!("No data found for domain: {domain}"),
        )),
        Err(e) => {
            error!(error = %e, "Failed to fetch scan");
            Err(error_reply(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

/// GET /history: every stored scan; cost grows with the store.
pub async fn get_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScanResponse>>, ErrorReply> {
    match state.list_scans.execute().await {
        Ok(records) => Ok(Json(
            records.into_iter().map(ScanResponse::from_record).collect(),
        )),
        Err(e) => {
            error!(error = %e, "Failed to list scans");
            Err(error_reply(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

//! Request-report ingest endpoint handlers.

use std::net::SocketAddr;

use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;
use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::ReportRequest;
use crate::state::AppState;
use crate::stats::RequestStat;
use crate::utils::http_helpers::HTTPError;

/// Registers request-report ingest routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/report", post(ingest_report))
}

#[derive(Serialize, Deserialize)]
struct ReportResponse {
    request_id: String,
}

/// Ingests one completed-request report, derives its stats and emits the
/// timing metrics through the configured sink.
///
/// Incomplete reports are accepted; missing payload keys only mean fewer
/// metrics get emitted. Only a body that fails to parse is rejected.
async fn ingest_report(
    State(state): State<AppState>,
    ConnectInfo(client_addr): ConnectInfo<SocketAddr>,
    body: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ReportResponse>), HTTPError> {
    let Json(report) =
        body.map_err(|rejection| HTTPError::new(StatusCode::BAD_REQUEST, rejection.body_text()))?;

    let request_id = report.request_id();
    debug!(
        event_name = "routes.report.received",
        event_domain = "routes",
        request_id = request_id.as_str(),
        client_ip = %client_addr.ip(),
        "received request report '{}'",
        report.name
    );

    let mut stat = RequestStat::new(
        report.name.clone(),
        report.start,
        report.finish,
        request_id.clone(),
        report.payload.clone(),
        state.sink.clone(),
    );

    // Pre-counted stats from the instrumentation layer are taken verbatim.
    stat.stats.extend(report.stats.clone());

    for tracker in state.trackers.iter() {
        if let Err(e) = tracker.track(&report, &mut stat) {
            warn!(
                event_name = "routes.report.tracker_failed",
                event_domain = "routes",
                tracker_name = tracker.get_name(),
                tracker_type = tracker.get_type(),
                request_id = request_id.as_str(),
                "tracker failed: {}",
                e
            );
        }
    }

    stat.report();

    Ok((StatusCode::OK, Json(ReportResponse { request_id })))
}

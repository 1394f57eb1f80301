//! HTTP handler functions for the GreenGrid API.
//!
//! Domain conditions (unknown ward, insufficient history) map to a 404
//! with the domain message; anything unexpected is logged and mapped to a
//! generic 500 so a failing query can never crash the serving process.

use actix_web::{HttpResponse, web};
use greengrid_engine::{EngineError, queries};
use greengrid_server_models::{ApiForecastPoint, ApiHealth, ApiWardDetail, ApiWardRisk};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/ward-risk/current`
///
/// Returns the vulnerability snapshot for every ward on the most recent
/// date. Always succeeds; an empty dataset yields an empty array.
pub async fn current_risk(state: web::Data<AppState>) -> HttpResponse {
    match queries::current_snapshot(&state.data_path) {
        Ok(records) => {
            let wards: Vec<ApiWardRisk> = records.into_iter().map(ApiWardRisk::from).collect();
            HttpResponse::Ok().json(wards)
        }
        Err(e) => {
            log::error!("Failed to build current risk snapshot: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to build current risk snapshot"
            }))
        }
    }
}

/// `GET /api/ward-details/{ward_no}`
///
/// Returns all historical records for one ward.
pub async fn ward_details(state: web::Data<AppState>, path: web::Path<u32>) -> HttpResponse {
    let ward_no = path.into_inner();
    match queries::ward_detail(&state.data_path, ward_no) {
        Ok(records) => {
            let details: Vec<ApiWardDetail> =
                records.into_iter().map(ApiWardDetail::from).collect();
            HttpResponse::Ok().json(details)
        }
        Err(e @ EngineError::WardNotFound { .. }) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() }))
        }
        Err(e) => {
            log::error!("Failed to query details for ward {ward_no}: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to query ward details"
            }))
        }
    }
}

/// `GET /api/forecast/{ward_no}`
///
/// Returns the 14-day temperature forecast for one ward. A fresh model is
/// fit on every call.
pub async fn ward_forecast(state: web::Data<AppState>, path: web::Path<u32>) -> HttpResponse {
    let ward_no = path.into_inner();
    match queries::ward_forecast(&state.data_path, ward_no) {
        Ok(points) => {
            let forecast: Vec<ApiForecastPoint> =
                points.into_iter().map(ApiForecastPoint::from).collect();
            HttpResponse::Ok().json(forecast)
        }
        Err(e @ EngineError::InsufficientData { .. }) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() }))
        }
        Err(e) => {
            log::error!("Failed to build forecast for ward {ward_no}: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to build ward forecast"
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    const HEADER: &str =
        "date,ward_no,ward_name,latitude,longitude,Population,temperature_max,humidity_max,precipitation_sum";

    fn write_dataset(rows: &[&str]) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weather.csv");
        let mut contents = String::from(HEADER);
        contents.push('\n');
        for row in rows {
            contents.push_str(row);
            contents.push('\n');
        }
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    fn app_state(path: std::path::PathBuf) -> web::Data<AppState> {
        web::Data::new(AppState { data_path: path })
    }

    #[actix_web::test]
    async fn health_reports_healthy() {
        let app = test::init_service(
            App::new().route("/api/health", web::get().to(health)),
        )
        .await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request())
            .await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn current_risk_returns_snapshot_rows() {
        let (_dir, path) = write_dataset(&[
            "01-06-2024,1,Koramangala,12.93,77.62,45000,34.2,78.0,0.4",
            "02-06-2024,1,Koramangala,12.93,77.62,45000,33.1,75.0,1.0",
        ]);
        let app = test::init_service(
            App::new()
                .app_data(app_state(path))
                .route("/api/ward-risk/current", web::get().to(current_risk)),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/ward-risk/current")
            .to_request();
        let body: Vec<ApiWardRisk> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].ward_no, 1);
        assert!((body[0].temperature_max - 33.1).abs() < 1e-9);
    }

    #[actix_web::test]
    async fn current_risk_is_empty_for_missing_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(app_state(dir.path().join("absent.csv")))
                .route("/api/ward-risk/current", web::get().to(current_risk)),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/ward-risk/current")
            .to_request();
        let body: Vec<ApiWardRisk> = test::call_and_read_body_json(&app, req).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn unknown_ward_detail_is_a_client_visible_not_found() {
        let (_dir, path) = write_dataset(&[
            "01-06-2024,1,Koramangala,12.93,77.62,45000,34.2,78.0,0.4",
        ]);
        let app = test::init_service(
            App::new()
                .app_data(app_state(path))
                .route("/api/ward-details/{ward_no}", web::get().to(ward_details)),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/ward-details/99")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("ward_no 99"));
    }

    #[actix_web::test]
    async fn short_history_forecast_reports_insufficient_data() {
        let (_dir, path) = write_dataset(&[
            "01-06-2024,1,Koramangala,12.93,77.62,45000,34.2,78.0,0.4",
        ]);
        let app = test::init_service(
            App::new()
                .app_data(app_state(path))
                .route("/api/forecast/{ward_no}", web::get().to(ward_forecast)),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/forecast/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("ward 1"));
    }
}

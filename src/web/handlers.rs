use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::analysis::{Forecaster, SWEEP_YEARS};
use crate::error::ForecastError;
use crate::io::result_to_csv_bytes;
use crate::models::ProjectionParameters;

// ---------------------------------------------------------------------------
// Error wrapper
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
struct ErrorBody {
    error: String,
    details: String,
}

#[derive(Debug)]
pub(crate) struct WebError(ForecastError);

impl From<ForecastError> for WebError {
    fn from(e: ForecastError) -> Self {
        WebError(e)
    }
}

impl std::fmt::Display for WebError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for WebError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_type) = match &self.0 {
            ForecastError::ValidationError(_) | ForecastError::ParseError(_) => {
                (actix_web::http::StatusCode::BAD_REQUEST, "Bad Request")
            }
            _ => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
            ),
        };
        tracing::warn!(error = %self.0, "request failed");
        HttpResponse::build(status).json(ErrorBody {
            error: error_type.to_string(),
            details: self.0.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

pub async fn project(body: web::Json<ProjectionParameters>) -> Result<HttpResponse, WebError> {
    let params = body.into_inner();
    let forecaster = Forecaster::checked(&params)?;
    let result = forecaster.project();
    tracing::debug!(
        baseline = ?result.baseline_inflexion_year,
        adjusted = ?result.adjusted_inflexion_year,
        "projection computed"
    );
    Ok(HttpResponse::Ok().json(result))
}

#[derive(Deserialize)]
pub struct SweepQuery {
    from: Option<i32>,
    to: Option<i32>,
}

pub async fn sweep(
    body: web::Json<ProjectionParameters>,
    query: web::Query<SweepQuery>,
) -> Result<HttpResponse, WebError> {
    let params = body.into_inner();
    let from = query.from.unwrap_or(*SWEEP_YEARS.start());
    let to = query.to.unwrap_or(*SWEEP_YEARS.end());
    let points = Forecaster::new(&params).checked_sweep(from..=to)?;
    Ok(HttpResponse::Ok().json(points))
}

#[derive(Deserialize)]
pub struct ExportQuery {
    format: Option<String>,
}

pub async fn export(
    body: web::Json<ProjectionParameters>,
    query: web::Query<ExportQuery>,
) -> Result<HttpResponse, WebError> {
    let params = body.into_inner();
    let result = Forecaster::checked(&params)?.project();
    let fmt = query.format.as_deref().unwrap_or("csv");

    match fmt {
        "csv" => {
            let data = result_to_csv_bytes(&result, &params)?;
            Ok(HttpResponse::Ok()
                .content_type("text/csv")
                .insert_header((
                    "Content-Disposition",
                    "attachment; filename=\"projection.csv\"",
                ))
                .body(data))
        }
        "json" => {
            let data = serde_json::to_string_pretty(&result)
                .map_err(|e| WebError(ForecastError::Json(e)))?;
            Ok(HttpResponse::Ok()
                .content_type("application/json")
                .insert_header((
                    "Content-Disposition",
                    "attachment; filename=\"projection.json\"",
                ))
                .body(data))
        }
        _ => Ok(HttpResponse::BadRequest().json(ErrorBody {
            error: "Bad Request".to_string(),
            details: format!("Unsupported export format: {fmt}. Use csv or json."),
        })),
    }
}

pub async fn defaults() -> HttpResponse {
    HttpResponse::Ok().json(ProjectionParameters::default())
}

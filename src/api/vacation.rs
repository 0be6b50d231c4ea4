use actix_web::{HttpResponse, web};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::model::vacation_request::{Status, VacationRequest};
use crate::store::{NewVacation, StatusCounts, VacationStore};

/// Incoming create payload. All fields arrive as optional strings and are
/// validated field by field before anything touches the store.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVacation {
    #[schema(example = "Anna Kovaleva")]
    pub employee_name: Option<String>,
    #[schema(example = "2026-09-01", format = "date", value_type = String)]
    pub start_date: Option<String>,
    #[schema(example = "2026-09-14", format = "date", value_type = String)]
    pub end_date: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct StatusChange {
    #[schema(example = "approved")]
    pub status: Option<String>,
}

/// PUT payload: every field independently optional.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVacation {
    pub employee_name: Option<String>,
    #[schema(example = "2026-09-02", format = "date", value_type = String)]
    pub start_date: Option<String>,
    #[schema(example = "2026-09-15", format = "date", value_type = String)]
    pub end_date: Option<String>,
}

#[derive(Deserialize, IntoParams)]
pub struct VacationFilter {
    /// Exact status match; unrecognized values match nothing
    pub status: Option<String>,
    /// Case-sensitive substring match on the employee name
    pub employee: Option<String>,
}

fn parse_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ApiError::validation("invalid date format"))
}

/* =========================
List vacation requests
========================= */
#[utoipa::path(
    get,
    path = "/api/vacations",
    params(VacationFilter),
    responses(
        (status = 200, description = "Matching requests, most recent first", body = Vec<VacationRequest>)
    ),
    tag = "Vacations"
)]
pub async fn list_vacations(
    store: web::Data<VacationStore>,
    query: web::Query<VacationFilter>,
) -> Result<HttpResponse, ApiError> {
    let vacations = store
        .list(query.status.as_deref(), query.employee.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(vacations))
}

/* =========================
Get one request
========================= */
#[utoipa::path(
    get,
    path = "/api/vacations/{id}",
    params(
        ("id" = i64, Path, description = "ID of the vacation request")
    ),
    responses(
        (status = 200, description = "Request found", body = VacationRequest),
        (status = 404, description = "No request with this id")
    ),
    tag = "Vacations"
)]
pub async fn get_vacation(
    store: web::Data<VacationStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let vacation = store
        .get(path.into_inner())
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(HttpResponse::Ok().json(vacation))
}

/* =========================
Create request
========================= */
#[utoipa::path(
    post,
    path = "/api/vacations",
    request_body = CreateVacation,
    responses(
        (status = 201, description = "Request created with status pending", body = VacationRequest),
        (status = 400, description = "Validation failed", body = Object, example = json!({
            "error": "end date cannot precede start date"
        }))
    ),
    tag = "Vacations"
)]
pub async fn create_vacation(
    store: web::Data<VacationStore>,
    payload: web::Json<CreateVacation>,
) -> Result<HttpResponse, ApiError> {
    let (Some(employee_name), Some(start_raw), Some(end_raw)) = (
        payload.employee_name.as_deref(),
        payload.start_date.as_deref(),
        payload.end_date.as_deref(),
    ) else {
        return Err(ApiError::validation("missing required fields"));
    };

    if employee_name.trim().is_empty() {
        return Err(ApiError::validation("missing required fields"));
    }

    let start_date = parse_date(start_raw)?;
    let end_date = parse_date(end_raw)?;

    if end_date < start_date {
        return Err(ApiError::validation("end date cannot precede start date"));
    }

    // Past dates are rejected against the server's local calendar day.
    if start_date < Local::now().date_naive() {
        return Err(ApiError::validation("cannot create a request for a past date"));
    }

    let created = store
        .insert(NewVacation {
            employee_name: employee_name.to_string(),
            start_date,
            end_date,
        })
        .await?;

    Ok(HttpResponse::Created().json(created))
}

/* =========================
Update status (approve/reject)
========================= */
#[utoipa::path(
    patch,
    path = "/api/vacations/{id}",
    params(
        ("id" = i64, Path, description = "ID of the vacation request")
    ),
    request_body = StatusChange,
    responses(
        (status = 200, description = "Status updated", body = VacationRequest),
        (status = 400, description = "Missing or unknown status value"),
        (status = 404, description = "No request with this id")
    ),
    tag = "Vacations"
)]
pub async fn update_status(
    store: web::Data<VacationStore>,
    path: web::Path<i64>,
    payload: web::Json<StatusChange>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    store.get(id).await?.ok_or(ApiError::NotFound)?;

    let raw = payload
        .status
        .as_deref()
        .ok_or_else(|| ApiError::validation("status field required"))?;

    let status: Status = raw
        .parse()
        .map_err(|_| ApiError::validation("invalid status value"))?;

    let updated = store.set_status(id, status).await?.ok_or(ApiError::NotFound)?;

    Ok(HttpResponse::Ok().json(updated))
}

/* =========================
Full (partial-field) update
========================= */
#[utoipa::path(
    put,
    path = "/api/vacations/{id}",
    params(
        ("id" = i64, Path, description = "ID of the vacation request")
    ),
    request_body = UpdateVacation,
    responses(
        (status = 200, description = "Fields updated", body = VacationRequest),
        (status = 400, description = "A supplied date does not parse"),
        (status = 404, description = "No request with this id")
    ),
    tag = "Vacations"
)]
pub async fn update_vacation(
    store: web::Data<VacationStore>,
    path: web::Path<i64>,
    payload: web::Json<UpdateVacation>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let existing = store.get(id).await?.ok_or(ApiError::NotFound)?;

    // Parse every supplied date before applying anything, so a bad date
    // leaves the row completely untouched.
    let start_date = payload.start_date.as_deref().map(parse_date).transpose()?;
    let end_date = payload.end_date.as_deref().map(parse_date).transpose()?;

    let employee_name = payload
        .employee_name
        .clone()
        .unwrap_or(existing.employee_name);
    let start_date = start_date.unwrap_or(existing.start_date);
    let end_date = end_date.unwrap_or(existing.end_date);

    // The start/end relationship is deliberately not re-checked here.
    let updated = store
        .update_fields(id, &employee_name, start_date, end_date)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(HttpResponse::Ok().json(updated))
}

/* =========================
Delete request
========================= */
#[utoipa::path(
    delete,
    path = "/api/vacations/{id}",
    params(
        ("id" = i64, Path, description = "ID of the vacation request")
    ),
    responses(
        (status = 204, description = "Request deleted"),
        (status = 404, description = "No request with this id")
    ),
    tag = "Vacations"
)]
pub async fn delete_vacation(
    store: web::Data<VacationStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    if !store.delete(path.into_inner()).await? {
        return Err(ApiError::NotFound);
    }

    Ok(HttpResponse::NoContent().finish())
}

/* =========================
Aggregate stats
========================= */
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Counts per status", body = StatusCounts)
    ),
    tag = "Stats"
)]
pub async fn get_stats(store: web::Data<VacationStore>) -> Result<HttpResponse, ApiError> {
    let counts = store.stats().await?;
    Ok(HttpResponse::Ok().json(counts))
}

//! REST routes and handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ApiError;
use api_shared::{
    CreateReferralReq, CreateReferralRes, DepartmentInfo, ErrorRes, HealthRes, HealthService,
    ListDepartmentsRes, ReferralRecord,
};
use referral_core::ReferralService;

/// Application state for the REST API server
///
/// Holds the referral service, which carries the resolved configuration (file path and
/// department directory). Handlers never read the environment.
#[derive(Clone)]
pub struct AppState {
    pub referral_service: ReferralService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_departments, create_referral, get_referral),
    components(schemas(
        HealthRes,
        CreateReferralReq,
        CreateReferralRes,
        ReferralRecord,
        DepartmentInfo,
        ListDepartmentsRes,
        ErrorRes,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router with Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/departments", get(list_departments))
        .route("/referrals/create", post(create_referral))
        .route("/referrals/:referral_id", get(get_referral))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/departments",
    responses(
        (status = 200, description = "Known departments and specialist availability", body = ListDepartmentsRes)
    )
)]
#[axum::debug_handler]
async fn list_departments(State(state): State<AppState>) -> Json<ListDepartmentsRes> {
    Json(ListDepartmentsRes {
        departments: state.referral_service.departments(),
    })
}

#[utoipa::path(
    post,
    path = "/referrals/create",
    request_body = CreateReferralReq,
    responses(
        (status = 200, description = "Referral created", body = CreateReferralRes),
        (status = 400, description = "Invalid patient ID, doctor ID or department", body = ErrorRes),
        (status = 415, description = "Request body is not JSON", body = ErrorRes),
        (status = 422, description = "Request body is missing fields or has the wrong types", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Create a referral
///
/// Validates the request, allocates the next sequential referral ID and appends the
/// referral to the CSV store.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the patient ID, doctor ID or either department is invalid,
/// - the body is not valid JSON.
///
/// Returns `415` or `422` with the extractor's message if the content type is not JSON or the
/// body does not match [`CreateReferralReq`].
///
/// Returns `500 Internal Server Error` if:
/// - the next ID cannot be allocated or the row cannot be written.
#[axum::debug_handler]
async fn create_referral(
    State(state): State<AppState>,
    payload: Result<Json<CreateReferralReq>, JsonRejection>,
) -> Result<Json<CreateReferralRes>, ApiError> {
    let Json(req) = payload?;
    let res = state.referral_service.create(req)?;
    Ok(Json(res))
}

#[utoipa::path(
    get,
    path = "/referrals/{referral_id}",
    params(
        ("referral_id" = String, Path, description = "Referral ID, `REF` followed by six digits")
    ),
    responses(
        (status = 200, description = "Stored referral", body = ReferralRecord),
        (status = 400, description = "Invalid referral ID format", body = ErrorRes),
        (status = 404, description = "Empty store or referral not found", body = ErrorRes),
        (status = 500, description = "Invalid CSV structure or server error", body = ErrorRes)
    )
)]
/// Fetch a referral by ID
///
/// Returns the stored row with every value as it appears in the CSV file.
#[axum::debug_handler]
async fn get_referral(
    State(state): State<AppState>,
    Path(referral_id): Path<String>,
) -> Result<Json<ReferralRecord>, ApiError> {
    let record = state.referral_service.get(&referral_id)?;
    Ok(Json(record))
}

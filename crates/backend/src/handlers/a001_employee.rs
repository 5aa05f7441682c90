use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::domain::a001_employee::{
    EmployeeId, EmployeeRecord, RegistrationRequest, RegistrationResponse,
};

use crate::domain::a001_employee::{service, RegistrationError};
use crate::shared::state::AppState;

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        let body = RegistrationResponse {
            message: self.to_string(),
            employee: None,
            errors: self.field_errors().cloned(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegistrationResponse>), RegistrationError> {
    let Json(dto) = payload.map_err(|e| {
        tracing::warn!("Unreadable registration body: {}", e.body_text());
        RegistrationError::MalformedBody(e.body_text())
    })?;

    let record = service::register(&state.employees, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse::registered(record)),
    ))
}

/// GET /api/employees
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<EmployeeRecord>> {
    Json(state.employees.list_all().await)
}

/// GET /api/employees/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EmployeeRecord>, StatusCode> {
    let id = EmployeeId::from_string(&id).map_err(|_| StatusCode::BAD_REQUEST)?;
    match state.employees.get_by_id(id).await {
        Some(v) => Ok(Json(v)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use contracts::domain::a001_employee::RegistrationField;

    fn dto(first: &str, surname: &str, id: &str) -> RegistrationRequest {
        RegistrationRequest {
            first_name: first.into(),
            surname: surname.into(),
            id_number: id.into(),
            employee_number: None,
        }
    }

    async fn read_body(response: Response) -> RegistrationResponse {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_register_created() {
        let state = AppState::new();
        let response = register(
            State(state.clone()),
            Ok(Json(dto("Jane", "Doe", "9001015009087"))),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = read_body(response).await;
        assert_eq!(body.message, "Employee Jane Doe registered successfully!");
        let employee = body.employee.unwrap();
        assert_eq!(employee.employee_number.as_str(), "DOE9087");

        let Json(found) = get_by_id(State(state.clone()), Path(employee.id.as_string()))
            .await
            .unwrap();
        assert_eq!(found.id_number, "9001015009087");
        assert_eq!(list_all(State(state)).await.0.len(), 1);
    }

    #[tokio::test]
    async fn test_register_validation_failure_is_bad_request() {
        let response = register(State(AppState::new()), Ok(Json(dto("Wei", "Li", "12"))))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_body(response).await;
        assert!(body.message.starts_with("Validation failed: "));
        let errors = body.errors.unwrap();
        assert_eq!(
            errors.get(RegistrationField::Surname),
            Some("Surname must be at least 3 characters.")
        );
        assert_eq!(
            errors.get(RegistrationField::IdNumber),
            Some("Please enter a valid 13-digit ID number.")
        );
        assert!(body.employee.is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_message() {
        let response =
            RegistrationError::MalformedBody("expected value at line 1".into()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_body(response).await;
        assert_eq!(body.message, "Error parsing JSON: expected value at line 1");
        assert!(body.errors.is_none());
    }

    #[tokio::test]
    async fn test_get_by_id_status_codes() {
        let state = AppState::new();
        assert_eq!(
            get_by_id(State(state.clone()), Path("nope".into()))
                .await
                .unwrap_err(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_by_id(State(state), Path(EmployeeId::new_v4().as_string()))
                .await
                .unwrap_err(),
            StatusCode::NOT_FOUND
        );
    }
}

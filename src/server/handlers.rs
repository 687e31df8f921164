use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;

use crate::domain::model::{ClassificationRequest, ClassificationResult, StatusMessage};
use crate::server::AppState;
use crate::utils::error::ClassifierError;

pub const ROOT_MESSAGE: &str = "Number Classification API is running";

/// GET /
pub async fn root() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: ROOT_MESSAGE.to_string(),
    })
}

/// GET /api/classify-number?number=<n>
pub async fn classify_number(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ClassificationResult>, ClassifierError> {
    // 重複的 number 取最後一個；查詢字串無法解碼時視同沒有帶 number
    let request = match query {
        Ok(Query(pairs)) => ClassificationRequest::from_query_pairs(pairs),
        Err(rejection) => {
            tracing::debug!("Unreadable query string: {}", rejection);
            ClassificationRequest::missing()
        }
    };

    let result = state.service.classify(request).await?;
    tracing::info!(
        number = result.number,
        properties = ?result.properties,
        "✅ Classified number"
    );

    Ok(Json(result))
}

//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn find_category(name: &str) -> Result<Category, AppError> {
//!     let category = category_repo.find_by_name(name).await?
//!         .ok_or_else(|| AppError::NotFound(
//!             format!("카테고리를 찾을 수 없습니다: {}", name)
//!         ))?;
//!     Ok(category)
//! }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ValidationError` | 400 Bad Request |
//! | `NotFound` | 404 Not Found |
//! | `ConflictError` | 409 Conflict |
//! | `AuthenticationError` | 401 Unauthorized |
//! | `DatabaseError` | 500 Internal Server Error |
//! | `RedisError` | 500 Internal Server Error |
//! | `FileError` | 500 Internal Server Error |
//! | `InternalError` | 500 Internal Server Error |

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 핸들러 경계에서 자동으로 HTTP 응답으로 변환됩니다.
///
/// 상품 등록처럼 부분 실패 정리가 필요한 워크플로우에서는 서비스 계층이
/// 이 에러를 내부 로그로만 남기고 호출자에게는 일반 실패 메시지를 반환합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 유효하지 않은 카테고리 이름, 형식이 잘못된 요청 필드 등
    /// 클라이언트 입력이 규칙을 만족하지 않을 때 사용됩니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    ///
    /// 이메일로 회원을 찾지 못했거나 변환된 카테고리 이름이
    /// 저장소에 존재하지 않는 경우 등에 사용됩니다.
    /// 카테고리별 상품 목록 조회에서는 빈 목록이 정상 결과이므로
    /// 이 에러를 사용하지 않습니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    ///
    /// 이메일/닉네임 중복 등 유니크 제약 위반 시 사용됩니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    ///
    /// 잘못된 로그인 정보, 만료되거나 서명이 유효하지 않은 토큰 등.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 파일 시스템 에러 (500 Internal Server Error)
    ///
    /// 업로드 이미지를 설정된 디렉터리에 기록하지 못한 경우 등.
    #[error("File error: {0}")]
    FileError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 `AppError` 변형을 적절한 HTTP 상태 코드와
    /// `{"error": "..."}` 형식의 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("유효하지 않은 카테고리 이름입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("카테고리를 찾을 수 없습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("이미 사용 중인 이메일입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_file_error_response() {
        let error = AppError::FileError("이미지 저장 실패".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

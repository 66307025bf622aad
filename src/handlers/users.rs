//! # User HTTP Handlers
//!
//! 회원 관리와 인증 관련 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/check-email` | 이메일 중복 확인 |
//! | `GET` | `/check-nickname` | 닉네임 중복 확인 |
//! | `POST` | `/join` | 회원가입 (멀티파트) |
//! | `POST` | `/login` | 로그인, 토큰 발급 |
//! | `GET` | `/check-login` | 토큰 유효성 검사 |
//! | `POST` | `/logout` | 로그아웃 |
//! | `GET` | `/info` | 현재 로그인 회원 정보 (인증 필요) |

use actix_multipart::form::{bytes::Bytes, text::Text, MultipartForm};
use actix_web::{get, post, web, HttpMessage, HttpRequest, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::common::StatusResponse;
use crate::domain::dto::users::request::{LoginRequest, UserJoinRequest};
use crate::services::users::UserService;
use crate::storage::UploadedImage;
use crate::utils::string_utils;

/// 이메일 중복 확인 쿼리
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// 닉네임 중복 확인 쿼리
#[derive(Debug, Deserialize)]
pub struct NicknameQuery {
    pub nickname: String,
}

/// 회원가입 멀티파트 폼
#[derive(Debug, MultipartForm)]
pub struct UserJoinForm {
    pub email: Text<String>,
    pub nickname: Text<String>,
    pub password: Text<String>,
    #[multipart(limit = "10MiB")]
    pub photo: Option<Bytes>,
}

/// 이메일 중복 확인 핸들러
///
/// # 엔드포인트
///
/// `GET /check-email?email={email}`
///
/// 안내 메시지를 평문으로 응답합니다.
#[get("/check-email")]
pub async fn check_email(
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let message = service.check_email_duplicate(&query.email).await?;

    Ok(HttpResponse::Ok().body(message))
}

/// 닉네임 중복 확인 핸들러
///
/// # 엔드포인트
///
/// `GET /check-nickname?nickname={nickname}`
#[get("/check-nickname")]
pub async fn check_nickname(
    query: web::Query<NicknameQuery>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let message = service.check_nickname_duplicate(&query.nickname).await?;

    Ok(HttpResponse::Ok().body(message))
}

/// 회원가입 핸들러
///
/// # 엔드포인트
///
/// `POST /join` (multipart/form-data)
///
/// # 폼 필드
///
/// - `email`, `nickname`, `password` - 가입 정보
/// - `photo` - 프로필 사진 (선택)
///
/// 결과 메시지를 평문으로 응답합니다. 가입 실패(중복 등)도
/// 200으로 내려가며 메시지로 구분됩니다.
#[post("/join")]
pub async fn join(
    MultipartForm(form): MultipartForm<UserJoinForm>,
) -> Result<HttpResponse, AppError> {
    let req = UserJoinRequest {
        email: form.email.into_inner(),
        nickname: form.nickname.into_inner(),
        password: form.password.into_inner(),
    };

    // 유효성 검사
    req.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let photo = form.photo.map(|bytes| UploadedImage {
        original_name: string_utils::clean_optional_string(bytes.file_name.clone()),
        data: bytes.data.to_vec(),
    });

    let service = UserService::instance();
    let message = service.join(req, photo).await;

    Ok(HttpResponse::Ok().body(message))
}

/// 로그인 핸들러
///
/// # 엔드포인트
///
/// `POST /login` (application/x-www-form-urlencoded)
///
/// # 응답 (200 OK)
///
/// ```json
/// {
///   "status": true,
///   "message": "로그인 성공",
///   "token": "eyJhbGciOiJIUzI1NiIs...",
///   "nickname": "홍길동"
/// }
/// ```
#[post("/login")]
pub async fn login(
    form: web::Form<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let response = service.login(&form.email, &form.password).await;

    Ok(HttpResponse::Ok().json(response))
}

/// 토큰 유효성 검사 핸들러
///
/// # 엔드포인트
///
/// `GET /check-login` (Authorization 헤더)
///
/// # 응답 (200 OK)
///
/// ```json
/// { "status": true, "message": "유효한 토큰입니다." }
/// ```
#[get("/check-login")]
pub async fn check_login(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();

    let valid = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .map(|header| service.validate_token(header))
        .unwrap_or(false);

    let response = if valid {
        StatusResponse::ok("유효한 토큰입니다.")
    } else {
        StatusResponse::error("유효하지 않은 토큰입니다.")
    };

    Ok(HttpResponse::Ok().json(response))
}

/// 로그아웃 핸들러
///
/// # 엔드포인트
///
/// `POST /logout`
///
/// 토큰은 상태가 없으므로 서버에서 무효화할 것이 없고,
/// 클라이언트가 토큰을 폐기하는 것으로 충분합니다.
#[post("/logout")]
pub async fn logout() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(StatusResponse::ok("로그아웃 성공")))
}

/// 현재 로그인 회원 정보 핸들러
///
/// # 엔드포인트
///
/// `GET /info` (인증 미들웨어 적용)
///
/// 인증 미들웨어가 주입한 사용자 정보로 회원을 조회하여
/// `email: {email}\nnickname: {nickname}` 형식의 평문으로 응답합니다.
#[get("")]
pub async fn user_info(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let auth = req
        .extensions()
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| {
            AppError::AuthenticationError("인증 정보를 찾을 수 없습니다".to_string())
        })?;

    let service = UserService::instance();
    let user = service.login_user_by_email(&auth.email).await?;

    Ok(HttpResponse::Ok().body(format!(
        "email: {}\nnickname: {}",
        user.email, user.nickname
    )))
}

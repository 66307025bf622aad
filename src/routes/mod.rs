//! API 라우트 설정 모듈
//!
//! REST API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 회원, 상품 관련 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 회원가입/로그인/중복 확인 API 엔드포인트
//! - 카테고리별 상품 조회 및 상품 등록 API 엔드포인트
//! - JWT 인증 미들웨어가 적용된 회원 정보 엔드포인트
//! - 헬스체크 엔드포인트
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
    configure_product_routes(cfg);
}

/// 회원 관련 라우트를 설정합니다
///
/// ## Public 라우트 (인증 불필요)
/// - `GET  /check-email` - 이메일 중복 확인
/// - `GET  /check-nickname` - 닉네임 중복 확인
/// - `POST /join` - 회원가입
/// - `POST /login` - 로그인
/// - `GET  /check-login` - 토큰 유효성 검사
/// - `POST /logout` - 로그아웃
///
/// ## Protected 라우트 (인증 필요)
/// - `GET  /info` - 현재 로그인 회원 정보
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    // Public routes
    cfg.service(handlers::users::check_email)
        .service(handlers::users::check_nickname)
        .service(handlers::users::join)
        .service(handlers::users::login)
        .service(handlers::users::check_login)
        .service(handlers::users::logout);

    // Protected routes
    cfg.service(
        web::scope("/info")
            .wrap(AuthMiddleware::required())
            .service(handlers::users::user_info),
    );
}

/// 상품 관련 라우트를 설정합니다
///
/// - `GET  /category/{name}` - 카테고리별 상품 목록 조회
/// - `POST /products` - 상품 등록 (멀티파트)
fn configure_product_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::products::products_by_category);

    cfg.service(
        web::scope("/products")
            .service(handlers::products::add_product),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "bagain_market_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "file_storage": "Local disk",
            "dependency_injection": "Singleton Macro"
        }
    }))
}

//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직
//! ├─────────────────────────────────────────────┤
//!   Stores / FileStore - 데이터 및 파일 접근
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 역할
//!
//! 핸들러는 얇게 유지합니다. 멀티파트 요청을 해석하여 텍스트 필드와
//! 업로드 이미지를 분리하고, DTO 검증 후 서비스를 호출하며,
//! 결과를 직렬화하는 것까지만 담당합니다. 비즈니스 규칙은 전부
//! 서비스 계층에 있습니다.

pub mod products;
pub mod users;

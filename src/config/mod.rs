//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 환경, 비밀번호 해싱 관련 설정
//! - [`auth_config`] - JWT 토큰 관련 설정
//! - [`file_config`] - 업로드 이미지 디렉터리와 공개 URL 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="24"
//!
//! # 파일 스토리지 설정
//! export PRODUCTS_IMAGES_DIRECTORY="/data/products/images"
//! export PRODUCTCOMMENT_IMAGES_DIRECTORY="/data/productcomment/images"
//! export USERS_IMAGES_DIRECTORY="/data/users/images"
//! export FILE_BASE_URL="https://file.bargainus.kr"
//!
//! # 보안 설정
//! export BCRYPT_COST="12"          # 4-15 범위
//! export ENVIRONMENT="production"  # development, test, staging, production
//! ```

pub mod data_config;
pub mod auth_config;
pub mod file_config;

pub use data_config::*;
pub use auth_config::*;
pub use file_config::*;

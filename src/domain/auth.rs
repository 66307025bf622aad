//! 인증 요청 모델
//!
//! 인증 미들웨어가 토큰 검증 후 요청 Extensions에 주입하는
//! 사용자 정보와 인증 모드를 정의합니다.

use serde::{Deserialize, Serialize};

/// 인증이 완료된 요청의 사용자 정보
///
/// 핸들러는 요청 Extensions에서 이 구조체를 꺼내 현재 로그인한
/// 사용자를 식별합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 ID (MongoDB ObjectId의 16진수 문자열)
    pub user_id: String,
    /// 사용자 이메일
    pub email: String,
    /// 사용자 닉네임
    pub nickname: String,
}

/// 미들웨어의 인증 요구 수준
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    /// 유효한 토큰이 없으면 401로 거부
    Required,
    /// 토큰이 있으면 주입하고, 없어도 요청 진행
    Optional,
}

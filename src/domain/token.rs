//! JWT 토큰 클레임 모델

use serde::{Deserialize, Serialize};

/// 액세스 토큰에 담기는 클레임
///
/// `sub`는 사용자 ID(ObjectId 16진수 문자열)이며, 이메일과 닉네임을
/// 함께 담아 미들웨어가 추가 조회 없이 사용자 정보를 복원할 수 있게 합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID
    pub sub: String,
    /// 사용자 이메일
    pub email: String,
    /// 사용자 닉네임
    pub nickname: String,
    /// 발급 시각 (Unix timestamp)
    pub iat: i64,
    /// 만료 시각 (Unix timestamp)
    pub exp: i64,
}

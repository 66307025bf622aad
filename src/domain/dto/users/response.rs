//! 회원 응답 DTO

use serde::{Deserialize, Serialize};

/// 로그인 응답
///
/// 인증 성공 시에만 토큰과 닉네임이 포함됩니다.
/// 인증 실패는 HTTP 200에 `status: false`로 내려가며,
/// 이메일 오류와 비밀번호 오류를 구분하지 않는 동일한 메시지를 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// 인증 성공 여부
    pub status: bool,
    /// 사용자에게 보여줄 메시지
    pub message: String,
    /// 발급된 액세스 토큰 (성공 시에만)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// 로그인한 회원의 닉네임 (성공 시에만)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl LoginResponse {
    /// 인증 성공 응답 생성
    pub fn success(message: impl Into<String>, token: String, nickname: String) -> Self {
        Self {
            status: true,
            message: message.into(),
            token: Some(token),
            nickname: Some(nickname),
        }
    }

    /// 인증 실패 응답 생성
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: message.into(),
            token: None,
            nickname: None,
        }
    }
}

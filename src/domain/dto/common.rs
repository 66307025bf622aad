//! 쓰기 연산 공통 응답 DTO

use serde::{Deserialize, Serialize};

/// 쓰기 연산의 공통 응답 형식
///
/// 상품 등록, 토큰 검사, 로그아웃 등 상태와 메시지만 전달하는
/// 엔드포인트에서 사용됩니다. 실패 시에도 HTTP 200으로 내려가며
/// `status`가 결과를 나타냅니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// 처리 성공 여부
    pub status: bool,
    /// 사용자에게 보여줄 메시지
    pub message: String,
}

impl StatusResponse {
    /// 성공 응답 생성
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: message.into(),
        }
    }

    /// 실패 응답 생성
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: message.into(),
        }
    }
}

//! # 회원 요청 DTO
//!
//! 회원가입과 로그인 요청 데이터 구조를 정의합니다.
//!
//! ## 검증 규칙
//!
//! ### 이메일 (`email`)
//! - RFC 5322 표준 이메일 형식 준수
//! - 중복 여부는 서비스 계층과 유니크 인덱스에서 별도 검증
//!
//! ### 닉네임 (`nickname`)
//! - 길이: 2-20자
//! - 유니코드 문자 지원 (한글 포함)
//!
//! ### 비밀번호 (`password`)
//! - 최소 길이: 8자
//! - 영문자와 숫자 각각 1개 이상 포함

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 회원가입 요청
///
/// 멀티파트 요청의 텍스트 필드를 표현하며, 프로필 사진은
/// 핸들러에서 별도의 `UploadedImage`로 분리됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserJoinRequest {
    /// 회원 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 회원 닉네임
    #[validate(length(min = 2, max = 20, message = "닉네임은 2-20자 사이여야 합니다"))]
    pub nickname: String,

    /// 계정 비밀번호
    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
}

/// 로그인 요청
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// 회원 이메일 주소
    pub email: String,
    /// 계정 비밀번호
    pub password: String,
}

/// 비밀번호 보안 강도를 검증하는 함수
///
/// 영문자와 숫자가 각각 1개 이상 포함되어야 합니다.
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_alpha = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_alpha && has_digit) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 영문자와 숫자를 포함해야 합니다".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> UserJoinRequest {
        UserJoinRequest {
            email: "hong@example.com".to_string(),
            nickname: "홍길동".to_string(),
            password: "password123".to_string(),
        }
    }

    #[test]
    fn test_valid_join_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_fails() {
        let mut req = valid_request();
        req.email = "not-an-email".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_short_password_fails() {
        let mut req = valid_request();
        req.password = "pw1".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_digit_only_password_fails() {
        let mut req = valid_request();
        req.password = "12345678".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_short_nickname_fails() {
        let mut req = valid_request();
        req.nickname = "홍".to_string();
        assert!(req.validate().is_err());
    }
}

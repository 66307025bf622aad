//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 로그인 시 액세스 토큰을 발급하고, 요청의 토큰을 검증합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;

use crate::{
    config::JwtConfig,
    core::errors::AppError,
    domain::entities::users::User,
    domain::token::TokenClaims,
};

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 액세스 토큰을 생성하고 검증합니다.
/// 검증은 서명과 만료만 확인하는 순수 연산이며 부수 효과가 없습니다.
#[service(name = "token")]
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    /// 회원을 위한 JWT 액세스 토큰 생성
    ///
    /// # Arguments
    ///
    /// * `user` - 토큰을 발급받을 회원 정보 (ID가 채워져 있어야 함)
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 생성된 JWT 액세스 토큰
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패 또는 회원 ID 없음
    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(JwtConfig::expiration_hours());

        let claims = TokenClaims {
            sub: user.id_string().ok_or_else(|| {
                AppError::InternalError("회원 ID가 없습니다".to_string())
            })?,
            email: user.email.clone(),
            nickname: user.nickname.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = JwtConfig::secret();
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Arguments
    ///
    /// * `token` - 검증할 JWT 토큰 문자열 (Bearer 접두사 제외)
    ///
    /// # Returns
    ///
    /// * `Ok(TokenClaims)` - 검증된 토큰의 클레임 정보
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    /// * `AppError::InternalError` - 기타 시스템 오류
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                },
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::AuthenticationError("토큰 서명이 유효하지 않습니다".to_string())
                },
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                },
                _ => AppError::AuthenticationError(format!("토큰 검증 실패: {}", e)),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서
    /// 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn user_with_id() -> User {
        let mut user = User::new(
            "hong@example.com".to_string(),
            "홍길동".to_string(),
            "hash".to_string(),
            None,
        );
        user.id = Some(ObjectId::new());
        user
    }

    #[test]
    fn test_token_round_trip() {
        let service = TokenService::instance();
        let user = user_with_id();

        let token = service.generate_access_token(&user).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user.id_string().unwrap());
        assert_eq!(claims.email, "hong@example.com");
        assert_eq!(claims.nickname, "홍길동");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_user_without_id_cannot_get_token() {
        let service = TokenService::instance();
        let user = User::new(
            "hong@example.com".to_string(),
            "홍길동".to_string(),
            "hash".to_string(),
            None,
        );

        assert!(service.generate_access_token(&user).is_err());
    }

    #[test]
    fn test_garbage_token_fails_verification() {
        let service = TokenService::instance();

        assert!(service.verify_token("not-a-jwt").is_err());
        assert!(service.verify_token("").is_err());
    }

    #[test]
    fn test_tampered_token_fails_verification() {
        let service = TokenService::instance();
        let user = user_with_id();

        let token = service.generate_access_token(&user).unwrap();
        let mut tampered = token.clone();
        tampered.pop();

        assert!(service.verify_token(&tampered).is_err());
    }

    #[test]
    fn test_bearer_token_extraction() {
        let service = TokenService::instance();

        assert_eq!(
            service.extract_bearer_token("Bearer abc.def.ghi").unwrap(),
            "abc.def.ghi"
        );
        assert!(service.extract_bearer_token("abc.def.ghi").is_err());
        assert!(service.extract_bearer_token("Basic abc").is_err());
    }
}

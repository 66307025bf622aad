//! # 회원 리포지토리 구현
//!
//! 회원 엔티티의 데이터 액세스 계층입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **데이터 무결성**: 이메일/닉네임 유니크 인덱스.
//!   애플리케이션 계층의 중복 확인은 안내 메시지용이고,
//!   경쟁 상태에서의 최종 방어선은 이 인덱스입니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, IndexModel};
use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    db::Database,
    domain::entities::users::User,
    repositories::UserStore,
};

/// 회원 데이터 액세스 리포지토리
///
/// ## 캐싱 전략
///
/// - **이메일 조회**: `user:email:{email}` 키, TTL 600초.
///   로그인과 인증 확인에서 가장 빈번한 조회 경로입니다.
/// - **닉네임 조회**: 중복 확인에만 쓰이므로 캐싱하지 않습니다.
#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,
    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl UserRepository {
    /// 회원 컬렉션 인덱스를 생성합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **이메일 유니크 인덱스**: 중복 이메일 차단 및 조회 최적화
    /// 2. **닉네임 유니크 인덱스**: 중복 닉네임 차단 및 조회 최적화
    /// 3. **생성일 인덱스**: 최근 가입 회원 조회 최적화
    pub async fn create_indexes(&self) -> AppResult<()> {
        let collection = self.collection::<User>();

        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 닉네임 유니크 인덱스
        let nickname_index = IndexModel::builder()
            .keys(doc! { "nickname": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("nickname_unique".to_string())
                .build())
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([email_index, nickname_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// MongoDB 중복 키 에러(E11000)를 비즈니스 충돌 에러로 변환합니다.
fn map_insert_error(message: String) -> AppError {
    if message.contains("E11000") {
        AppError::ConflictError("이미 사용 중인 이메일 또는 닉네임입니다".to_string())
    } else {
        AppError::DatabaseError(message)
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        // 캐시에서 먼저 확인
        let cache_key = format!("user:email:{}", email);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 에서 조회
        let user = self.collection::<User>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시에 저장 (10분)
        if let Some(ref user) = user {
            let _ = self.redis
                .set_with_expiry(&cache_key, user, 600)
                .await;
        }

        Ok(user)
    }

    async fn find_by_nickname(&self, nickname: &str) -> AppResult<Option<User>> {
        self.collection::<User>()
            .find_one(doc! { "nickname": nickname })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        let result = self.collection::<User>()
            .insert_one(&user)
            .await
            .map_err(|e| map_insert_error(e.to_string()))?;

        user.id = result.inserted_id.as_object_id();

        // 이메일 캐시 무효화
        let _ = self.redis.del(&format!("user:email:{}", user.email)).await;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_error_maps_to_conflict() {
        let message =
            "E11000 duplicate key error collection: bagain_market.users index: email_unique"
                .to_string();

        match map_insert_error(message) {
            AppError::ConflictError(_) => {}
            other => panic!("ConflictError가 아닌 에러: {:?}", other),
        }
    }

    #[test]
    fn test_other_errors_map_to_database_error() {
        match map_insert_error("connection reset".to_string()) {
            AppError::DatabaseError(_) => {}
            other => panic!("DatabaseError가 아닌 에러: {:?}", other),
        }
    }
}

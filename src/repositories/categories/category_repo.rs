//! # 카테고리 리포지토리 구현
//!
//! 카테고리 엔티티의 데이터 액세스 계층입니다.
//! MongoDB를 주 저장소로 사용하고, 이름 조회는 Redis로 캐싱합니다.
//! 카테고리 집합은 고정이므로 기동 시 표준 이름들을 시드합니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, IndexModel};
use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    db::Database,
    domain::category_label::CANONICAL_LABELS,
    domain::entities::categories::Category,
    repositories::CategoryStore,
};

/// 카테고리 데이터 액세스 리포지토리
///
/// ## 캐싱 정책
///
/// - **캐시 키**: `category:name:{name}`
/// - **TTL**: 600초 (10분)
/// - 카테고리는 기동 시 시드 후 변경되지 않으므로 조회 캐시만 사용합니다.
#[repository(name = "category", collection = "categories")]
pub struct CategoryRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,
    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl CategoryRepository {
    /// 카테고리 컬렉션 인덱스를 생성합니다.
    ///
    /// `name` 필드의 유니크 인덱스 하나를 생성하여 이름 중복을
    /// 저장소 레벨에서 차단하고 이름 조회를 최적화합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("name_unique".to_string())
                .build())
            .build();

        self.collection::<Category>()
            .create_indexes([name_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 표준 카테고리들을 시드합니다.
    ///
    /// 고정 집합(fruits, vegetables, grains) 중 컬렉션에 없는 이름만
    /// 삽입합니다. 기동 시 한 번 호출되며 멱등합니다.
    pub async fn seed_defaults(&self) -> AppResult<()> {
        for name in CANONICAL_LABELS {
            let existing = self.collection::<Category>()
                .find_one(doc! { "name": name })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            if existing.is_none() {
                self.collection::<Category>()
                    .insert_one(&Category::new(name))
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                log::info!("기본 카테고리 생성: {}", name);
            }
        }

        Ok(())
    }
}

#[async_trait]
impl CategoryStore for CategoryRepository {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Category>> {
        // 캐시에서 먼저 확인
        let cache_key = format!("category:name:{}", name);

        if let Ok(Some(cached)) = self.redis.get::<Category>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 에서 조회
        let category = self.collection::<Category>()
            .find_one(doc! { "name": name })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시에 저장 (10분)
        if let Some(ref category) = category {
            let _ = self.redis
                .set_with_expiry(&cache_key, category, 600)
                .await;
        }

        Ok(category)
    }
}

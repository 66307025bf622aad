//! # 상품 리포지토리 구현
//!
//! 상품 엔티티의 데이터 액세스 계층입니다.
//! 카테고리별 목록 조회와 저장을 담당합니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::StreamExt;
use mongodb::{bson::doc, options::IndexOptions, IndexModel};
use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    db::Database,
    domain::entities::categories::Category,
    domain::entities::products::Product,
    repositories::ProductStore,
};

/// 상품 데이터 액세스 리포지토리
///
/// 목록 조회는 `category_id` 인덱스를 사용합니다. 상품 목록은
/// 등록으로 수시로 변하므로 Redis 캐싱을 적용하지 않습니다.
#[repository(name = "product", collection = "products")]
pub struct ProductRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,
    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl ProductRepository {
    /// 상품 컬렉션 인덱스를 생성합니다.
    ///
    /// 카테고리별 목록 조회를 위한 `category_id` 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let category_index = IndexModel::builder()
            .keys(doc! { "category_id": 1 })
            .options(IndexOptions::builder()
                .name("category_id_idx".to_string())
                .build())
            .build();

        self.collection::<Product>()
            .create_indexes([category_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn find_by_category(&self, category: &Category) -> AppResult<Vec<Product>> {
        let category_id = category.id.ok_or_else(|| {
            AppError::InternalError("저장되지 않은 카테고리로 상품을 조회할 수 없습니다".to_string())
        })?;

        let mut cursor = self.collection::<Product>()
            .find(doc! { "category_id": category_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut products = Vec::new();
        while let Some(result) = cursor.next().await {
            let product = result.map_err(|e| AppError::DatabaseError(e.to_string()))?;
            products.push(product);
        }

        Ok(products)
    }

    async fn save(&self, mut product: Product) -> AppResult<Product> {
        let result = self.collection::<Product>()
            .insert_one(&product)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        product.id = result.inserted_id.as_object_id();

        Ok(product)
    }
}

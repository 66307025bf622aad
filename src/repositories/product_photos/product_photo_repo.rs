//! # 상품 상세 사진 리포지토리 구현
//!
//! 상품 상세 사진 엔티티의 데이터 액세스 계층입니다.
//! 상세 사진은 상품 등록의 부수 효과로만 생성되며,
//! 소유 상품 ID로 조회됩니다.

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
    domain::entities::products::{Product, ProductPhoto},
    repositories::ProductPhotoStore,
};

/// 상품 상세 사진 데이터 액세스 리포지토리
#[repository(name = "productphoto", collection = "product_photos")]
pub struct ProductPhotoRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,
    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl ProductPhotoRepository {
    /// 상세 사진 컬렉션 인덱스를 생성합니다.
    ///
    /// 상품별 사진 조회를 위한 `product_id` 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let product_index = IndexModel::builder()
            .keys(doc! { "product_id": 1 })
            .options(IndexOptions::builder()
                .name("product_id_idx".to_string())
                .build())
            .build();

        self.collection::<ProductPhoto>()
            .create_indexes([product_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ProductPhotoStore for ProductPhotoRepository {
    async fn find_by_product(&self, product: &Product) -> AppResult<Vec<ProductPhoto>> {
        let product_id = product.id.ok_or_else(|| {
            AppError::InternalError("저장되지 않은 상품으로 사진을 조회할 수 없습니다".to_string())
        })?;

        let mut cursor = self.collection::<ProductPhoto>()
            .find(doc! { "product_id": product_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut photos = Vec::new();
        while let Some(result) = cursor.next().await {
            let photo = result.map_err(|e| AppError::DatabaseError(e.to_string()))?;
            photos.push(photo);
        }

        Ok(photos)
    }

    async fn save(&self, mut photo: ProductPhoto) -> AppResult<ProductPhoto> {
        let result = self.collection::<ProductPhoto>()
            .insert_one(&photo)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        photo.id = result.inserted_id.as_object_id();

        Ok(photo)
    }
}

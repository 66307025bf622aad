//! 상품 상세 사진 리포지토리 모듈

pub mod product_photo_repo;

pub use product_photo_repo::ProductPhotoRepository;

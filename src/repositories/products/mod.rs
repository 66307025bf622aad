//! 상품 리포지토리 모듈

pub mod product_repo;

pub use product_repo::ProductRepository;

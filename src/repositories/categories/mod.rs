//! 카테고리 리포지토리 모듈

pub mod category_repo;

pub use category_repo::CategoryRepository;

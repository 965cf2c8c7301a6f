//! Memory Layer - In-Memory State Management
//!
//! 实现 NovelRepository，进程内保存全部小说记录

mod novel_repository;

pub use novel_repository::InMemoryNovelRepository;

//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod export;
pub mod llm;
pub mod storage;

pub use export::*;
pub use llm::*;
pub use storage::*;

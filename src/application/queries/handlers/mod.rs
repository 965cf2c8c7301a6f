//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod model_handlers;
mod novel_handlers;

pub use model_handlers::*;
pub use novel_handlers::*;

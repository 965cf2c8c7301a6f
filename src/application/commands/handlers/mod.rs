//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod export_handlers;
mod generate_handlers;
mod novel_handlers;

pub use export_handlers::*;
pub use generate_handlers::*;
pub use novel_handlers::*;

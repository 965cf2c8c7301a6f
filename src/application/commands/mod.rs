//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod export_commands;
mod generate_commands;
mod novel_commands;

pub mod handlers;

pub use export_commands::*;
pub use generate_commands::*;
pub use novel_commands::*;

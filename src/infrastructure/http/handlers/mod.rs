//! HTTP Handlers

mod export;
mod generate;
mod models;
mod novel;
mod ping;

pub use export::*;
pub use generate::*;
pub use models::*;
pub use novel::*;
pub use ping::*;

pub mod chat_handlers;
pub mod params;
pub mod system_handlers;

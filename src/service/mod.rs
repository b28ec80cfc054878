pub mod chat_service;
pub mod stats_service;

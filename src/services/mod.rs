pub mod convert_service;
pub mod message_service;
pub mod resolver_service;

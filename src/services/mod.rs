pub mod chat_gateway;
pub mod tutor_service;

pub use chat_gateway::{ChatCompletionGateway, HttpChatGateway};
pub use tutor_service::TutorService;

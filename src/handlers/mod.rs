pub mod tutor_handler;

pub use tutor_handler::{ask_tutor, health_check};

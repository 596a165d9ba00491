pub mod chat_handler;

pub use chat_handler::{evaluate, rephrase, root, start};

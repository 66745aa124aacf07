pub mod payload;

pub use payload::{AudioEncoding, AudioPayload};

//! Speech-to-text stage
//!
//! Wraps a single outbound call to a Deepgram-style speech-recognition API:
//! raw audio bytes in, plain-text transcript out. Missing fields in the
//! provider response degrade to an empty transcript ("no speech detected" is
//! a legitimate outcome); HTTP-level failures do not.

mod client;
mod response;

pub use client::{DeepgramTranscriber, Transcriber};
pub use response::ListenResponse;

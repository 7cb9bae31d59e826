//! Markdown table segmenter for LLM chat output.
//!
//! Chat models like to embed pipe tables in otherwise plain answers.
//! This crate scans a message, finds the table regions, and splits the
//! text into an ordered list of prose and table segments so a chat UI
//! can render each part independently.
//!
//! The scan is deliberately forgiving: it tolerates ragged pipe
//! counts, missing separator rows, and several tables in one message.
//! If no usable table is found the whole message is reported as
//! untabular (`None`) so callers can fall back to plain rendering.

mod segment;
mod segmenter;

pub use segment::Segment;
pub use segmenter::segment;

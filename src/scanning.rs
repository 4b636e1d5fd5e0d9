//! Character-level scanning.
//!
//! The scanner works in a single pass with no backtracking. Each character
//! of the input is fed simultaneously to two small state machines: a
//! [`Word`](word::Word) accumulates the current token between delimiters,
//! and a [`Sentence`](sentence::Sentence) assembles one whole declaration,
//! tracking angle-bracket depth and double-quote state so nested or quoted
//! brackets do not end it early. [`DeclarationScanner`](scanner::DeclarationScanner)
//! drives both over a file's contents and yields completed declarations and
//! export markers in source order.

pub mod scanner;
pub mod sentence;
pub mod word;

pub use scanner::{DeclarationScanner, ScanError, ScanEvent};
pub use sentence::Sentence;
pub use word::Word;

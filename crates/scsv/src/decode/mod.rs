//! Decoding pipeline: line source, classification, flow state and the parser.

pub mod directive;
pub mod flow;
pub mod parser;
pub mod scanner;
pub mod source;

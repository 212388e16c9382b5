//! Main module for codesim library functionality

pub mod ast;
pub mod cursor;
pub mod formats;
pub mod lexer;
pub mod location;
pub mod parser;
pub mod processor;
pub mod similarity;
pub mod sizer;

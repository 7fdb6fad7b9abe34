//! Scanner, AST and Pratt parser for the Bogus language.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use error::ParseError;
pub use parser::parse;

pub mod constants;
pub mod corpus;
pub mod document;
pub mod lexer;
pub mod ranking;
pub mod similarity;

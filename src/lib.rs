pub use crate::errors::AppError;
pub use crate::syntax::{
    parse, parse_with, DataSection, ErrorKind, FileSection, GroupSection, ParseError,
    ParseOptions, Record,
};

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod input;
pub mod ir;
pub mod syntax;

//! Declarative command-line option parser
//!
//! Declare options on an [`OptionParser`], then [`parse`][OptionParser::parse] argument vectors
//! into [`Options`]:
//! - `-a` binds a flag, `-abc` binds several at once
//! - `-r 42`, `--reply 42` and `--reply=42` bind a value
//! - undeclared options are reported as [`ErrorKind::UnknownOption`]
//! - everything else, after the program name, is a positional argument
//!
//! ## Example
//!
//! ```no_run
#![doc = include_str!("../examples/greet.rs")]
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations, elided_lifetimes_in_paths)]
#![warn(missing_docs)]
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

mod decl;
mod interpret;
mod options;
mod parser;
mod value;

pub mod help;

pub use decl::Kind;
pub use decl::OptionDecl;
pub use options::Options;
pub use options::ProgramInfo;
pub use parser::OptionParser;
pub use value::Value;
pub use value::TRUE;

pub use optparse_error::Error;
pub use optparse_error::ErrorKind;
pub use optparse_error::Result;
pub use optparse_lexer::Lexer;
pub use optparse_lexer::Token;

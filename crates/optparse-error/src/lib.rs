//! Argument error type for use with optparse
//!
//! ## Example
//! ```rust
//! use optparse_error::Error;
//! use optparse_error::ErrorKind;
//! use optparse_error::Result;
//!
//! fn lookup(name: char) -> Result<()> {
//!     if name == 'z' {
//!         return Err(Error::unknown_short(name));
//!     }
//!     Ok(())
//! }
//!
//! let err = lookup('z').unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnknownOption);
//! assert_eq!(err.to_string(), "unrecognized `-z` flag");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

/// `Result<T, Error>`
///
/// `optparse_error::Result` may be used with one *or* two type parameters.
///
/// ```rust
/// use optparse_error::Result;
///
/// # const IGNORE: &str = stringify! {
/// fn demo1() -> Result<T> {...}
///            // ^ equivalent to std::result::Result<T, optparse_error::Error>
///
/// fn demo2() -> Result<T, OtherError> {...}
///            // ^ equivalent to std::result::Result<T, OtherError>
/// # };
/// ```
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Category of an [`Error`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A short name that is not a single alphabetic character
    InvalidShortName,
    /// A long name that is neither empty nor an alphabetic word of 3+ characters
    InvalidLongName,
    /// A short or long name declared more than once
    DuplicateOption,
    /// An argument naming an option that was never declared
    UnknownOption,
    /// An argument that cannot be interpreted, like a dash followed by an empty name
    MalformedToken,
    /// A value that could not be converted to the requested type
    Conversion,
    /// Raised by the host program, e.g. when validating parsed options
    Other,
}

impl ErrorKind {
    /// Short, stable description of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidShortName => "invalid short name",
            Self::InvalidLongName => "invalid long name",
            Self::DuplicateOption => "duplicate option",
            Self::UnknownOption => "unknown option",
            Self::MalformedToken => "malformed argument",
            Self::Conversion => "invalid value",
            Self::Other => "error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

/// Argument error type for use with optparse
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    msg: String,
}

impl Error {
    /// Create a new error object from a printable error message.
    #[cold]
    pub fn new<M>(kind: ErrorKind, message: M) -> Self
    where
        M: std::fmt::Display,
    {
        Error {
            kind,
            msg: message.to_string(),
        }
    }

    /// Create an [`ErrorKind::Other`] error from a printable error message.
    #[cold]
    pub fn msg<M>(message: M) -> Self
    where
        M: std::fmt::Display,
    {
        Self::new(ErrorKind::Other, message)
    }

    /// `-z` was not declared
    #[cold]
    pub fn unknown_short(name: char) -> Self {
        Self::new(
            ErrorKind::UnknownOption,
            format_args!("unrecognized `-{name}` flag"),
        )
    }

    /// `--zap` was not declared
    #[cold]
    pub fn unknown_long(name: &str) -> Self {
        Self::new(
            ErrorKind::UnknownOption,
            format_args!("unrecognized `--{name}` flag"),
        )
    }

    /// `value` could not be read as `ty`
    #[cold]
    pub fn conversion(value: &str, ty: &str, cause: impl std::fmt::Display) -> Self {
        Self::new(
            ErrorKind::Conversion,
            format_args!("`{value}` is not a valid {ty}: {cause}"),
        )
    }

    /// What went wrong
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The rendered message, without the kind
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.msg.fmt(formatter)
    }
}

impl std::error::Error for Error {}

use crate::Error;
use crate::ErrorKind;
use crate::Result;

/// How an option consumes the argument after it
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Takes the following name as its value, e.g. `-o out.txt`
    #[default]
    Value,
    /// Presence alone binds `"true"`
    Flag,
}

/// A declared option
///
/// Created through [`OptionParser::add`][crate::OptionParser::add] and configured with the
/// chaining setters:
///
/// ```rust
/// let mut parser = optparse::OptionParser::new();
/// parser
///     .add_long('r', "reply")?
///     .set_default_value("42")
///     .set_metavar("ANSWER")
///     .set_help("The answer");
/// # Ok::<(), optparse::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct OptionDecl {
    short: char,
    long: String,
    kind: Kind,
    default_value: String,
    help: String,
    metavar: String,
}

impl OptionDecl {
    /// Declare `-{short}`
    pub fn new(short: char) -> Result<Self> {
        validate_short(short)?;
        Ok(Self {
            short,
            long: String::new(),
            kind: Kind::default(),
            default_value: String::new(),
            help: String::new(),
            metavar: String::new(),
        })
    }

    /// Declare `-{short}` with the `--{long}` alias
    ///
    /// An empty `long` means there is no long form.
    pub fn with_long(short: char, long: impl Into<String>) -> Result<Self> {
        let long = long.into();
        validate_long(&long)?;
        let mut decl = Self::new(short)?;
        decl.long = long;
        Ok(decl)
    }

    /// The `-{short}` name
    pub fn short(&self) -> char {
        self.short
    }

    /// The long alias, empty when there is none
    pub fn long(&self) -> &str {
        &self.long
    }

    /// How the following argument is consumed
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Whether this is a [`Kind::Flag`]
    pub fn is_flag(&self) -> bool {
        self.kind == Kind::Flag
    }

    /// Value bound when the option is absent, empty when unset
    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    /// Description shown in help output
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Placeholder for the value in help output
    pub fn metavar(&self) -> &str {
        &self.metavar
    }
}

impl OptionDecl {
    /// Change how the following argument is consumed
    pub fn set_kind(&mut self, kind: Kind) -> &mut Self {
        self.kind = kind;
        self
    }

    /// Shorthand for `set_kind(Kind::Flag)`
    pub fn flag(&mut self) -> &mut Self {
        self.set_kind(Kind::Flag)
    }

    /// Set the value bound when the option is absent
    pub fn set_default_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.default_value = value.into();
        self
    }

    /// Set the description shown in help output
    pub fn set_help(&mut self, help: impl Into<String>) -> &mut Self {
        self.help = help.into();
        self
    }

    /// Set the value placeholder, e.g. `FILE` in `-o <FILE>`
    pub fn set_metavar(&mut self, metavar: impl Into<String>) -> &mut Self {
        self.metavar = metavar.into();
        self
    }
}

impl PartialEq for OptionDecl {
    fn eq(&self, other: &Self) -> bool {
        self.short == other.short
    }
}

impl Eq for OptionDecl {}

pub(crate) fn validate_short(short: char) -> Result<()> {
    if short.is_ascii_alphabetic() {
        Ok(())
    } else {
        Err(Error::new(
            ErrorKind::InvalidShortName,
            format_args!("`{}` is not a valid short name, expected a letter", short.escape_debug()),
        ))
    }
}

pub(crate) fn validate_long(long: &str) -> Result<()> {
    if long.is_empty() || (2 < long.len() && long.bytes().all(|b| b.is_ascii_alphabetic())) {
        Ok(())
    } else {
        Err(Error::new(
            ErrorKind::InvalidLongName,
            format_args!(
                "`{}` is not a valid long name, expected 3 or more letters",
                long.escape_debug()
            ),
        ))
    }
}

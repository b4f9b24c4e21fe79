use std::ffi::OsStr;

use optparse_lexer::Lexer;

use crate::interpret::Interpreter;
use crate::Error;
use crate::ErrorKind;
use crate::OptionDecl;
use crate::Options;
use crate::ProgramInfo;
use crate::Result;

/// Registry of declared options
///
/// Options are declared up front with [`OptionParser::add`] and friends, then any number of
/// argument vectors can be parsed against them.  Parsing only borrows the registry, so each
/// [`Options`] is independent of the previous ones.
#[derive(Clone, Debug, Default)]
pub struct OptionParser {
    program: ProgramInfo,
    decls: Vec<OptionDecl>,
}

impl OptionParser {
    /// An empty registry for an unnamed program
    pub fn new() -> Self {
        Default::default()
    }

    /// Describe the program
    ///
    /// A non-empty [`ProgramInfo::name`] takes precedence over the first argument.
    pub fn with_program(program: ProgramInfo) -> Self {
        Self {
            program,
            decls: Vec::new(),
        }
    }

    /// Declare `-{short}`
    pub fn add(&mut self, short: char) -> Result<&mut OptionDecl> {
        self.add_decl(OptionDecl::new(short)?)
    }

    /// Declare `-{short}`, also reachable as `--{long}`
    pub fn add_long(&mut self, short: char, long: &str) -> Result<&mut OptionDecl> {
        self.add_decl(OptionDecl::with_long(short, long)?)
    }

    /// Declare a pre-built option
    pub fn add_decl(&mut self, decl: OptionDecl) -> Result<&mut OptionDecl> {
        if self.get(decl.short()).is_some() {
            return Err(Error::new(
                ErrorKind::DuplicateOption,
                format_args!("`-{}` is already declared", decl.short()),
            ));
        }
        if !decl.long().is_empty() && self.iter().any(|d| d.long() == decl.long()) {
            return Err(Error::new(
                ErrorKind::DuplicateOption,
                format_args!("`--{}` is already declared", decl.long()),
            ));
        }

        let index = self.decls.len();
        self.decls.push(decl);
        Ok(&mut self.decls[index])
    }

    /// Look up the declaration of `-{short}`
    pub fn get(&self, short: char) -> Option<&OptionDecl> {
        self.decls.iter().find(|d| d.short() == short)
    }

    /// Declared options, in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, OptionDecl> {
        self.decls.iter()
    }

    /// Program metadata as declared
    pub fn program_info(&self) -> &ProgramInfo {
        &self.program
    }

    /// Usage and option table, see [`help::render_help`][crate::help::render_help]
    pub fn render_help(&self) -> String {
        crate::help::render_help(&self.program, &self.decls)
    }

    /// Like [`OptionParser::render_help`] but naming the program as resolved by a parse
    pub fn render_help_for(&self, program: &ProgramInfo) -> String {
        crate::help::render_help(program, &self.decls)
    }

    /// Version line, see [`help::render_version`][crate::help::render_version]
    pub fn render_version(&self) -> String {
        crate::help::render_version(&self.program)
    }

    /// Parse `raw`, where `raw[0]` is the program name
    pub fn parse<S: AsRef<str>>(&self, raw: &[S]) -> Result<Options> {
        Interpreter::new(&self.decls).run(&self.program, Lexer::new(raw))
    }

    /// Parse OS arguments, see [`OptionParser::parse`]
    ///
    /// Arguments must be valid UTF-8.
    pub fn parse_os<S: AsRef<OsStr>>(&self, raw: &[S]) -> Result<Options> {
        let raw = raw
            .iter()
            .enumerate()
            .map(|(index, arg)| {
                let arg = arg.as_ref();
                arg.to_str().ok_or_else(|| {
                    Error::new(
                        ErrorKind::MalformedToken,
                        format_args!(
                            "argument {index} is not valid UTF-8: `{}`",
                            arg.to_string_lossy()
                        ),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;
        self.parse(&raw)
    }

    /// Parse [`std::env::args_os`]
    pub fn parse_env(&self) -> Result<Options> {
        let raw = std::env::args_os().collect::<Vec<_>>();
        self.parse_os(&raw)
    }
}

impl<'p> IntoIterator for &'p OptionParser {
    type Item = &'p OptionDecl;
    type IntoIter = std::slice::Iter<'p, OptionDecl>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

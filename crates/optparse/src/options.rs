use std::collections::BTreeMap;

use crate::Value;

/// Describes the program for help and version output
///
/// An empty `name` is filled in from the first argument when parsing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProgramInfo {
    /// Program name, as shown in usage and version output
    pub name: String,
    /// Shown above the usage line by [`OptionParser::render_help`][crate::OptionParser::render_help]
    pub help: String,
    /// Shown by [`OptionParser::render_version`][crate::OptionParser::render_version]
    pub version: String,
}

impl ProgramInfo {
    /// Describe the program `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set [`ProgramInfo::help`]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Set [`ProgramInfo::version`]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

/// Parsed command-line options
///
/// Holds exactly one [`Value`] per declared option, keyed by short name, plus the positional
/// arguments in the order they appeared.
///
/// To parse, see [`OptionParser::parse`][crate::OptionParser::parse]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Options {
    program: ProgramInfo,
    values: BTreeMap<char, Value>,
    args: Vec<Value>,
}

impl Options {
    pub(crate) fn new(program: ProgramInfo, values: BTreeMap<char, Value>, args: Vec<Value>) -> Self {
        Self {
            program,
            values,
            args,
        }
    }

    /// Value for the option declared as `-{short}`
    ///
    /// Returns `None` only for names that were never declared.
    pub fn get(&self, short: char) -> Option<&Value> {
        self.values.get(&short)
    }

    /// Whether `-{short}` was declared
    pub fn contains(&self, short: char) -> bool {
        self.values.contains_key(&short)
    }

    /// All option values, ordered by short name
    pub fn iter(&self) -> impl Iterator<Item = (char, &Value)> + '_ {
        self.values.iter().map(|(short, value)| (*short, value))
    }

    /// Positional arguments, excluding the program name
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// The declared program name, or else the first argument
    pub fn program_name(&self) -> &str {
        &self.program.name
    }

    /// Program metadata with the name resolved
    pub fn program_info(&self) -> &ProgramInfo {
        &self.program
    }
}

impl std::ops::Index<char> for Options {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if `short` was never declared
    fn index(&self, short: char) -> &Self::Output {
        match self.get(short) {
            Some(value) => value,
            None => panic!("option `-{short}` was not declared"),
        }
    }
}

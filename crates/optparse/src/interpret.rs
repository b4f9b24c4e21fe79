//! Bind tokens to declared options
//!
//! A single forward pass over the [`Token`] stream:
//! - the first bare name is the program name
//! - `-x` binds a single option, consuming the following name as its value if `x` takes one
//! - `-xyz` binds each of `x`, `y`, `z` to `"true"`
//! - `--long` binds the aliased option, consuming the following name unless it is a flag
//! - any other bare name is a positional argument

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::iter::Peekable;

use optparse_lexer::Token;

use crate::Error;
use crate::ErrorKind;
use crate::OptionDecl;
use crate::Options;
use crate::ProgramInfo;
use crate::Result;
use crate::Value;

/// Lookup tables borrowed from an [`OptionParser`][crate::OptionParser] for one parse
#[derive(Debug)]
pub(crate) struct Interpreter<'p> {
    decls: &'p [OptionDecl],
    shorts: HashMap<char, usize>,
    longs: HashMap<&'p str, usize>,
}

impl<'p> Interpreter<'p> {
    pub(crate) fn new(decls: &'p [OptionDecl]) -> Self {
        let mut shorts = HashMap::with_capacity(decls.len());
        let mut longs = HashMap::with_capacity(decls.len());
        for (index, decl) in decls.iter().enumerate() {
            shorts.insert(decl.short(), index);
            if !decl.long().is_empty() {
                longs.insert(decl.long(), index);
            }
        }
        Self {
            decls,
            shorts,
            longs,
        }
    }

    /// Interpret `tokens`, starting every option from its declared default
    pub(crate) fn run<'a, I>(&self, program: &ProgramInfo, tokens: I) -> Result<Options>
    where
        I: IntoIterator<Item = Token<'a>>,
    {
        let mut state = State {
            values: self
                .decls
                .iter()
                .map(|decl| (decl.short(), Value::new(decl.default_value())))
                .collect(),
            args: Vec::new(),
            program: program.clone(),
            seen_program_name: false,
        };

        let mut tokens = tokens.into_iter().peekable();
        while let Some(token) = tokens.next() {
            match token {
                Token::Dash => {
                    if next_is_dash(&mut tokens) {
                        self.long(&mut tokens, &mut state)?;
                    } else {
                        self.short(&mut tokens, &mut state)?;
                    }
                }
                Token::Name(name) => state.bare(name.into_owned()),
            }
        }

        tracing::debug!(
            program = %state.program.name,
            options = state.values.len(),
            args = state.args.len(),
            "parsed arguments"
        );
        Ok(Options::new(state.program, state.values, state.args))
    }

    fn short<'a, I>(&self, tokens: &mut Peekable<I>, state: &mut State) -> Result<()>
    where
        I: Iterator<Item = Token<'a>>,
    {
        let Some(name) = next_name(tokens) else {
            return Ok(());
        };

        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(Error::new(
                ErrorKind::MalformedToken,
                "expected an option name after `-`",
            )),
            (Some(short), None) => {
                let decl = self.lookup_short(short)?;
                let value = if decl.is_flag() {
                    Value::truthy()
                } else {
                    next_value(tokens).unwrap_or_else(Value::truthy)
                };
                state.bind(short, value);
                Ok(())
            }
            _ => {
                // Clustered shorts are always flags, even when declared to take a value
                for short in name.chars() {
                    self.lookup_short(short)?;
                    state.bind(short, Value::truthy());
                }
                Ok(())
            }
        }
    }

    fn long<'a, I>(&self, tokens: &mut Peekable<I>, state: &mut State) -> Result<()>
    where
        I: Iterator<Item = Token<'a>>,
    {
        let Some(name) = next_name(tokens) else {
            return Ok(());
        };
        if name.is_empty() {
            return Err(Error::new(
                ErrorKind::MalformedToken,
                "expected an option name after `--`",
            ));
        }

        let decl = self
            .longs
            .get(name.as_str())
            .map(|&index| &self.decls[index])
            .ok_or_else(|| Error::unknown_long(&name))?;
        if decl.is_flag() {
            state.bind(decl.short(), Value::truthy());
        } else if let Some(value) = next_value(tokens) {
            state.bind(decl.short(), value);
        } else {
            tracing::trace!(short = %decl.short(), "`--{name}` without a value, keeping default");
        }
        Ok(())
    }

    fn lookup_short(&self, short: char) -> Result<&'p OptionDecl> {
        self.shorts
            .get(&short)
            .map(|&index| &self.decls[index])
            .ok_or_else(|| Error::unknown_short(short))
    }
}

#[derive(Debug)]
struct State {
    values: BTreeMap<char, Value>,
    args: Vec<Value>,
    program: ProgramInfo,
    seen_program_name: bool,
}

impl State {
    fn bind(&mut self, short: char, value: Value) {
        tracing::trace!(%short, %value, "bound option");
        self.values.insert(short, value);
    }

    fn bare(&mut self, name: String) {
        if self.seen_program_name {
            self.args.push(Value::new(name));
        } else {
            self.seen_program_name = true;
            if self.program.name.is_empty() {
                self.program.name = name;
            }
        }
    }
}

fn next_is_dash<'a, I>(tokens: &mut Peekable<I>) -> bool
where
    I: Iterator<Item = Token<'a>>,
{
    tokens.peek().is_some_and(Token::is_dash)
}

/// Skip to and take the next name
fn next_name<'a, I>(tokens: &mut Peekable<I>) -> Option<String>
where
    I: Iterator<Item = Token<'a>>,
{
    tokens.find_map(|token| match token {
        Token::Dash => None,
        Token::Name(name) => Some(name.into_owned()),
    })
}

/// Take the next token only if it is a name
fn next_value<'a, I>(tokens: &mut Peekable<I>) -> Option<Value>
where
    I: Iterator<Item = Token<'a>>,
{
    match tokens.next_if(|token| !token.is_dash())? {
        Token::Name(name) => Some(Value::new(name.into_owned())),
        Token::Dash => None,
    }
}

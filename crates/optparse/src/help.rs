//! Help and version text
//!
//! Output is styled with ANSI escapes; write it through `anstream` so they are stripped when
//! the terminal does not want them.

use std::fmt::Write as _;

use crate::OptionDecl;
use crate::ProgramInfo;

pub(crate) const HEADER: anstyle::Style = anstyle::Style::new().bold().underline();
pub(crate) const LITERAL: anstyle::Style = anstyle::Style::new().bold();
pub(crate) const PLACEHOLDER: anstyle::Style = anstyle::Style::new().italic();
/// Prefix style for reporting parse errors
pub const ERROR: anstyle::Style = anstyle::Style::new()
    .bold()
    .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red)));

const DEFAULT_BIN: &str = "program";

/// Render the usage and option table
pub fn render_help<'d>(
    program: &ProgramInfo,
    decls: impl IntoIterator<Item = &'d OptionDecl>,
) -> String {
    let bin = if program.name.is_empty() {
        DEFAULT_BIN
    } else {
        program.name.as_str()
    };
    let rows = decls.into_iter().map(Row::new).collect::<Vec<_>>();

    let mut out = String::new();
    if !program.help.trim().is_empty() {
        let _ = writeln!(out, "{}", program.help.trim_end());
        out.push('\n');
    }

    let options = if rows.is_empty() { "" } else { " [OPTIONS]" };
    let _ = writeln!(
        out,
        "{}Usage:{} {}{bin}{}{options} [ARGS]...",
        HEADER.render(),
        HEADER.render_reset(),
        LITERAL.render(),
        LITERAL.render_reset(),
    );

    if !rows.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "{}Options:{}", HEADER.render(), HEADER.render_reset());
        let width = rows.iter().map(Row::width).max().unwrap_or(0);
        for row in &rows {
            row.write(&mut out, width);
        }
    }

    out
}

/// Render `name version`
pub fn render_version(program: &ProgramInfo) -> String {
    let bin = if program.name.is_empty() {
        DEFAULT_BIN
    } else {
        program.name.as_str()
    };
    let version = program.version.trim();
    if version.is_empty() {
        format!("{bin}\n")
    } else {
        format!("{bin} {version}\n")
    }
}

struct Row<'d> {
    decl: &'d OptionDecl,
    metavar: Option<String>,
}

impl<'d> Row<'d> {
    fn new(decl: &'d OptionDecl) -> Self {
        let metavar = (!decl.is_flag()).then(|| {
            if !decl.metavar().is_empty() {
                decl.metavar().to_owned()
            } else if !decl.long().is_empty() {
                decl.long().to_ascii_uppercase()
            } else {
                "VALUE".to_owned()
            }
        });
        Self { decl, metavar }
    }

    /// Unstyled length of the name column
    fn width(&self) -> usize {
        let mut width = 2;
        if !self.decl.long().is_empty() {
            width += ", --".len() + self.decl.long().len();
        }
        if let Some(metavar) = &self.metavar {
            width += " <>".len() + metavar.chars().count();
        }
        width
    }

    fn write(&self, out: &mut String, width: usize) {
        let _ = write!(
            out,
            "  {}-{}{}",
            LITERAL.render(),
            self.decl.short(),
            LITERAL.render_reset()
        );
        if !self.decl.long().is_empty() {
            let _ = write!(
                out,
                ", {}--{}{}",
                LITERAL.render(),
                self.decl.long(),
                LITERAL.render_reset()
            );
        }
        if let Some(metavar) = &self.metavar {
            let _ = write!(
                out,
                " {}<{metavar}>{}",
                PLACEHOLDER.render(),
                PLACEHOLDER.render_reset()
            );
        }

        let mut help = self.decl.help().trim().to_owned();
        if !self.decl.default_value().is_empty() {
            if !help.is_empty() {
                help.push(' ');
            }
            let _ = write!(help, "[default: {}]", self.decl.default_value());
        }
        if help.is_empty() {
            out.push('\n');
        } else {
            let pad = width - self.width();
            let _ = writeln!(out, "{:pad$}  {help}", "");
        }
    }
}

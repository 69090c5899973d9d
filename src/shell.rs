//! Line-based interactive shell.
//!
//! Reads one command per line, applies it to the sheet and prints the result.
//! Bad input is reported and the loop keeps going; only end of input or
//! `quit` leaves it.

use std::io::{self, BufRead, Write};

use cellflow_core::Sheet;
use cellflow_engine::engine::extract_references;

use crate::error::CommandError;
use crate::format::{format_cell, format_number};

const HELP: &str = "\
Commands:
  print | p | 1                 Show every cell value
  set <index> <value> | 2 ...   Change an input cell and recalculate
  show <index>                  Show a cell's definition
  help | h | ?                  Show this help
  quit | q | exit | 3           Leave";

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Print,
    Set { index: usize, value: f64 },
    Show(usize),
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Err(CommandError::Empty);
        };
        let args: Vec<&str> = parts.collect();

        match name.to_ascii_lowercase().as_str() {
            "print" | "p" | "1" => Ok(Command::Print),
            "set" | "2" => {
                let [index, value] = args[..] else {
                    return Err(CommandError::Usage("set <index> <value>"));
                };
                Ok(Command::Set {
                    index: parse_index(index)?,
                    value: parse_value(value)?,
                })
            }
            "show" => {
                let [index] = args[..] else {
                    return Err(CommandError::Usage("show <index>"));
                };
                Ok(Command::Show(parse_index(index)?))
            }
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" | "3" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_index(text: &str) -> Result<usize, CommandError> {
    text.parse::<usize>()
        .map_err(|_| CommandError::InvalidIndex(text.to_string()))
}

fn parse_value(text: &str) -> Result<f64, CommandError> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CommandError::InvalidNumber(text.to_string())),
    }
}

/// Run the shell until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(sheet: &mut Sheet, input: R, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "cellflow: {} cells loaded. Type 'help' for commands.",
        sheet.len()
    )?;
    print_cells(sheet, out)?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => execute(sheet, command, out)?,
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
    }

    Ok(())
}

fn execute<W: Write>(sheet: &mut Sheet, command: Command, out: &mut W) -> io::Result<()> {
    match command {
        Command::Print => print_cells(sheet, out),
        Command::Set { index, value } => match sheet.set_input(index, value) {
            Ok(passes) => {
                writeln!(
                    out,
                    "Cell {} set to {} ({} passes)",
                    index,
                    format_number(value),
                    passes
                )?;
                for diagnostic in sheet.diagnostics() {
                    writeln!(out, "warning: {}", diagnostic)?;
                }
                Ok(())
            }
            Err(e) => writeln!(out, "Error: {}", e),
        },
        Command::Show(index) => match sheet.get(index) {
            Some(cell) => match cell.formula() {
                Some(formula) => {
                    let refs: Vec<String> = extract_references(formula)
                        .iter()
                        .map(|r| r.to_string())
                        .collect();
                    writeln!(
                        out,
                        "[{}] {} = {} (refs: {})",
                        index,
                        cell.to_definition(),
                        format_number(cell.value()),
                        if refs.is_empty() { "none".to_string() } else { refs.join(", ") }
                    )
                }
                None => writeln!(out, "[{}] {} (input)", index, cell.to_definition()),
            },
            None => writeln!(
                out,
                "Error: Cell index {} is out of range ({} cells)",
                index,
                sheet.len()
            ),
        },
        Command::Help => writeln!(out, "{}", HELP),
        Command::Quit => Ok(()),
    }
}

fn print_cells<W: Write>(sheet: &Sheet, out: &mut W) -> io::Result<()> {
    for cell in sheet.values() {
        writeln!(out, "{}", format_cell(&cell))?;
    }
    Ok(())
}

//! Line-oriented interactive session over the calculator form.

use crate::render::{self, OutputFormat};
use anyhow::{Result, anyhow, bail};
use hedge_calc_form::{FormField, HedgeForm};
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  set <field> <value>   update a field (value may be empty)
  show                  print inputs and the current panel
  calculate | calc      validate and calculate
  reset                 restore default inputs
  fields                list fields, defaults and help
  help                  show this message
  quit | exit           leave the session";

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(FormField, String),
    Show,
    Calculate,
    Reset,
    Fields,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim_start()));

    let command = match verb.to_ascii_lowercase().as_str() {
        "set" => {
            if rest.is_empty() {
                bail!("usage: set <field> <value>");
            }
            let (name, value) = rest
                .split_once(char::is_whitespace)
                .map_or((rest, ""), |(name, value)| (name, value.trim()));
            let field = name.parse::<FormField>()?;
            Command::Set(field, value.to_string())
        }
        "show" => Command::Show,
        "calculate" | "calc" => Command::Calculate,
        "reset" => Command::Reset,
        "fields" => Command::Fields,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(anyhow!("unknown command '{other}', type 'help' for a list")),
    };

    Ok(Some(command))
}

/// Runs commands from `input` until it is exhausted or `quit` is read.
///
/// Bad commands are reported on `output` and the session continues.
pub fn run<R: BufRead, W: Write>(
    form: &mut HedgeForm,
    input: R,
    output: &mut W,
    format: OutputFormat,
) -> Result<()> {
    writeln!(output, "Hedge calculator. Type 'help' for commands.")?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => execute(form, command, output, format)?,
            Ok(None) => {}
            Err(e) => writeln!(output, "{e}")?,
        }
        write!(output, "> ")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}

fn execute<W: Write>(
    form: &mut HedgeForm,
    command: Command,
    output: &mut W,
    format: OutputFormat,
) -> Result<()> {
    match command {
        Command::Set(field, value) => form.set(field, value),
        Command::Show => writeln!(output, "{}", render::form_summary(form, format))?,
        Command::Calculate => {
            let panel = match form.calculate() {
                Ok(result) => render::result_panel(result, format),
                Err(e) => render::error_panel(&e.to_string(), format),
            };
            writeln!(output, "{panel}")?;
        }
        Command::Reset => form.reset(),
        Command::Fields => writeln!(output, "{}", render::fields_table())?,
        Command::Help => writeln!(output, "{HELP}")?,
        Command::Quit => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hedge_calc_form::FormPhase;
    use std::io::Cursor;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("   ").unwrap(), None);
        assert_eq!(parse_command("calc").unwrap(), Some(Command::Calculate));
        assert_eq!(parse_command("EXIT").unwrap(), Some(Command::Quit));
        assert_eq!(
            parse_command("set token1_symbol  wrapped sonic ").unwrap(),
            Some(Command::Set(
                FormField::Token1Symbol,
                "wrapped sonic".to_string()
            ))
        );
        assert_eq!(
            parse_command("set lowerBound").unwrap(),
            Some(Command::Set(FormField::LowerBound, String::new()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("set").is_err());
        assert!(parse_command("set token3Price 1").is_err());
        assert!(parse_command("launch").is_err());
    }

    #[test]
    fn test_session_flow() {
        let script = "set totalLiquidity abc\ncalculate\nbogus\nset totalLiquidity 2000\ncalc\nquit\nshow\n";
        let mut form = HedgeForm::default();
        let mut output = Vec::new();

        run(&mut form, Cursor::new(script), &mut output, OutputFormat::Table).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("Error: Total Liquidity (USD) must be a number"));
        assert!(text.contains("unknown command 'bogus'"));
        assert!(text.contains("S/WETH"));
        assert!(!text.contains("State:"));
        assert_eq!(form.phase(), FormPhase::Displaying);
        assert_eq!(form.get(FormField::TotalLiquidity), "2000");
    }

    #[test]
    fn test_reset_command() {
        let mut form = HedgeForm::default();
        let mut output = Vec::new();

        run(
            &mut form,
            Cursor::new("set token2Symbol USDC\nreset\n"),
            &mut output,
            OutputFormat::Json,
        )
        .unwrap();

        assert_eq!(form.get(FormField::Token2Symbol), "WETH");
    }
}

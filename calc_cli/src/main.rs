//! # Scientific Calculator CLI
//!
//! Menu-driven console front end for calc_core. The shell owns all I/O:
//! it renders the menu, parses selections and operands, recovers from
//! malformed input, and prints either the result line or the error message
//! signaled by the operation library. No error terminates the loop; only
//! choosing "Exit" (or end of input) does.
//!
//! The loop is generic over `BufRead`/`Write` so the full interaction can be
//! driven by in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use calc_core::Operation;

const MENU: &str = "\n--- Scientific Calculator ---\n\
    1. Square Root (sqrt x)\n\
    2. Factorial (x!)\n\
    3. Natural Logarithm (ln x)\n\
    4. Power (x^y)\n\
    5. Exit\n\
    -----------------------------";

/// Read one line, trimmed. Returns `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Print `prompt` (no newline), then read and parse one value.
///
/// `Ok(None)` means the line did not parse or the input ended; the caller
/// decides which inline error to print before returning to the menu.
fn prompt_value<T, R, W>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Option<T>>
where
    T: std::str::FromStr,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", prompt)?;
    output.flush()?;
    Ok(read_line(input)?.and_then(|line| line.parse().ok()))
}

/// Read the operand(s) for menu choice 1-4 and build the operation request.
///
/// Prints the inline parse-failure message itself and returns `None` when
/// the operands are malformed, matching the one-attempt-then-menu behavior.
fn read_operation<R: BufRead, W: Write>(
    choice: i64,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Operation>> {
    let op = match choice {
        1 => match prompt_value::<f64, _, _>(input, output, "Enter a number: ")? {
            Some(value) => Operation::SquareRoot { value },
            None => {
                writeln!(output, "Error: Invalid input.")?;
                return Ok(None);
            }
        },
        2 => match prompt_value::<i64, _, _>(input, output, "Enter an integer: ")? {
            Some(value) => Operation::Factorial { value },
            None => {
                writeln!(output, "Error: Invalid input.")?;
                return Ok(None);
            }
        },
        3 => match prompt_value::<f64, _, _>(input, output, "Enter a number: ")? {
            Some(value) => Operation::NaturalLog { value },
            None => {
                writeln!(output, "Error: Invalid input.")?;
                return Ok(None);
            }
        },
        4 => {
            let base = match prompt_value::<f64, _, _>(input, output, "Enter the base: ")? {
                Some(base) => base,
                None => {
                    writeln!(output, "Error: Invalid base.")?;
                    return Ok(None);
                }
            };
            let exponent =
                match prompt_value::<f64, _, _>(input, output, "Enter the exponent: ")? {
                    Some(exponent) => exponent,
                    None => {
                        writeln!(output, "Error: Invalid exponent.")?;
                        return Ok(None);
                    }
                };
            Operation::Power { base, exponent }
        }
        _ => unreachable!("caller validated the choice"),
    };
    Ok(Some(op))
}

/// The interactive menu loop. Returns once the user exits or input ends.
fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    loop {
        writeln!(output, "{}", MENU)?;
        write!(output, "Select an operation: ")?;
        output.flush()?;

        let line = match read_line(&mut input)? {
            Some(line) => line,
            None => break,
        };
        let choice: i64 = match line.parse() {
            Ok(choice) => choice,
            Err(_) => {
                writeln!(output, "Invalid input. Please enter a number (1-5).")?;
                continue;
            }
        };

        match choice {
            1..=4 => {
                if let Some(op) = read_operation(choice, &mut input, &mut output)? {
                    match op.evaluate() {
                        Ok(value) => {
                            writeln!(output, "Result: {} is {}", op.describe(), value)?
                        }
                        Err(e) => writeln!(output, "Error: {}", e)?,
                    }
                }
            }
            5 => break,
            _ => writeln!(
                output,
                "Invalid choice. Please select a valid operation (1-5)."
            )?,
        }
    }

    writeln!(output, "Exiting calculator. Goodbye!")?;
    Ok(())
}

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock())
}

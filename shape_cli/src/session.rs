//! # Interactive Session
//!
//! Runs the menu loop over any line-based input and output. `main` wires it
//! to stdin/stdout; tests drive it with in-memory buffers.
//!
//! Each pass through the loop handles one request: pick a shape, enter its
//! parameters, pick a measurement. Any failure along the way prints exactly
//! one line and the main menu comes back. Only the "0" choice, end of input,
//! or a broken output stream end the session.

use std::io::{self, BufRead, Write};

use shape_core::shapes::{Circle, Rectangle, Shape, ShapeKind, Square, Triangle};
use shape_core::{measure, Measurement, ShapeError, ShapeResult};
use thiserror::Error;
use tracing::{debug, info};

use crate::menu::{
    calculation_menu, MainChoice, TriangleChoice, CHOICE_PROMPT, EXIT_MESSAGE, MAIN_MENU,
    TRIANGLE_MENU,
};

/// Anything that interrupts a single request.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Rejected input or parameters; reported to the user
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// The input stream closed
    #[error("end of input")]
    EndOfInput,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

type SessionResult<T> = Result<T, SessionError>;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user chose "0"
    Exited,
    /// Input ran out before the user chose to exit
    InputClosed,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    requests: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session {
            input,
            output,
            requests: 0,
        }
    }

    /// Run until the user exits or input ends. Only output failures are errors.
    pub fn run(&mut self) -> io::Result<Outcome> {
        loop {
            match self.request() {
                Ok(Some(Outcome::Exited)) => {
                    writeln!(self.output, "{EXIT_MESSAGE}")?;
                    self.output.flush()?;
                    info!(requests = self.requests, "session exited");
                    return Ok(Outcome::Exited);
                }
                Ok(Some(outcome)) => return Ok(outcome),
                Ok(None) => {}
                Err(SessionError::Shape(e)) => {
                    debug!(code = e.error_code(), "request rejected");
                    writeln!(self.output, "{e}")?;
                }
                Err(SessionError::EndOfInput) => {
                    debug!(requests = self.requests, "input closed");
                    self.output.flush()?;
                    return Ok(Outcome::InputClosed);
                }
                Err(SessionError::Io(e)) => return Err(e),
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// One pass through the main menu. `Some` ends the session.
    fn request(&mut self) -> SessionResult<Option<Outcome>> {
        self.show(MAIN_MENU)?;
        let choice = MainChoice::try_from(self.read_int(CHOICE_PROMPT)?)?;

        let shape: ShapeKind = match choice {
            MainChoice::Exit => return Ok(Some(Outcome::Exited)),
            MainChoice::Square => {
                let side = self.read_float("Enter the side of the square: ")?;
                Square::new(side)?.into()
            }
            MainChoice::Rectangle => {
                let width = self.read_float("Enter the width of the rectangle: ")?;
                let height = self.read_float("Enter the height of the rectangle: ")?;
                Rectangle::new(width, height)?.into()
            }
            MainChoice::Circle => {
                let radius = self.read_float("Enter the radius of the circle: ")?;
                Circle::new(radius)?.into()
            }
            MainChoice::Triangle => self.read_triangle()?.into(),
        };

        self.requests += 1;
        debug!(shape = shape.name(), "shape constructed");
        self.calculate(&shape)?;
        Ok(None)
    }

    fn read_triangle(&mut self) -> SessionResult<Triangle> {
        self.show(TRIANGLE_MENU)?;
        let choice = TriangleChoice::try_from(self.read_int(CHOICE_PROMPT)?)?;

        let triangle = match choice {
            TriangleChoice::Equilateral => {
                let side = self.read_float("Enter the side of the equilateral triangle: ")?;
                Triangle::equilateral(side)?
            }
            TriangleChoice::Isosceles => {
                let equal_side =
                    self.read_float("Enter the equal side of the isosceles triangle: ")?;
                let base = self.read_float("Enter the base of the isosceles triangle: ")?;
                Triangle::isosceles(equal_side, base)?
            }
            TriangleChoice::Scalene => {
                let a = self.read_float("Enter the first side of the scalene triangle: ")?;
                let b = self.read_float("Enter the second side of the scalene triangle: ")?;
                let c = self.read_float("Enter the third side of the scalene triangle: ")?;
                Triangle::scalene(a, b, c)?
            }
        };
        Ok(triangle)
    }

    fn calculate(&mut self, shape: &dyn Shape) -> SessionResult<()> {
        for line in calculation_menu(shape.perimeter_term()) {
            writeln!(self.output, "{line}")?;
        }
        let measurement = Measurement::try_from(self.read_int(CHOICE_PROMPT)?)?;
        let result = measure(shape, measurement);
        writeln!(self.output, "{result}")?;
        Ok(())
    }

    fn show(&mut self, lines: &[&str]) -> io::Result<()> {
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    /// Print a prompt and read the next line, trimmed.
    fn prompt(&mut self, prompt: &str) -> SessionResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    fn read_int(&mut self, prompt: &str) -> SessionResult<i64> {
        let line = self.prompt(prompt)?;
        Ok(parse_number(&line)?)
    }

    fn read_float(&mut self, prompt: &str) -> SessionResult<f64> {
        let line = self.prompt(prompt)?;
        Ok(parse_number(&line)?)
    }
}

fn parse_number<T: std::str::FromStr>(text: &str) -> ShapeResult<T> {
    text.parse().map_err(|_| ShapeError::malformed_input(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (Outcome, String) {
        let mut session = Session::new(Cursor::new(script.as_bytes()), Vec::new());
        let outcome = session.run().unwrap();
        let output = String::from_utf8(session.into_output()).unwrap();
        (outcome, output)
    }

    #[test]
    fn test_exit_immediately() {
        let (outcome, output) = run_script("0\n");
        assert_eq!(outcome, Outcome::Exited);
        assert!(output.starts_with("Which shape would you like to calculate?\n"));
        assert!(output.ends_with("Enter your choice: Exiting the program.\n"));
    }

    #[test]
    fn test_square_area_and_perimeter() {
        let (_, output) = run_script("1\n5\n1\n1\n5\n2\n0\n");
        assert!(output.contains("Enter the side of the square: "));
        assert!(output.contains("The area of the shape is: 25.0\n"));
        assert!(output.contains("The perimeter of the shape is: 20.0\n"));
    }

    #[test]
    fn test_rectangle() {
        let (_, output) = run_script("2\n3\n4\n1\n0\n");
        assert!(output.contains("Enter the height of the rectangle: "));
        assert!(output.contains("The area of the shape is: 12.0\n"));
    }

    #[test]
    fn test_circle_uses_circumference_wording() {
        let (_, output) = run_script("3\n2\n2\n3\n2\n1\n0\n");
        assert!(output.contains("2. Circumference\n"));
        assert!(!output.contains("2. Perimeter\n"));
        assert!(output.contains("The circumference of the circle is: 12.566"));
        assert!(output.contains("The area of the shape is: 12.566"));
    }

    #[test]
    fn test_invalid_scalene_returns_to_menu() {
        let (outcome, output) = run_script("4\n3\n1\n1\n5\n0\n");
        assert_eq!(outcome, Outcome::Exited);
        assert!(output.contains("These sides do not form a valid triangle: 1, 1, 5"));
        assert_eq!(output.matches("Which shape would you like to calculate?").count(), 2);
        assert!(!output.contains("What would you like to calculate?"));
    }

    #[test]
    fn test_triangle_variants() {
        let (_, output) = run_script("4\n2\n5\n6\n1\n4\n1\n2\n2\n0\n");
        assert!(output.contains("Select the type of triangle:"));
        assert!(output.contains("The area of the shape is: 12.0\n"));
        assert!(output.contains("The perimeter of the shape is: 6.0\n"));
    }

    #[test]
    fn test_invalid_dimension_is_reported() {
        let (_, output) = run_script("1\n-5\n0\n");
        assert!(output.contains("Invalid side: must be greater than zero (got -5)\n"));
        assert!(output.ends_with("Exiting the program.\n"));
    }

    #[test]
    fn test_invalid_menu_choices_are_not_fatal() {
        let (outcome, output) = run_script("9\n4\n7\n1\n2\n5\n0\n");
        assert_eq!(outcome, Outcome::Exited);
        // main menu 9, triangle menu 7, calculation menu 5
        assert_eq!(output.matches("Invalid choice, please try again.").count(), 3);
    }

    #[test]
    fn test_malformed_input_is_reported_once() {
        let (outcome, output) = run_script("abc\n1\nfive\n0\n");
        assert_eq!(outcome, Outcome::Exited);
        assert!(output.contains("An error occurred: expected a number, got 'abc'\n"));
        assert!(output.contains("An error occurred: expected a number, got 'five'\n"));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let (_, output) = run_script("  1 \n 5\t\n1\n0\n");
        assert!(output.contains("The area of the shape is: 25.0\n"));
    }

    #[test]
    fn test_end_of_input_closes_session() {
        let (outcome, output) = run_script("1\n5\n");
        assert_eq!(outcome, Outcome::InputClosed);
        assert!(!output.contains("Exiting the program."));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<i64>("4"), Ok(4));
        assert_eq!(parse_number::<f64>("2.5"), Ok(2.5));
        assert_eq!(
            parse_number::<i64>("2.5"),
            Err(ShapeError::malformed_input("2.5"))
        );
    }
}

//! Menu selections and the text shown for them.

use shape_core::{PerimeterTerm, ShapeError};

pub const MAIN_MENU: &[&str] = &[
    "Which shape would you like to calculate?",
    "1. Square",
    "2. Rectangle",
    "3. Circle",
    "4. Triangle",
    "0. Exit",
];

pub const TRIANGLE_MENU: &[&str] = &[
    "Select the type of triangle:",
    "1. Equilateral",
    "2. Isosceles",
    "3. Scalene",
];

pub const CHOICE_PROMPT: &str = "Enter your choice: ";

pub const EXIT_MESSAGE: &str = "Exiting the program.";

/// Lines of the calculation menu, worded for the shape's boundary term.
pub fn calculation_menu(term: PerimeterTerm) -> [String; 3] {
    [
        "What would you like to calculate?".to_string(),
        "1. Area".to_string(),
        format!("2. {}", term.as_str()),
    ]
}

/// Top-level selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Exit,
    Square,
    Rectangle,
    Circle,
    Triangle,
}

impl TryFrom<i64> for MainChoice {
    type Error = ShapeError;

    fn try_from(choice: i64) -> Result<Self, Self::Error> {
        match choice {
            0 => Ok(MainChoice::Exit),
            1 => Ok(MainChoice::Square),
            2 => Ok(MainChoice::Rectangle),
            3 => Ok(MainChoice::Circle),
            4 => Ok(MainChoice::Triangle),
            other => Err(ShapeError::invalid_menu_choice(other)),
        }
    }
}

/// Nested triangle selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleChoice {
    Equilateral,
    Isosceles,
    Scalene,
}

impl TryFrom<i64> for TriangleChoice {
    type Error = ShapeError;

    fn try_from(choice: i64) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(TriangleChoice::Equilateral),
            2 => Ok(TriangleChoice::Isosceles),
            3 => Ok(TriangleChoice::Scalene),
            other => Err(ShapeError::invalid_menu_choice(other)),
        }
    }
}

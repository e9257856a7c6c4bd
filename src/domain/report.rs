//! Result classification and the printed analysis report
//!
//! A numeric outcome is classified by sign, integrality and parity, and gets at
//! most one note. Parity is the plain `value % 2 == 0` test, so fractional values
//! such as 3.5 are reported as odd.

use std::fmt::Write;

use crate::domain::number::{format_number, to_fixed};
use crate::domain::Outcome;

/// Fallback shown when there is no outcome to analyse.
pub const MISSING_OUTCOME: &str = "Result is undefined or null, something went wrong!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
    /// Everything that is neither `> 0` nor `< 0`, NaN included.
    Zero,
}

impl Sign {
    fn of(value: f64) -> Self {
        if value > 0.0 {
            Sign::Positive
        } else if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sign::Positive => "Positif",
            Sign::Negative => "Negatif",
            Sign::Zero => "Nol",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Integer,
    /// Non-integral, including the infinities and NaN.
    Fractional,
}

impl Kind {
    fn of(value: f64) -> Self {
        if value.is_finite() && value.fract() == 0.0 {
            Kind::Integer
        } else {
            Kind::Fractional
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    fn of(value: f64) -> Self {
        if value % 2.0 == 0.0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Parity::Even => "Genap",
            Parity::Odd => "Ganjil",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Note {
    PositiveInteger,
    NegativeOrFractional,
}

impl Note {
    /// First matching rule wins; a zero integer gets no note.
    fn of(sign: Sign, kind: Kind) -> Option<Self> {
        if sign == Sign::Positive && kind == Kind::Integer {
            Some(Note::PositiveInteger)
        } else if sign == Sign::Negative || kind == Kind::Fractional {
            Some(Note::NegativeOrFractional)
        } else {
            None
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Note::PositiveInteger => "Angka ini Positif dan Integer.",
            Note::NegativeOrFractional => "Angka ini Negatif atau Desimal.",
        }
    }
}

/// Classification of a numeric outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    pub value: f64,
    pub sign: Sign,
    pub kind: Kind,
    pub parity: Parity,
    pub note: Option<Note>,
}

impl Analysis {
    pub fn of(value: f64) -> Self {
        let sign = Sign::of(value);
        let kind = Kind::of(value);
        Self {
            value,
            sign,
            kind,
            parity: Parity::of(value),
            note: Note::of(sign, kind),
        }
    }
}

/// What gets printed after a calculation.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Numeric(Analysis),
    Failure(String),
    Missing,
}

impl Report {
    pub fn new(outcome: Option<&Outcome>) -> Self {
        match outcome {
            Some(Outcome::Value(v)) => Report::Numeric(Analysis::of(*v)),
            Some(Outcome::Failure(message)) => Report::Failure(message.clone()),
            None => Report::Missing,
        }
    }

    /// Multi-line report; fractional values get `fraction_digits` decimals.
    pub fn render(&self, fraction_digits: usize) -> String {
        let mut out = String::new();
        // fmt::Write into a String is infallible
        let _ = self.write_to(&mut out, fraction_digits);
        out
    }

    fn write_to(&self, out: &mut String, fraction_digits: usize) -> std::fmt::Result {
        let headline = match self {
            Report::Numeric(analysis) => format_number(analysis.value),
            Report::Failure(message) => message.clone(),
            Report::Missing => "-".to_string(),
        };
        writeln!(out, "Hasil Akhir: {headline}")?;
        writeln!(out)?;
        writeln!(out, "--- Analisis Hasil ---")?;

        match self {
            Report::Numeric(a) => {
                writeln!(out, "Tipe data hasil: number")?;
                match a.kind {
                    Kind::Integer => writeln!(out, "Nilai: {}. (Integer)", a.sign.label())?,
                    Kind::Fractional => writeln!(
                        out,
                        "Nilai: {}. (Floating-Point / Desimal: {})",
                        a.sign.label(),
                        to_fixed(a.value, fraction_digits)
                    )?,
                }
                writeln!(out, "Paritas: {}", a.parity.label())?;
                if let Some(note) = a.note {
                    writeln!(out, "* Catatan: {}", note.text())?;
                }
            }
            Report::Failure(message) => {
                writeln!(out, "Tipe data hasil: string")?;
                writeln!(out, "Pesan: {message}")?;
            }
            Report::Missing => {
                writeln!(out, "Tipe data hasil: undefined")?;
                writeln!(out, "Pesan Default (Nullish Coalescing): {MISSING_OUTCOME}")?;
            }
        }
        Ok(())
    }
}

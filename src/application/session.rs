//! The calculator session: read, compute, report, repeat
//!
//! One iteration prompts for the first operand, the operator and the second
//! operand, prints the analysis report and asks whether to go on. Nothing is
//! carried from one iteration to the next except the running count.

use tracing::{debug, info, instrument};

use crate::application::error::IoResultExt;
use crate::application::input::{request_continue, request_number, request_operator, Decision};
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{Outcome, Report};
use crate::infrastructure::Console;

/// Texts shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompts {
    pub first_operand: &'static str,
    pub operator: &'static str,
    pub second_operand: &'static str,
    pub again: &'static str,
    pub farewell: &'static str,
}

impl Default for Prompts {
    fn default() -> Self {
        Self {
            first_operand: "Masukkan angka pertama:",
            operator: "Masukkan operator (+, -, *, /, %, **):",
            second_operand: "Masukkan angka kedua:",
            again: "Apakah Anda ingin melakukan perhitungan lagi? (ketik 'yes' atau 'no')",
            farewell: "Terima kasih telah menggunakan Kalkulator JS!",
        }
    }
}

/// What a finished session did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub calculations: usize,
}

/// Interactive calculator bound to a console.
pub struct CalculatorSession<C> {
    console: C,
    settings: Settings,
    prompts: Prompts,
}

impl<C: Console> CalculatorSession<C> {
    pub fn new(console: C, settings: Settings) -> Self {
        Self {
            console,
            settings,
            prompts: Prompts::default(),
        }
    }

    /// Run until the user answers `no`.
    ///
    /// Fails only if the console breaks or its input is exhausted.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> ApplicationResult<SessionSummary> {
        let mut summary = SessionSummary::default();
        loop {
            self.calculate_once()?;
            summary.calculations += 1;

            if request_continue(&mut self.console, self.prompts.again)? == Decision::Stop {
                self.console
                    .say(self.prompts.farewell)
                    .io_context("print farewell")?;
                info!("session finished after {} calculation(s)", summary.calculations);
                return Ok(summary);
            }
        }
    }

    /// Read operands and operator, print the report and return the outcome.
    pub fn calculate_once(&mut self) -> ApplicationResult<Outcome> {
        let a = request_number(&mut self.console, self.prompts.first_operand)?;
        let op = request_operator(&mut self.console, self.prompts.operator)?;
        let b = request_number(&mut self.console, self.prompts.second_operand)?;

        let outcome = op.apply(a, b);
        debug!("{} {} {} = {:?}", a, op, b, outcome);
        self.print_report(Some(&outcome))?;
        Ok(outcome)
    }

    /// Print the analysis of `outcome`, twice when `repeat_report` is set.
    pub fn print_report(&mut self, outcome: Option<&Outcome>) -> ApplicationResult<()> {
        let rendered = Report::new(outcome).render(self.settings.fraction_digits);
        let copies = if self.settings.repeat_report { 2 } else { 1 };
        for _ in 0..copies {
            self.console.say(&rendered).io_context("print report")?;
        }
        Ok(())
    }

    pub fn into_console(self) -> C {
        self.console
    }
}

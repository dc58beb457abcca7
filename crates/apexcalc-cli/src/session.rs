//! A calculator engine bound to a keypad and an output style.

use std::io::Write;

use apexcalc_core::{CalculatorEngine, Config, CoreError, Event, Input, Mode};
use tracing::{trace, warn};

/// How a session reports its state after each batch of inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Render {
    pub json: bool,
    /// Print every event as a JSON line as it happens.
    pub events: bool,
    pub show_history: bool,
}

pub struct Session {
    engine: CalculatorEngine,
    render: Render,
}

impl Session {
    pub fn new(config: &Config, render: Render) -> Self {
        Self {
            engine: CalculatorEngine::with_settings(config.engine_settings()),
            render,
        }
    }

    /// Apply one input, honoring the keypad of the current mode.
    ///
    /// Scientific inputs are refused on the basic keypad and produce no
    /// event.
    pub fn press(&mut self, input: Input, out: &mut impl Write) -> Result<Option<Event>, CoreError> {
        if self.engine.mode() == Mode::Basic && input.is_scientific() {
            warn!(%input, "not on the basic keypad, ignored");
            return Ok(None);
        }
        trace!(%input, "press");
        let event = self.engine.apply(input);
        if self.render.events {
            if let Some(event) = &event {
                writeln!(out, "{}", serde_json::to_string(event)?)?;
            }
        }
        Ok(event)
    }

    pub fn press_all(
        &mut self,
        inputs: impl IntoIterator<Item = Input>,
        out: &mut impl Write,
    ) -> Result<(), CoreError> {
        for input in inputs {
            self.press(input, out)?;
        }
        Ok(())
    }

    /// Print the current state: a JSON snapshot, or the history label
    /// followed by the display.
    pub fn render(&self, out: &mut impl Write) -> Result<(), CoreError> {
        if self.render.json {
            writeln!(out, "{}", serde_json::to_string(&self.engine.snapshot())?)?;
            return Ok(());
        }
        if self.render.show_history {
            if let Some(history) = self.engine.history() {
                writeln!(out, "{history}")?;
            }
        }
        writeln!(out, "{}", self.engine.display())?;
        Ok(())
    }

    pub fn print_snapshot(&self, out: &mut impl Write) -> Result<(), CoreError> {
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&self.engine.snapshot())?
        )?;
        Ok(())
    }
}

// std imports
use std::io::{self, IsTerminal, Write};

// local imports
use crate::{
    error::Result,
    printer::Printer,
    settings::Settings,
    template::{Login, Renderer},
    theme::Theme,
    timestamp::{Clock, LocalClock},
};

// ---

/// Console printer and result renderer built from the same settings.
pub struct Reporter<C = LocalClock> {
    printer: Printer<C>,
    renderer: Renderer<C>,
}

impl Reporter {
    /// Builds a reporter for diagnostics going to standard error.
    pub fn new(settings: &Settings) -> Self {
        Self::with_theme(settings, Theme::with_colors(settings.color.enabled(io::stderr().is_terminal())))
    }

    pub fn with_theme(settings: &Settings, theme: Theme) -> Self {
        Self {
            printer: Printer::new(settings.verbosity).with_theme(theme),
            renderer: Renderer::new(settings.template()),
        }
    }
}

impl<C: Clock> Reporter<C> {
    pub fn with_clock<C2: Clock + Clone>(self, clock: C2) -> Reporter<C2> {
        Reporter {
            printer: self.printer.with_clock(clock.clone()),
            renderer: self.renderer.with_clock(clock),
        }
    }

    pub fn printer(&self) -> &Printer<C> {
        &self.printer
    }

    pub fn renderer(&self) -> &Renderer<C> {
        &self.renderer
    }

    /// Writes the successful-login line to `stream`.
    ///
    /// On failure nothing is written to `stream`, a single error line is
    /// printed to `diagnostics` and the error is returned.
    #[track_caller]
    pub fn log_successful_login<D, W>(&self, diagnostics: &mut D, stream: &mut W, login: &Login<'_>) -> Result<()>
    where
        D: Write + ?Sized,
        W: Write + ?Sized,
    {
        self.report(diagnostics, self.renderer.render_successful_login(stream, login))
    }

    /// Prints one error line for a failed `result` and passes it through unchanged.
    #[track_caller]
    fn report<T, D>(&self, diagnostics: &mut D, result: Result<T>) -> Result<T>
    where
        D: Write + ?Sized,
    {
        if let Err(err) = &result {
            self.printer.error(diagnostics, format_args!("{}", err));
        }
        result
    }
}

#[cfg(test)]
mod tests;

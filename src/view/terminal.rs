//! Terminal rendering of the view model.
//!
//! # Output Format
//!
//! ```text
//! 🔗 Short URL
//!   http://127.0.0.1:8000/promo
//!   Open: http://127.0.0.1:8000/promo
//!
//! 📊 Analytics
//!   🔑 Code      promo
//!   👁 Clicks    0
//!   🕒 Created   1/15/2024, 2:30:00 PM
//! ```

use std::io::{self, Write};
use std::sync::Mutex;

use colored::*;

use super::{ANALYTICS_LOADING_TEXT, AnalyticsPanel, AnalyticsSummary, Notice, ResultCard, View};

/// [`View`] writing coloured text to any writer.
pub struct TerminalView<W: Write + Send> {
    out: Mutex<W>,
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_with(&self, render: impl FnOnce(&mut W) -> io::Result<()>) {
        let mut out = match self.out.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = render(&mut *out).and_then(|_| out.flush()) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

fn write_summary(out: &mut impl Write, summary: &AnalyticsSummary) -> io::Result<()> {
    writeln!(out, "{}", "📊 Analytics".bright_blue().bold())?;
    writeln!(out, "  {:<10} {}", "🔑 Code", summary.short_code.bright_yellow())?;
    writeln!(
        out,
        "  {:<10} {}",
        "👁 Clicks",
        summary.clicks.to_string().bright_white().bold()
    )?;
    writeln!(out, "  {:<10} {}", "🕒 Created", summary.created_at)?;
    if let Some(original_url) = &summary.original_url {
        writeln!(out, "  {:<10} {}", "🌐 Target", original_url.bright_black())?;
    }
    Ok(())
}

impl<W: Write + Send> View for TerminalView<W> {
    fn alert(&self, notice: &Notice) {
        self.write_with(|out| match notice {
            Notice::Success(message) => {
                writeln!(out, "{}", format!("✅ {}", message).green().bold())
            }
            Notice::Error(message) => writeln!(out, "{}", format!("❌ {}", message).red().bold()),
        });
    }

    fn show_result(&self, card: &ResultCard) {
        self.write_with(|out| {
            writeln!(out)?;
            writeln!(out, "{}", "🔗 Short URL".bright_blue().bold())?;
            writeln!(out, "  {}", card.link_text.bright_yellow().bold())?;
            writeln!(out, "  Open: {}", card.open_href.cyan())?;
            writeln!(out)
        });
    }

    fn render_analytics(&self, panel: &AnalyticsPanel) {
        self.write_with(|out| match panel {
            AnalyticsPanel::Ready(summary) => write_summary(out, summary),
            AnalyticsPanel::Loading => writeln!(out, "{}", ANALYTICS_LOADING_TEXT.bright_black()),
            failed => writeln!(out, "{}", failed.placeholder().unwrap_or_default().red()),
        });
    }
}

//! Text rendering for the command surface.
//!
//! Pure string builders kept free of transport concerns so replies are
//! testable without a running server.

use vigil_service::{ActivityStats, CurrentStatus};

/// Stats windows the surface accepts, in hours.
///
/// The query service itself takes any positive window; this restriction
/// belongs to the command surface alone.
pub const ALLOWED_WINDOWS: [u32; 3] = [24, 48, 72];

#[must_use]
pub fn stats_usage() -> String {
    "Usage: /stats/24, /stats/48 or /stats/72".to_string()
}

/// A stats window validated against [`ALLOWED_WINDOWS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsWindow(u32);

impl StatsWindow {
    /// # Errors
    /// Returns the usage line when `hours` is not a whitelisted window.
    pub fn parse(hours: u32) -> Result<Self, String> {
        if ALLOWED_WINDOWS.contains(&hours) {
            Ok(Self(hours))
        } else {
            Err(stats_usage())
        }
    }

    #[must_use]
    pub const fn hours(self) -> u32 {
        self.0
    }
}

/// Render the `/status` reply.
#[must_use]
pub fn render_status(name: &str, status: &CurrentStatus) -> String {
    if status.is_online() {
        if let Some(since) = status.since {
            return format!("{name} is online (since {} UTC)", since.format("%H:%M"));
        }
    }

    match status.last_seen {
        Some(last_seen) => format!(
            "{name} is offline\nLast seen: {} UTC",
            last_seen.format("%H:%M")
        ),
        None => format!("{name} is offline"),
    }
}

/// Render the `/stats` reply: one "HH:MM – HH:MM" line per session plus
/// the total, or a placeholder when the window is empty.
#[must_use]
pub fn render_stats(name: &str, stats: &ActivityStats) -> String {
    let mut message = format!(
        "Activity for {name} in the last {} hours\n\n",
        stats.window_hours
    );

    if stats.is_empty() {
        message.push_str("No activity in this period");
    } else {
        for session in &stats.sessions {
            message.push_str(&format!(
                "{} – {}\n",
                session.started_at.format("%H:%M"),
                session.ended_at.format("%H:%M")
            ));
        }
        message.push_str(&format!("\nTotal online: {} min", stats.total_minutes));
    }

    message
}

/// Render the `/help` reply.
#[must_use]
pub fn render_help() -> String {
    "Available commands:\n\n\
     /status - current presence of the tracked identity\n\
     /stats/24 - activity for the last 24 hours\n\
     /stats/48 - activity for the last 48 hours\n\
     /stats/72 - activity for the last 72 hours\n\
     /help - show this overview"
        .to_string()
}

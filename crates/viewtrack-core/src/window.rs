//! Named lookback windows for reports.
//!
//! The dedup window used when recording is a separate fixed constant
//! (`recorder::DEDUP_WINDOW_SECS`); only reports pick a window by name.

/// Rolling lookback period selectable on reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportWindow {
    LastDay,
    LastWeek,
    LastMonth,
    LastYear,
}

impl ReportWindow {
    /// Canonical name accepted by `from_name` and used in config.
    pub fn as_str(self) -> &'static str {
        match self {
            ReportWindow::LastDay => "1day",
            ReportWindow::LastWeek => "7days",
            ReportWindow::LastMonth => "1month",
            ReportWindow::LastYear => "1year",
        }
    }

    /// Human-readable label for report output.
    pub fn label(self) -> &'static str {
        match self {
            ReportWindow::LastDay => "1 day",
            ReportWindow::LastWeek => "7 days",
            ReportWindow::LastMonth => "1 month",
            ReportWindow::LastYear => "1 year",
        }
    }

    /// Parse a window name. Unrecognized names fall back to `LastDay`
    /// rather than failing; the report page always renders something.
    pub fn from_name(s: &str) -> Self {
        match s {
            "1day" => ReportWindow::LastDay,
            "7days" => ReportWindow::LastWeek,
            "1month" => ReportWindow::LastMonth,
            "1year" => ReportWindow::LastYear,
            _ => ReportWindow::LastDay,
        }
    }

    /// Window length in hours.
    pub fn hours(self) -> i64 {
        match self {
            ReportWindow::LastDay => 24,
            ReportWindow::LastWeek => 168,
            ReportWindow::LastMonth => 720,
            ReportWindow::LastYear => 8760,
        }
    }

    /// Window length in seconds (timestamps are Unix seconds).
    pub fn secs(self) -> i64 {
        self.hours() * 3600
    }
}

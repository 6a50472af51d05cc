//! Formatting helpers for presenting an exposure.

use i18n_embed::fluent::FluentLanguageLoader;
use time::format_description::{self, OwnedFormatItem};
use time::macros::format_description;
use time::OffsetDateTime;

use super::error::FormatError;
use crate::i18n::fl;

/// Rendered in place of a date or time that cannot be formatted.
pub const PLACEHOLDER: &str = "—";

/// `DD.MM.YY`
pub const DEFAULT_DATE_FORMAT: &str = "[day].[month].[year repr:last_two]";
/// `HH:mm`
pub const DEFAULT_TIME_FORMAT: &str = "[hour]:[minute]";

/// Date and time layouts used in the exposure sentence.
#[derive(Debug, Clone)]
pub struct MessageFormat {
    date: OwnedFormatItem,
    time: OwnedFormatItem,
}

impl MessageFormat {
    pub fn new(date_fmt: &str, time_fmt: &str) -> Result<Self, FormatError> {
        Ok(Self {
            date: parse_description("date", date_fmt)?,
            time: parse_description("time", time_fmt)?,
        })
    }

    pub fn date(&self, at: OffsetDateTime) -> String {
        at.format(&self.date)
            .unwrap_or_else(|_| PLACEHOLDER.to_string())
    }

    pub fn time(&self, at: OffsetDateTime) -> String {
        at.format(&self.time)
            .unwrap_or_else(|_| PLACEHOLDER.to_string())
    }
}

impl Default for MessageFormat {
    fn default() -> Self {
        Self {
            date: format_description!("[day].[month].[year repr:last_two]").into(),
            time: format_description!("[hour]:[minute]").into(),
        }
    }
}

fn parse_description(field: &'static str, raw: &str) -> Result<OwnedFormatItem, FormatError> {
    format_description::parse_owned::<2>(raw).map_err(|err| FormatError::InvalidDescription {
        field,
        reason: err.to_string(),
    })
}

/// Localized copy for the exposure instructions screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExposureStrings {
    pub title: String,
    /// Lead-in placed directly before the place name (may end mid-word, e.g. a Hebrew prefix).
    pub we_understand: String,
    pub in_date: String,
    pub from_hour: String,
    pub wrong: String,
    pub keep_safe: String,
    pub go_into_isolation: String,
    pub report_isolation: String,
    pub all_instructions: String,
    pub report_site: String,
    /// Tooltip for a call-to-action whose link is not configured.
    pub link_unavailable: String,
}

impl ExposureStrings {
    pub fn from_loader(loader: &FluentLanguageLoader) -> Self {
        Self {
            title: fl!(loader, "exposure-title"),
            we_understand: fl!(loader, "exposure-we-understand"),
            in_date: fl!(loader, "exposure-in-date"),
            from_hour: fl!(loader, "exposure-from-hour"),
            wrong: fl!(loader, "exposure-wrong"),
            keep_safe: fl!(loader, "exposure-keep-safe"),
            go_into_isolation: fl!(loader, "exposure-go-into-isolation"),
            report_isolation: fl!(loader, "exposure-report-isolation"),
            all_instructions: fl!(loader, "exposure-all-instructions"),
            report_site: fl!(loader, "exposure-report-site"),
            link_unavailable: fl!(loader, "exposure-link-unavailable"),
        }
    }
}

/// Compose the "were you at {place} on {date} from {time}?" sentence.
///
/// `from_time` is expected in the viewer's local offset already. `None`
/// renders the placeholder for both date and time.
pub fn format_exposure_message(
    strings: &ExposureStrings,
    place: &str,
    from_time: Option<OffsetDateTime>,
    format: &MessageFormat,
) -> String {
    let (date, time) = match from_time {
        Some(at) => (format.date(at), format.time(at)),
        None => (PLACEHOLDER.to_string(), PLACEHOLDER.to_string()),
    };

    format!(
        "{}{place} {} {date} {} {time}?",
        strings.we_understand, strings.in_date, strings.from_hour
    )
}

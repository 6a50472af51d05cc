//! External call-to-action links and the actions bound to them.
//!
//! Lookup policy for a purpose/locale pair: the resolved locale first, then
//! [`FALLBACK_LOCALE`]. When neither has a URL the action is suppressed and
//! a warning is logged; nothing is surfaced to the user.
//!
//! Opening a URL is fire-and-forget. [`dispatch`] hands back a detached
//! future that the caller spawns; a platform refusal is logged inside that
//! future and never reaches the view.

use std::collections::BTreeMap;
use std::fmt;

use futures::future::{FutureExt, LocalBoxFuture};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::{LinkError, OpenError};
use super::locale::FALLBACK_LOCALE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Purpose {
    /// Isolation guidance published by the health ministry.
    Instructions,
    /// Form for reporting that the user went into isolation.
    Report,
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instructions => f.write_str("further-instructions"),
            Self::Report => f.write_str("report-form"),
        }
    }
}

/// Locale → URL maps for each call-to-action.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalUrls {
    #[serde(default)]
    pub further_instructions: BTreeMap<String, String>,
    #[serde(default)]
    pub report_form: BTreeMap<String, String>,
}

impl ExternalUrls {
    fn by_locale(&self, purpose: Purpose) -> &BTreeMap<String, String> {
        match purpose {
            Purpose::Instructions => &self.further_instructions,
            Purpose::Report => &self.report_form,
        }
    }

    pub fn url_for(&self, purpose: Purpose, locale: &str) -> Result<&str, LinkError> {
        let urls = self.by_locale(purpose);
        [locale, FALLBACK_LOCALE]
            .into_iter()
            .filter_map(|code| urls.get(code))
            .map(|url| url.trim())
            .find(|url| !url.is_empty())
            .ok_or_else(|| LinkError::MissingUrl {
                purpose,
                locale: locale.to_string(),
            })
    }
}

/// Host capability to hand a URL to an external handler (browser, OS).
pub trait UrlOpener {
    fn open(&self, url: String) -> LocalBoxFuture<'static, Result<(), OpenError>>;
}

/// What the user can do on the exposure instructions screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExposureAction {
    /// "This wasn't me": discard the exposure.
    Dismiss,
    Open(Purpose),
}

/// Route an action.
///
/// `Dismiss` calls `dismiss` once and returns `None`. `Open` returns the
/// detached open request, or `None` when no URL is configured.
pub fn dispatch<O, F>(
    action: ExposureAction,
    urls: &ExternalUrls,
    locale: &str,
    opener: &O,
    dismiss: F,
) -> Option<LocalBoxFuture<'static, ()>>
where
    O: UrlOpener + ?Sized,
    F: FnOnce(),
{
    match action {
        ExposureAction::Dismiss => {
            dismiss();
            None
        }
        ExposureAction::Open(purpose) => match urls.url_for(purpose, locale) {
            Ok(url) => {
                debug!(%purpose, locale, url, "opening external link");
                let request = opener.open(url.to_string());
                Some(
                    async move {
                        if let Err(err) = request.await {
                            warn!(%purpose, "external link not opened: {err}");
                        }
                    }
                    .boxed_local(),
                )
            }
            Err(err) => {
                warn!("{err}");
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use futures::executor::block_on;

    use super::*;

    #[derive(Default, Clone)]
    struct RecordingOpener {
        opened: Rc<RefCell<Vec<String>>>,
        refuse: bool,
    }

    impl UrlOpener for RecordingOpener {
        fn open(&self, url: String) -> LocalBoxFuture<'static, Result<(), OpenError>> {
            self.opened.borrow_mut().push(url.clone());
            let refuse = self.refuse;
            async move {
                if refuse {
                    Err(OpenError::Rejected {
                        url,
                        reason: "no handler".into(),
                    })
                } else {
                    Ok(())
                }
            }
            .boxed_local()
        }
    }

    fn urls() -> ExternalUrls {
        let mut urls = ExternalUrls::default();
        for (code, url) in [("he", "https://example.org/he/info"), ("en", "https://example.org/en/info")] {
            urls.further_instructions.insert(code.into(), url.into());
        }
        urls.report_form
            .insert("he".into(), "https://example.org/he/report".into());
        urls
    }

    #[test]
    fn url_for_prefers_requested_locale() {
        let urls = urls();
        assert_eq!(
            urls.url_for(Purpose::Instructions, "en"),
            Ok("https://example.org/en/info")
        );
    }

    #[test]
    fn url_for_falls_back_to_hebrew() {
        let urls = urls();
        assert_eq!(
            urls.url_for(Purpose::Report, "en"),
            Ok("https://example.org/he/report")
        );
    }

    #[test]
    fn url_for_reports_missing_entries() {
        let mut urls = urls();
        urls.report_form.clear();
        urls.report_form.insert("en".into(), "   ".into());
        assert_eq!(
            urls.url_for(Purpose::Report, "en"),
            Err(LinkError::MissingUrl {
                purpose: Purpose::Report,
                locale: "en".into()
            })
        );
    }

    #[test]
    fn dismiss_calls_callback_once_and_opens_nothing() {
        let opener = RecordingOpener::default();
        let calls = Cell::new(0);
        let task = dispatch(ExposureAction::Dismiss, &urls(), "en", &opener, || {
            calls.set(calls.get() + 1)
        });
        assert!(task.is_none());
        assert_eq!(calls.get(), 1);
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn open_requests_exactly_one_url() {
        let opener = RecordingOpener::default();
        let calls = Cell::new(0);
        let task = dispatch(
            ExposureAction::Open(Purpose::Instructions),
            &urls(),
            "en",
            &opener,
            || calls.set(calls.get() + 1),
        )
        .expect("instructions URL is configured");
        block_on(task);
        assert_eq!(calls.get(), 0);
        assert_eq!(*opener.opened.borrow(), vec!["https://example.org/en/info"]);
    }

    #[test]
    fn refused_open_is_swallowed() {
        let opener = RecordingOpener {
            refuse: true,
            ..Default::default()
        };
        let task = dispatch(ExposureAction::Open(Purpose::Report), &urls(), "he", &opener, || {})
            .expect("report URL is configured");
        block_on(task);
        assert_eq!(*opener.opened.borrow(), vec!["https://example.org/he/report"]);
    }

    #[test]
    fn missing_url_produces_no_request() {
        let opener = RecordingOpener::default();
        let task = dispatch(
            ExposureAction::Open(Purpose::Report),
            &ExternalUrls::default(),
            "en",
            &opener,
            || {},
        );
        assert!(task.is_none());
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let raw = r#"{ "furtherInstructions": { "he": "a" }, "reportForm": { "he": "b" } }"#;
        let urls: ExternalUrls = serde_json::from_str(raw).unwrap();
        assert_eq!(urls.url_for(Purpose::Instructions, "he"), Ok("a"));
        assert_eq!(urls.url_for(Purpose::Report, "ru"), Ok("b"));
    }
}

use dioxus::prelude::*;

use crate::core::exposure::Exposure;
use crate::core::format::{format_exposure_message, ExposureStrings, MessageFormat};
use crate::core::links::{self, ExposureAction, ExternalUrls, Purpose};
use crate::core::locale::{self, LocaleCatalog, TextDirection};
use crate::core::platform::{self, SystemUrlOpener};

const ISOLATION_ICON: Asset = asset!("/assets/icons/isolation.svg");
const REPORT_ICON: Asset = asset!("/assets/icons/report.svg");

/// Exposure details plus the two calls to action (isolation instructions
/// and the isolation report form).
///
/// Everything is supplied by the caller; the view keeps no state of its own.
/// Link buttons whose URL is missing for both the resolved and the fallback
/// locale render disabled.
#[component]
pub fn ExposureInstructions(
    direction: TextDirection,
    strings: ExposureStrings,
    locale: String,
    languages: LocaleCatalog,
    external_urls: ExternalUrls,
    exposure: Exposure,
    on_dismiss: EventHandler<()>,
) -> Element {
    let relevant_locale = locale::resolve(&locale, &languages).to_string();

    let from_time = exposure.starts_at_local(platform::offset_at);
    let message = format_exposure_message(
        &strings,
        &exposure.place,
        from_time,
        &MessageFormat::default(),
    );

    let instructions_ready = external_urls
        .url_for(Purpose::Instructions, &relevant_locale)
        .is_ok();
    let report_ready = external_urls
        .url_for(Purpose::Report, &relevant_locale)
        .is_ok();

    let run = move |action: ExposureAction| {
        let task = links::dispatch(
            action,
            &external_urls,
            &relevant_locale,
            &SystemUrlOpener,
            || on_dismiss.call(()),
        );
        if let Some(task) = task {
            spawn(task);
        }
    };
    let on_instructions = {
        let run = run.clone();
        move |_: MouseEvent| run(ExposureAction::Open(Purpose::Instructions))
    };
    let on_report = {
        let run = run.clone();
        move |_: MouseEvent| run(ExposureAction::Open(Purpose::Report))
    };

    rsx! {
        section { class: "page page-exposure", dir: direction.as_attr(),
            div { class: "exposure__summary",
                h1 { class: "exposure__title", "{strings.title}" }
                p { class: "exposure__message", "{message}" }
                button {
                    r#type: "button",
                    class: "exposure__wrong",
                    onclick: move |_| run(ExposureAction::Dismiss),
                    "{strings.wrong}"
                }
            }

            p { class: "exposure__keep-safe",
                strong { "{strings.keep_safe}" }
            }

            ActionRow {
                purpose: Purpose::Instructions,
                text: strings.go_into_isolation.clone(),
                button_text: strings.all_instructions.clone(),
                direction,
                enabled: instructions_ready,
                hint: strings.link_unavailable.clone(),
                onpress: on_instructions,
            }
            ActionRow {
                purpose: Purpose::Report,
                text: strings.report_isolation.clone(),
                button_text: strings.report_site.clone(),
                direction,
                enabled: report_ready,
                hint: strings.link_unavailable.clone(),
                onpress: on_report,
            }
        }
    }
}

#[component]
fn ActionRow(
    purpose: Purpose,
    text: String,
    button_text: String,
    direction: TextDirection,
    enabled: bool,
    hint: String,
    onpress: EventHandler<MouseEvent>,
) -> Element {
    let icon = match purpose {
        Purpose::Instructions => ISOLATION_ICON,
        Purpose::Report => REPORT_ICON,
    };
    let hint = if enabled { String::new() } else { hint };
    let row_class = if direction.is_rtl() {
        "exposure-action exposure-action--rtl"
    } else {
        "exposure-action"
    };

    rsx! {
        div { class: row_class,
            img { class: "exposure-action__icon", src: icon, alt: "", width: "22", height: "35" }
            span { class: "exposure-action__text", "{text}" }
            button {
                r#type: "button",
                class: "button button--primary exposure-action__button",
                disabled: !enabled,
                title: "{hint}",
                onclick: move |evt| onpress.call(evt),
                "{button_text}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n;
    use time::macros::datetime;

    #[component]
    fn Harness(urls: ExternalUrls) -> Element {
        let catalog = crate::core::config::LocaleData::embedded()
            .expect("embedded locale data")
            .languages;
        rsx! {
            ExposureInstructions {
                direction: TextDirection::for_locale("en"),
                strings: ExposureStrings::from_loader(&i18n::loader_for("en")),
                locale: "en".to_string(),
                languages: catalog,
                external_urls: urls,
                exposure: Exposure::at("Cafe X", datetime!(2021-03-15 14:30 UTC)),
                on_dismiss: |_| {},
            }
        }
    }

    fn render(urls: ExternalUrls) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { urls });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_title_place_and_actions() {
        let mut urls = ExternalUrls::default();
        urls.further_instructions
            .insert("he".into(), "https://example.org/info".into());
        urls.report_form
            .insert("en".into(), "https://example.org/report".into());

        let html = render(urls);
        assert!(html.contains("Exposure to a confirmed patient was found"));
        assert!(html.contains("According to our information, you were at Cafe X on"));
        assert!(html.contains("dir=\"ltr\""));
        assert!(html.contains("exposure__wrong"));
        assert!(!html.contains("This link is currently unavailable"));
    }

    #[test]
    fn missing_link_disables_its_button() {
        let mut urls = ExternalUrls::default();
        urls.report_form
            .insert("he".into(), "https://example.org/report".into());

        let html = render(urls);
        assert!(html.contains("disabled"));
        assert!(html.contains("This link is currently unavailable"));
    }
}

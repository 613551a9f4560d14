//! DOM regions and the message dispatcher.

use std::rc::Rc;

use jobpage_core::{update, AppState, Effect, Msg};
use page_logging::{page_debug, page_error};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement};

use crate::{dom, socket};

/// The regions this page writes to, resolved once at boot.
///
/// Every region is independently optional: a page variant without one
/// simply never renders the feature that targets it.
pub struct Page {
    document: Document,
    alerts: Option<Element>,
    subscription_list: Option<Element>,
    summary_host: Option<Element>,
    job: Option<JobView>,
}

/// The two children the job view writes to, inside `.job-container`.
struct JobView {
    messages: Element,
    progress_bar: HtmlElement,
}

impl Page {
    /// Resolves the page's DOM contract: `.alerts-container`,
    /// `.subscriptions ul` (plus its nearest `div` ancestor for the count
    /// summary), and `.job-container` with `.messages` and `.progress-bar`.
    pub fn locate(document: Document) -> Self {
        let alerts = dom::query(&document, ".alerts-container");

        let subscription_list: Option<Element> = dom::query(&document, ".subscriptions ul");
        let summary_host = subscription_list.as_ref().and_then(|list| {
            match list.closest("div") {
                Ok(Some(host)) => Some(host),
                Ok(None) => {
                    page_error!("unable to find container div of subscription list");
                    None
                }
                Err(err) => {
                    page_error!("closest(div) failed on subscription list: {err:?}");
                    None
                }
            }
        });

        let job = dom::query::<Element>(&document, ".job-container").and_then(|container| {
            let messages = dom::query_in::<Element>(&container, ".messages");
            let progress_bar = dom::query_in::<HtmlElement>(&container, ".progress-bar");
            match (messages, progress_bar) {
                (Some(messages), Some(progress_bar)) => Some(JobView {
                    messages,
                    progress_bar,
                }),
                _ => {
                    page_error!("job container is missing its children; skipping job view");
                    None
                }
            }
        });

        Self {
            document,
            alerts,
            subscription_list,
            summary_host,
            job,
        }
    }

    pub fn has_job_view(&self) -> bool {
        self.job.is_some()
    }

    /// Applies one DOM effect. Failures here mean the browser refused a
    /// write; they are logged and the page carries on.
    fn apply(&self, effect: &Effect) {
        let outcome = match effect {
            Effect::ShowAlert { text } => self.show_alert(text),
            Effect::AppendSubscription { name } => self.append_subscription(name),
            Effect::ShowSubscriptionSummary { text } => self.show_summary(text),
            Effect::AppendJobLine { text } => self.append_job_line(text),
            Effect::SetProgressWidth { width } => self.set_progress_width(width),
            Effect::ConnectJobStream { .. } => Ok(()),
        };
        if let Err(err) = outcome {
            page_error!("dom write failed for {effect:?}: {err:?}");
        }
    }

    fn show_alert(&self, text: &str) -> Result<(), JsValue> {
        let Some(alerts) = &self.alerts else {
            page_error!("unable to find alerts container");
            return Ok(());
        };
        let alert = dom::text_element(&self.document, "div", text)?;
        alert.class_list().add_2("alert", "alert-danger")?;
        alerts.append_child(&alert)?;
        Ok(())
    }

    fn append_subscription(&self, name: &str) -> Result<(), JsValue> {
        let Some(list) = &self.subscription_list else {
            // This page variant has no subscription list.
            return Ok(());
        };
        let item = dom::text_element(&self.document, "li", name)?;
        list.append_child(&item)?;
        Ok(())
    }

    fn show_summary(&self, text: &str) -> Result<(), JsValue> {
        // Missing ancestor was already reported at locate time; the list
        // items stay rendered and only the summary is dropped.
        let Some(host) = &self.summary_host else {
            return Ok(());
        };
        let summary = dom::text_element(&self.document, "p", text)?;
        host.append_child(&summary)?;
        Ok(())
    }

    fn append_job_line(&self, text: &str) -> Result<(), JsValue> {
        let Some(job) = &self.job else {
            page_debug!("page has no job view; dropping line {text:?}");
            return Ok(());
        };
        let line = dom::text_element(&self.document, "div", text)?;
        job.messages.append_child(&line)?;
        Ok(())
    }

    fn set_progress_width(&self, width: &str) -> Result<(), JsValue> {
        let Some(job) = &self.job else {
            page_debug!("page has no job view; dropping progress update");
            return Ok(());
        };
        job.progress_bar.style().set_property("width", width)?;
        Ok(())
    }
}

/// Routes messages through the pure update and performs the effects.
///
/// Shared by reference with the socket callbacks; the browser runs one
/// callback at a time and nothing here mutates, so a plain `Rc` suffices.
pub struct App {
    state: AppState,
    page: Page,
}

impl App {
    pub fn new(state: AppState, page: Page) -> Rc<Self> {
        Rc::new(Self { state, page })
    }

    pub fn dispatch(self: &Rc<Self>, msg: Msg) {
        for effect in update(&self.state, msg) {
            self.apply_effect(effect);
        }
    }

    fn apply_effect(self: &Rc<Self>, effect: Effect) {
        match effect {
            Effect::ConnectJobStream { url } => {
                if !self.page.has_job_view() {
                    page_debug!("page has no job view; not opening {url}");
                    return;
                }
                if let Err(err) = socket::connect(self, &url) {
                    page_error!("unable to open job stream at {url}: {err:?}");
                }
            }
            other => self.page.apply(&other),
        }
    }
}

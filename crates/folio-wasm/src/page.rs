// File: src/page.rs
// Purpose: Page behaviors outside the contact form (menu, scroll, reveal, anchors, skip link, logging)
//
// Each handler reacts to one DOM event on its own and never touches the form.

use std::fmt;

use folio_form::PageConfig;
use js_sys::Array;
use tracing::{debug, error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, ErrorEvent, Event, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, PromiseRejectionEvent,
    ScrollBehavior, ScrollToOptions, Window,
};

use crate::error::BindError;
use crate::events::{listen, query, query_all, set_class, toggle_class};

const ACTIVE_CLASS: &str = "active";
const SCROLLED_CLASS: &str = "scroll-active";
const SOCIAL_LINKS: &str =
    r#"a[href*="github.com"], a[href*="linkedin.com"], a[href*="twitter.com"]"#;
const RESUME_LINK: &str = r#"[href*="resume.pdf"]"#;
const ANCHOR_LINKS: &str = r##"a[href^="#"]"##;

const REVEAL_CLASS: &str = "reveal";
const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    GitHub,
    LinkedIn,
    Twitter,
    Other,
}

impl SocialPlatform {
    pub fn from_href(href: &str) -> Self {
        if href.contains("github") {
            SocialPlatform::GitHub
        } else if href.contains("linkedin") {
            SocialPlatform::LinkedIn
        } else if href.contains("twitter") {
            SocialPlatform::Twitter
        } else {
            SocialPlatform::Other
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SocialPlatform::GitHub => "GitHub",
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Other => "Other",
        };
        f.write_str(name)
    }
}

/// Vertical extent of a `<section>`
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Id of the section containing `position`. When sections overlap the last
/// one in document order wins.
pub fn active_section(position: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| position >= s.top && position < s.top + s.height)
        .map(|s| s.id.as_str())
}

pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Selector for the element an in-page link points at. A bare `#` points
/// nowhere.
pub fn anchor_selector(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}

/// Wire every page behavior; elements a page lacks are skipped
pub fn mount(window: &Window, document: &Document, config: &PageConfig) -> Result<(), BindError> {
    insert_skip_link(document, &config.skip_link_target)?;
    bind_menu(document)?;
    bind_scroll(window, document, config)?;
    bind_reveal(document, &config.reveal_selector)?;
    bind_anchor_offset(window, document, config.anchor_offset)?;
    bind_link_logging(document)?;
    bind_error_logging(window)?;
    info!("Page behaviors mounted");
    Ok(())
}

fn insert_skip_link(document: &Document, target: &str) -> Result<(), BindError> {
    if query(document, ".skip-link")?.is_some() {
        return Ok(());
    }
    let Some(body) = document.body() else {
        debug!("No <body>, skip link not inserted");
        return Ok(());
    };

    let link = document
        .create_element("a")
        .map_err(|err| BindError::js("createElement", err))?;
    link.set_attribute("href", target)
        .map_err(|err| BindError::js("setAttribute", err))?;
    link.set_class_name("skip-link");
    link.set_text_content(Some("Skip to main content"));
    body.prepend_with_node_1(&link)
        .map_err(|err| BindError::js("prepend", err))?;
    Ok(())
}

fn close_menu(toggle: &Element, menu: &Element) {
    set_class(toggle, ACTIVE_CLASS, false);
    set_class(menu, ACTIVE_CLASS, false);
}

fn bind_menu(document: &Document) -> Result<(), BindError> {
    let (Some(toggle), Some(menu)) = (
        document.get_element_by_id("navToggle"),
        document.get_element_by_id("navMenu"),
    ) else {
        debug!("No mobile menu on this page");
        return Ok(());
    };

    let (button, panel) = (toggle.clone(), menu.clone());
    listen(&toggle, "click", move |_event: Event| {
        toggle_class(&button, ACTIVE_CLASS);
        toggle_class(&panel, ACTIVE_CLASS);
    })?;

    for link in query_all(document, ".nav-link")? {
        let (toggle, menu) = (toggle.clone(), menu.clone());
        listen(&link, "click", move |_event: Event| close_menu(&toggle, &menu))?;
    }

    listen(document, "keydown", move |event: Event| {
        let escape = event
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|key| key.key() == "Escape");
        if escape {
            close_menu(&toggle, &menu);
        }
    })
}

/// Navbar shadow and nav link highlighting, recomputed on every scroll
struct ScrollSpy {
    window: Window,
    navbar: Option<Element>,
    links: Vec<Element>,
    sections: Vec<HtmlElement>,
    threshold: f64,
    offset: f64,
}

impl ScrollSpy {
    fn update(&self) {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);

        if let Some(navbar) = &self.navbar {
            set_class(navbar, SCROLLED_CLASS, navbar_scrolled(scroll_y, self.threshold));
        }

        let bounds: Vec<SectionBounds> = self
            .sections
            .iter()
            .map(|section| SectionBounds {
                id: section.id(),
                top: f64::from(section.offset_top()),
                height: f64::from(section.offset_height()),
            })
            .collect();

        if let Some(id) = active_section(scroll_y + self.offset, &bounds) {
            let href = format!("#{}", id);
            for link in &self.links {
                let current = link.get_attribute("href").as_deref() == Some(href.as_str());
                set_class(link, ACTIVE_CLASS, current);
            }
        }
    }
}

fn bind_scroll(window: &Window, document: &Document, config: &PageConfig) -> Result<(), BindError> {
    let spy = ScrollSpy {
        window: window.clone(),
        navbar: query(document, ".navbar")?,
        links: query_all(document, ".nav-link")?,
        sections: query_all(document, "section")?
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect(),
        threshold: config.navbar_scroll_threshold,
        offset: config.section_offset,
    };

    spy.update();
    listen(window, "scroll", move |_event: Event| spy.update())
}

/// Mark matching elements `reveal`, then `active` the first time at least a
/// tenth of one is in view
fn bind_reveal(document: &Document, selector: &str) -> Result<(), BindError> {
    let targets = query_all(document, selector)?;
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    set_class(&target, ACTIVE_CLASS, true);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|err| BindError::js("IntersectionObserver", err))?;
    callback.forget();

    for target in &targets {
        set_class(target, REVEAL_CLASS, true);
        observer.observe(target);
    }
    debug!("Observing {} reveal targets", targets.len());
    Ok(())
}

/// In-page links scroll smoothly to their target, stopping `offset` pixels
/// above it
fn bind_anchor_offset(window: &Window, document: &Document, offset: f64) -> Result<(), BindError> {
    for link in query_all(document, ANCHOR_LINKS)? {
        let (window, document, href) = (
            window.clone(),
            document.clone(),
            link.get_attribute("href").unwrap_or_default(),
        );
        listen(&link, "click", move |event: Event| {
            event.prevent_default();
            let Some(selector) = anchor_selector(&href) else {
                return;
            };
            let target = match document.query_selector(selector) {
                Ok(Some(target)) => target,
                Ok(None) => return,
                Err(err) => {
                    debug!("Unusable anchor {:?}: {:?}", href, err);
                    return;
                }
            };
            let Some(target) = target.dyn_ref::<HtmlElement>() else {
                return;
            };

            let options = ScrollToOptions::new();
            options.set_top(f64::from(target.offset_top()) - offset);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?;
    }
    Ok(())
}

fn bind_link_logging(document: &Document) -> Result<(), BindError> {
    for link in query_all(document, SOCIAL_LINKS)? {
        let platform = SocialPlatform::from_href(&link.get_attribute("href").unwrap_or_default());
        listen(&link, "click", move |_event: Event| {
            info!("Social link clicked: {}", platform);
        })?;
    }

    if let Some(resume) = query(document, RESUME_LINK)? {
        listen(&resume, "click", |_event: Event| {
            info!("Resume download initiated");
        })?;
    }
    Ok(())
}

/// Uncaught errors and unhandled promise rejections go to the error log
fn bind_error_logging(window: &Window) -> Result<(), BindError> {
    listen(window, "error", |event: Event| match event.dyn_ref::<ErrorEvent>() {
        Some(event) => error!("An error occurred: {}", event.message()),
        None => error!("An error occurred: {}", event.type_()),
    })?;

    listen(window, "unhandledrejection", |event: Event| {
        let reason = event
            .dyn_ref::<PromiseRejectionEvent>()
            .map(PromiseRejectionEvent::reason)
            .unwrap_or(JsValue::UNDEFINED);
        error!("Unhandled promise rejection: {:?}", reason);
    })
}

//! Browser tests for the DOM bindings
//!
//! Run with `wasm-pack test --headless --firefox crates/folio-wasm`.

#![cfg(target_arch = "wasm32")]

use folio_form::{FormSettings, FormView, PageConfig};
use folio_validation::Field;
use folio_wasm::{contact, page};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, Event, EventInit, HtmlElement, HtmlInputElement, HtmlTextAreaElement,
    KeyboardEvent, KeyboardEventInit, Window,
};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
<form id="contactForm">
  <div class="form-group"><input id="name" type="text"><span id="nameError"></span></div>
  <div class="form-group"><input id="email" type="email"><span id="emailError"></span></div>
  <div class="form-group"><textarea id="message"></textarea><span id="messageError"></span></div>
  <button type="submit">Send</button>
</form>
<div id="formMessage"></div>
"#;

const NAV_FIXTURE: &str = r##"
<nav class="navbar" style="position: fixed; top: 0">
  <button id="navToggle">Menu</button>
  <ul id="navMenu">
    <li><a class="nav-link" href="#home">Home</a></li>
    <li><a class="nav-link" href="#about">About</a></li>
  </ul>
</nav>
<section id="home" style="height: 1000px"></section>
<section id="about" style="height: 1000px"><div class="project-card"></div></section>
<section id="contact" style="height: 2000px"></section>
"##;

fn load(fixture: &str) -> (Window, Document) {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    document.body().unwrap().set_inner_html(fixture);
    (window, document)
}

fn page() -> (Window, Document) {
    load(FIXTURE)
}

fn nav_page() -> (Window, Document) {
    let (window, document) = load(NAV_FIXTURE);
    window.scroll_to_with_x_and_y(0.0, 0.0);
    page::mount(&window, &document, &PageConfig::default()).unwrap();
    (window, document)
}

fn nav_link(document: &Document, href: &str) -> HtmlElement {
    document
        .query_selector(&format!(r#".nav-link[href="{}"]"#, href))
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn menu_open(document: &Document) -> (bool, bool) {
    (
        has_class(document, "navToggle", "active"),
        has_class(document, "navMenu", "active"),
    )
}

fn scroll_to(window: &Window, y: f64) {
    window.scroll_to_with_x_and_y(0.0, y);
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
}

fn element(document: &Document, id: &str) -> Element {
    document.get_element_by_id(id).unwrap()
}

fn fill(document: &Document, name: &str, email: &str, message: &str) {
    for (id, value) in [("name", name), ("email", email)] {
        element(document, id)
            .dyn_into::<HtmlInputElement>()
            .unwrap()
            .set_value(value);
    }
    element(document, "message")
        .dyn_into::<HtmlTextAreaElement>()
        .unwrap()
        .set_value(message);
}

fn has_class(document: &Document, id: &str, class: &str) -> bool {
    element(document, id).class_list().contains(class)
}

fn container_errored(document: &Document, field: Field) -> bool {
    element(document, field.input_id())
        .parent_element()
        .unwrap()
        .class_list()
        .contains("error")
}

#[wasm_bindgen_test]
fn test_rejected_submission_marks_message_only() {
    let (window, document) = page();
    let form = contact::mount(&window, &document, FormSettings::default()).unwrap();

    fill(&document, "Al", "a@b.com", "short");
    assert!(!form.borrow_mut().submit().is_accepted());

    assert!(container_errored(&document, Field::Message));
    assert!(has_class(&document, "messageError", "show"));
    assert_eq!(
        element(&document, "messageError").text_content().as_deref(),
        Some("Message must be at least 10 characters")
    );
    assert!(!container_errored(&document, Field::Name));
    assert!(!container_errored(&document, Field::Email));
    assert_eq!(element(&document, "emailError").text_content().as_deref(), Some(""));
}

#[wasm_bindgen_test]
fn test_accepted_submission_shows_banner_and_resets() {
    let (window, document) = page();
    let form = contact::mount(&window, &document, FormSettings::default()).unwrap();

    fill(&document, "Jane Doe", "jane@example.com", "Hello, I would like to connect.");
    assert!(form.borrow_mut().submit().is_accepted());

    assert_eq!(
        element(&document, "formMessage").text_content().as_deref(),
        Some("Thank you Jane Doe! I'll get back to you soon.")
    );
    assert!(has_class(&document, "formMessage", "show"));
    assert!(has_class(&document, "formMessage", "success"));
    assert_eq!(form.borrow().view().value(Field::Name), "");
    assert_eq!(form.borrow().view().value(Field::Email), "");
    assert_eq!(form.borrow().view().value(Field::Message), "");
    assert!(form.borrow().pending_hide().is_some());
}

#[wasm_bindgen_test]
fn test_blur_event_checks_single_field() {
    let (window, document) = page();
    let _form = contact::mount(&window, &document, FormSettings::default()).unwrap();

    fill(&document, "", "", "");
    let blur = Event::new("blur").unwrap();
    element(&document, "name").dispatch_event(&blur).unwrap();

    assert!(container_errored(&document, Field::Name));
    assert!(!container_errored(&document, Field::Email));
    assert!(!container_errored(&document, Field::Message));
}

#[wasm_bindgen_test]
fn test_missing_markup_is_reported() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    document.body().unwrap().set_inner_html("<p>No form here</p>");

    let err = contact::mount(&window, &document, FormSettings::default())
        .err()
        .expect("mount should fail without markup");
    assert_eq!(err.to_string(), "missing element #contactForm");
}

#[wasm_bindgen_test]
fn test_skip_link_inserted_once() {
    let (window, document) = nav_page();
    page::mount(&window, &document, &PageConfig::default()).unwrap();

    let links = document.query_selector_all(".skip-link").unwrap();
    assert_eq!(links.length(), 1);
    let link = document.query_selector(".skip-link").unwrap().unwrap();
    assert_eq!(link.get_attribute("href").as_deref(), Some("#home"));
    assert_eq!(link.text_content().as_deref(), Some("Skip to main content"));
}

#[wasm_bindgen_test]
fn test_menu_toggle_and_close() {
    let (_window, document) = nav_page();
    let toggle = element(&document, "navToggle")
        .dyn_into::<HtmlElement>()
        .unwrap();

    toggle.click();
    assert_eq!(menu_open(&document), (true, true));
    toggle.click();
    assert_eq!(menu_open(&document), (false, false));

    toggle.click();
    nav_link(&document, "#about").click();
    assert_eq!(menu_open(&document), (false, false));
}

#[wasm_bindgen_test]
fn test_escape_closes_menu() {
    let (_window, document) = nav_page();
    element(&document, "navToggle")
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
    assert_eq!(menu_open(&document), (true, true));

    let init = KeyboardEventInit::new();
    init.set_key("Enter");
    let enter = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document.dispatch_event(&enter).unwrap();
    assert_eq!(menu_open(&document), (true, true));

    init.set_key("Escape");
    let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document.dispatch_event(&escape).unwrap();
    assert_eq!(menu_open(&document), (false, false));
}

#[wasm_bindgen_test]
fn test_scroll_marks_navbar_and_active_link() {
    let (window, document) = nav_page();
    let navbar = document.query_selector(".navbar").unwrap().unwrap();
    assert!(!navbar.class_list().contains("scroll-active"));
    assert!(nav_link(&document, "#home").class_list().contains("active"));

    scroll_to(&window, 1200.0);
    assert!(navbar.class_list().contains("scroll-active"));
    assert!(nav_link(&document, "#about").class_list().contains("active"));
    assert!(!nav_link(&document, "#home").class_list().contains("active"));

    scroll_to(&window, 0.0);
    assert!(!navbar.class_list().contains("scroll-active"));
    assert!(nav_link(&document, "#home").class_list().contains("active"));
    assert!(!nav_link(&document, "#about").class_list().contains("active"));
}

#[wasm_bindgen_test]
fn test_anchor_click_is_taken_over() {
    let (_window, document) = nav_page();

    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let click = Event::new_with_event_init_dict("click", &init).unwrap();
    let proceeded = nav_link(&document, "#about").dispatch_event(&click).unwrap();

    assert!(!proceeded);
    assert!(click.default_prevented());
}

#[wasm_bindgen_test]
fn test_reveal_targets_are_marked() {
    let (_window, document) = nav_page();
    let card = document.query_selector(".project-card").unwrap().unwrap();
    assert!(card.class_list().contains("reveal"));
}

#[wasm_bindgen_test]
fn test_page_without_nav_markup_mounts() {
    let (window, document) = load("<p>Plain page</p>");
    page::mount(&window, &document, &PageConfig::default()).unwrap();
    assert!(document.query_selector(".skip-link").unwrap().is_some());
}

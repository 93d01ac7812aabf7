//! Browser wiring for the page effects
//!
//! Every effect looks up its elements once; a missing element disables that
//! effect only.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{
    Blob, BlobPropertyBag, Document, Element, EventTarget, FormData, HtmlAnchorElement,
    HtmlButtonElement, HtmlElement, HtmlFormElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, NodeList, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Url, Window,
};

use super::contact::{ContactMessage, SENT_NOTICE, SUBMIT_DELAY_MS, SubmitState};
use super::counter::{COUNTER_INTERVAL_MS, Counter};
use super::resume::{RESUME_FILENAME, RESUME_MIME, RESUME_TEXT};
use super::reveal::{
    REVEAL_ROOT_MARGIN, REVEAL_SELECTORS, REVEAL_THRESHOLD, SKILL_FILL_DELAY_MS, SectionEffects,
    skill_width, stagger_delay,
};
use super::scroll::{SCROLL_TOP_BUTTON_CSS, header_style, parallax_transform, scroll_top_opacity};
use super::typewriter::{TYPE_INTERVAL_MS, TYPE_START_DELAY_MS, Typewriter};
use super::{
    CURSOR_FOLLOW_DELAY_MS, GLITCH_HOVER_ANIMATION, GLITCH_IDLE_ANIMATION, LOADING_FADE_MS,
    LOADING_HOLD_MS,
};

/// Effects parked at install until the page finishes loading
pub struct PendingEffects {
    typewriter: Option<(Element, Typewriter)>,
}

/// Install the effects that only need the parsed document
pub fn install(window: &Window, document: &Document) -> Result<PendingEffects, JsValue> {
    let typewriter = take_typewriter_text(document)?;
    setup_resume_download(document)?;
    setup_cursor(window, document)?;
    setup_smooth_scroll(document)?;
    setup_mobile_menu(document)?;
    setup_reveal(window, document)?;
    setup_scroll_effects(window, document)?;
    setup_contact_form(window, document)?;
    setup_glitch(document)?;
    log::info!("Page effects installed");
    Ok(PendingEffects { typewriter })
}

/// Effects that start once the page has fully loaded
pub fn on_load(
    window: &Window,
    document: &Document,
    pending: PendingEffects,
) -> Result<(), JsValue> {
    if let Some(body) = document.body() {
        body.class_list().add_1("loaded")?;
    }

    if let Some(screen) = document.get_element_by_id("loading-screen") {
        let w = window.clone();
        set_timeout(window, LOADING_HOLD_MS, move || {
            set_style(&screen, "opacity", "0");
            let _ = set_timeout(&w, LOADING_FADE_MS, move || {
                set_style(&screen, "display", "none");
            });
        })?;
    }

    if let Some((el, typewriter)) = pending.typewriter {
        let w = window.clone();
        set_timeout(window, TYPE_START_DELAY_MS, move || type_next(w, el, typewriter))?;
    }

    Ok(())
}

/// Blank the heading right away; typing starts on load
fn take_typewriter_text(document: &Document) -> Result<Option<(Element, Typewriter)>, JsValue> {
    let Some(el) = document.query_selector(".typewriter")? else {
        log::debug!("No typewriter heading");
        return Ok(None);
    };
    let typewriter = Typewriter::new(el.text_content().unwrap_or_default());
    el.set_text_content(Some(typewriter.visible()));
    Ok(Some((el, typewriter)))
}

// === Helpers ===

/// Run `f` once after `ms` milliseconds
fn set_timeout(window: &Window, ms: i32, f: impl FnOnce() + 'static) -> Result<i32, JsValue> {
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)
}

/// Attach a listener for the lifetime of the page
fn listen<E>(target: &EventTarget, event: &str, f: impl FnMut(E) + 'static) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(f);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        if let Err(e) = html.style().set_property(property, value) {
            log::warn!("Failed to set {}: {:?}", property, e);
        }
    }
}

fn alert(window: &Window, message: &str) {
    if let Err(e) = window.alert_with_message(message) {
        log::warn!("Alert failed: {:?}", e);
    }
}

fn type_next(window: Window, el: Element, mut typewriter: Typewriter) {
    let Some(text) = typewriter.advance().map(str::to_owned) else {
        return;
    };
    el.set_text_content(Some(&text));
    let w = window.clone();
    if let Err(e) = set_timeout(&window, TYPE_INTERVAL_MS, move || type_next(w, el, typewriter)) {
        log::warn!("Typewriter stopped: {:?}", e);
    }
}

fn count_up(window: Window, el: Element, mut counter: Counter) {
    let (value, more) = counter.step();
    el.set_text_content(Some(&value.to_string()));
    if more {
        let w = window.clone();
        if let Err(e) = set_timeout(&window, COUNTER_INTERVAL_MS, move || count_up(w, el, counter)) {
            log::warn!("Counter stopped: {:?}", e);
        }
    }
}

// === Effects ===

fn setup_resume_download(document: &Document) -> Result<(), JsValue> {
    let Some(button) = document.get_element_by_id("download-resume") else {
        log::debug!("No resume button");
        return Ok(());
    };

    let doc = document.clone();
    listen(&button, "click", move |event: MouseEvent| {
        event.prevent_default();
        match download_resume(&doc) {
            Ok(()) => log::info!("Resume downloaded"),
            Err(e) => log::error!("Resume download failed: {:?}", e),
        }
    })
}

fn download_resume(document: &Document) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(RESUME_TEXT));
    let options = BlobPropertyBag::new();
    options.set_type(RESUME_MIME);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(&url);
    link.set_download(RESUME_FILENAME);
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Url::revoke_object_url(&url)
}

fn setup_cursor(window: &Window, document: &Document) -> Result<(), JsValue> {
    let cursor = document.query_selector(".cursor")?;
    let follower = document.query_selector(".cursor-follower")?;
    if cursor.is_none() && follower.is_none() {
        log::debug!("No custom cursor");
        return Ok(());
    }

    let window = window.clone();
    listen(document, "mousemove", move |event: MouseEvent| {
        let left = format!("{}px", event.client_x());
        let top = format!("{}px", event.client_y());
        if let Some(cursor) = &cursor {
            set_style(cursor, "left", &left);
            set_style(cursor, "top", &top);
        }
        if let Some(follower) = follower.clone() {
            let _ = set_timeout(&window, CURSOR_FOLLOW_DELAY_MS, move || {
                set_style(&follower, "left", &left);
                set_style(&follower, "top", &top);
            });
        }
    })
}

fn setup_smooth_scroll(document: &Document) -> Result<(), JsValue> {
    for anchor in elements(document.query_selector_all("a[href^=\"#\"]")?) {
        let doc = document.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        listen(&anchor, "click", move |event: MouseEvent| {
            event.prevent_default();
            // A bare "#" is not a valid selector
            if let Ok(Some(target)) = doc.query_selector(&href) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })?;
    }
    Ok(())
}

fn setup_mobile_menu(document: &Document) -> Result<(), JsValue> {
    let (Some(hamburger), Some(menu)) = (
        document.query_selector(".hamburger")?,
        document.query_selector(".nav-menu")?,
    ) else {
        log::debug!("No mobile menu");
        return Ok(());
    };

    let toggle_target = hamburger.clone();
    listen(&hamburger, "click", move |_event: MouseEvent| {
        let _ = toggle_target.class_list().toggle("active");
        let _ = menu.class_list().toggle("active");
    })
}

fn setup_reveal(window: &Window, document: &Document) -> Result<(), JsValue> {
    let w = window.clone();
    let doc = document.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                if let Err(e) = reveal_section(&w, &doc, &entry.target()) {
                    log::warn!("Reveal failed: {:?}", e);
                }
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for section in elements(document.query_selector_all("section")?) {
        observer.observe(&section);
    }
    Ok(())
}

fn reveal_section(window: &Window, document: &Document, section: &Element) -> Result<(), JsValue> {
    let effects = SectionEffects::for_classes(&section.class_name());

    if effects.counters {
        for el in elements(document.query_selector_all(".stat-number")?) {
            match el.get_attribute("data-target").as_deref().and_then(Counter::from_attr) {
                Some(counter) => count_up(window.clone(), el, counter),
                None => log::warn!("Counter without a numeric data-target"),
            }
        }
    }

    if effects.skill_bars {
        for card in elements(document.query_selector_all(".skill-card")?) {
            let width = card.get_attribute("data-skill").as_deref().and_then(skill_width);
            if let (Some(bar), Some(width)) = (card.query_selector(".progress-bar")?, width) {
                set_timeout(window, SKILL_FILL_DELAY_MS, move || {
                    set_style(&bar, "width", &width)
                })?;
            }
        }
    }

    for selector in REVEAL_SELECTORS {
        for (i, el) in elements(section.query_selector_all(selector)?).into_iter().enumerate() {
            set_timeout(window, stagger_delay(i), move || {
                set_style(&el, "opacity", "1");
                set_style(&el, "transform", "translateY(0)");
            })?;
        }
    }
    Ok(())
}

/// Header background, parallax shapes and the scroll-to-top button
fn setup_scroll_effects(window: &Window, document: &Document) -> Result<(), JsValue> {
    let header = document.query_selector("header")?;
    let shapes = elements(document.query_selector_all(".floating-shapes")?);

    let button: HtmlButtonElement = document.create_element("button")?.dyn_into()?;
    button.set_text_content(Some("↑"));
    button.set_class_name("scroll-to-top");
    button.set_attribute("style", SCROLL_TOP_BUTTON_CSS)?;
    {
        let w = window.clone();
        listen(&button, "click", move |_event: MouseEvent| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            w.scroll_to_with_scroll_to_options(&options);
        })?;
    }
    if let Some(body) = document.body() {
        body.append_child(&button)?;
    }

    let w = window.clone();
    listen(window, "scroll", move |_event: web_sys::Event| {
        let scroll_y = w.scroll_y().unwrap_or(0.0);

        if let Some(header) = &header {
            let style = header_style(scroll_y);
            set_style(header, "background", style.background);
            set_style(header, "box-shadow", style.box_shadow);
        }

        let transform = parallax_transform(scroll_y);
        for shape in &shapes {
            set_style(shape, "transform", &transform);
        }

        let _ = button.style().set_property("opacity", scroll_top_opacity(scroll_y));
    })
}

fn setup_contact_form(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(form) = document.query_selector(".contact-form")? else {
        log::debug!("No contact form");
        return Ok(());
    };
    let form: HtmlFormElement = form.dyn_into()?;
    let submit: Option<HtmlButtonElement> = form
        .query_selector("button[type=\"submit\"]")?
        .and_then(|b| b.dyn_into().ok());
    let state = Rc::new(RefCell::new(SubmitState::Idle));

    let w = window.clone();
    let form_target = form.clone();
    listen(&form, "submit", move |event: web_sys::Event| {
        event.prevent_default();

        let field = |data: &FormData, name: &str| data.get(name).as_string();
        let message = FormData::new_with_form(&form_target)
            .map_err(|e| log::warn!("Could not read form: {:?}", e))
            .ok()
            .map(|data| {
                ContactMessage::validate(
                    field(&data, "name"),
                    field(&data, "email"),
                    field(&data, "message"),
                )
            });

        match message {
            Some(Ok(message)) => {
                log::info!("Simulated contact submission ({} chars)", message.message.len());
                simulate_submit(&w, &form_target, submit.clone(), state.clone());
            }
            Some(Err(e)) => alert(&w, &e.to_string()),
            None => {}
        }
    })
}

fn simulate_submit(
    window: &Window,
    form: &HtmlFormElement,
    button: Option<HtmlButtonElement>,
    state: Rc<RefCell<SubmitState>>,
) {
    if let Some(button) = &button {
        let current = button.text_content().unwrap_or_default();
        let Some(label) = state.borrow_mut().begin(&current) else {
            return;
        };
        button.set_text_content(Some(label));
        button.set_disabled(true);
    }

    let w = window.clone();
    let form = form.clone();
    let result = set_timeout(window, SUBMIT_DELAY_MS, move || {
        alert(&w, SENT_NOTICE);
        form.reset();
        let restored = state.borrow_mut().finish();
        if let (Some(button), Some(label)) = (button, restored) {
            button.set_text_content(Some(&label));
            button.set_disabled(false);
        }
    });
    if let Err(e) = result {
        log::warn!("Could not schedule submission: {:?}", e);
    }
}

fn setup_glitch(document: &Document) -> Result<(), JsValue> {
    let Some(el) = document.query_selector(".glitch")? else {
        log::debug!("No glitch element");
        return Ok(());
    };

    let target = el.clone();
    listen(&el, "mouseenter", move |_event: MouseEvent| {
        set_style(&target, "animation", GLITCH_HOVER_ANIMATION)
    })?;
    let target = el.clone();
    listen(&el, "mouseleave", move |_event: MouseEvent| {
        set_style(&target, "animation", GLITCH_IDLE_ANIMATION)
    })
}

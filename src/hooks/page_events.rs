//! Browser event wiring
//!
//! `install` registers everything the page needs, once:
//! - a delegated `click` listener on the document for copy buttons
//! - a size pass on `DOMContentLoaded` (or right away if parsing is done)
//! - a size pass on window `load`
//! - a debounced size pass on window `resize`
//!
//! Closures live in a thread-local so `uninstall` can detach them again.

use crate::config::PromoConfig;
use crate::dom::web::WebPage;
use crate::errors::PromoResult;
use crate::services::copy_button::CopyOutcome;
use crate::services::{match_sizes, CopyButtons, MatchReport};
use crate::utils::clipboard::select_writer;
use crate::utils::timer::{Debouncer, TimeoutScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement};

type Listener = Closure<dyn FnMut(Event)>;

struct PageListeners {
    page: WebPage,
    config: Rc<PromoConfig>,
    copy_buttons: CopyButtons<HtmlElement, TimeoutScheduler>,
    debouncer: Debouncer<TimeoutScheduler>,
    click: Listener,
    resize: Listener,
    load: Listener,
    ready: Listener,
}

thread_local! {
    static LISTENERS: RefCell<Option<PageListeners>> = RefCell::new(None);
}

pub fn is_installed() -> bool {
    LISTENERS.with(|listeners| listeners.borrow().is_some())
}

/// Attaches the copy and sizing behaviors to the current page
///
/// Calling it again while installed does nothing.
pub fn install(config: PromoConfig) -> PromoResult<()> {
    if is_installed() {
        log::warn!("Page behaviors already installed");
        return Ok(());
    }

    let page = WebPage::current()?;
    let config = Rc::new(config);
    let writer = select_writer(&page);
    log::info!("Copy buttons using {}", writer.name());

    let copy_buttons = CopyButtons::new(config.clone(), writer, TimeoutScheduler);
    let debouncer = Debouncer::new(TimeoutScheduler, config.resize_debounce_ms);

    let click = click_listener(copy_buttons.clone(), config.copy_button_selector());
    let resize = {
        let page = page.clone();
        let config = config.clone();
        let debouncer = debouncer.clone();
        Closure::wrap(Box::new(move |_: Event| {
            let page = page.clone();
            let config = config.clone();
            debouncer.call(move || {
                match_sizes(&page, &config);
            });
        }) as Box<dyn FnMut(Event)>)
    };
    let load = size_pass_listener(&page, &config, "load");
    let ready = size_pass_listener(&page, &config, "DOMContentLoaded");

    page.document
        .add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
    page.window
        .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;
    page.window
        .add_event_listener_with_callback("load", load.as_ref().unchecked_ref())?;
    page.document
        .add_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref())?;

    // Loaded after parsing finished: DOMContentLoaded will not fire again
    if page.is_parsed() {
        match_sizes(&page, &config);
    }

    LISTENERS.with(|listeners| {
        *listeners.borrow_mut() = Some(PageListeners {
            page,
            config,
            copy_buttons,
            debouncer,
            click,
            resize,
            load,
            ready,
        });
    });

    log::info!("Promo page behaviors installed");
    Ok(())
}

/// Detaches every listener and drops pending timers
pub fn uninstall() {
    let Some(listeners) = LISTENERS.with(|listeners| listeners.borrow_mut().take()) else {
        return;
    };

    let PageListeners {
        page,
        copy_buttons,
        config: _,
        debouncer,
        click,
        resize,
        load,
        ready,
    } = listeners;

    page.document
        .remove_event_listener_with_callback("click", click.as_ref().unchecked_ref())
        .ok();
    page.window
        .remove_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
        .ok();
    page.window
        .remove_event_listener_with_callback("load", load.as_ref().unchecked_ref())
        .ok();
    page.document
        .remove_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref())
        .ok();

    debouncer.cancel();
    copy_buttons.feedback().clear();
    log::info!("Promo page behaviors removed");
}

/// Runs a size pass now, for pages that change promo rows after load
pub fn refresh_sizes() -> Option<MatchReport> {
    LISTENERS.with(|listeners| {
        let listeners = listeners.borrow();
        let installed = listeners.as_ref()?;
        Some(match_sizes(&installed.page, &installed.config))
    })
}

fn click_listener(
    copy_buttons: CopyButtons<HtmlElement, TimeoutScheduler>,
    selector: String,
) -> Listener {
    Closure::wrap(Box::new(move |event: Event| {
        let Some(button) = copy_button_for(&event, &selector) else {
            return;
        };

        let copy_buttons = copy_buttons.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match copy_buttons.copy_from(&button).await {
                CopyOutcome::Copied(code) => log::info!("Copied promo code {}", code),
                CopyOutcome::Failed(e) => log::debug!("Copy failure shown on button: {}", e),
                CopyOutcome::Skipped => {}
            }
        });
    }) as Box<dyn FnMut(Event)>)
}

/// The copy button the click landed in, if any
fn copy_button_for(event: &Event, selector: &str) -> Option<HtmlElement> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    target
        .closest(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn size_pass_listener(page: &WebPage, config: &Rc<PromoConfig>, trigger: &'static str) -> Listener {
    let page = page.clone();
    let config = config.clone();
    Closure::wrap(Box::new(move |_: Event| {
        log::debug!("Size pass on {}", trigger);
        match_sizes(&page, &config);
    }) as Box<dyn FnMut(Event)>)
}


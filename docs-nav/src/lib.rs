//! Mobile navigation for the DATAR documentation page.
//!
//! `#navToggle`, `#navMenu` and `#navOverlay` share one open/closed state,
//! shown as the `active` class on all three.  Menu links scroll to their
//! section after the slide-out animation finishes.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, KeyboardEvent, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

pub const ID_TOGGLE: &str = "navToggle";
pub const ID_MENU: &str = "navMenu";
pub const ID_OVERLAY: &str = "navOverlay";
pub const LINK_SELECTOR: &str = ".nav-menu a";
pub const ACTIVE_CLASS: &str = "active";

/// Matches the menu's CSS transition.
pub const SCROLL_DELAY_MS: u32 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Escape closes an open menu.  Returns whether the state changed.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.open {
            self.close();
            return true;
        }
        false
    }
}

// We use thread_local because WASM runs in a single thread
thread_local! {
    static MENU_STATE: RefCell<MenuState> = RefCell::new(MenuState::default());
}

pub fn is_open() -> bool {
    MENU_STATE.with(|s| s.borrow().open)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document on window"))?;
    install(&document)
}

/// Wire the menu on `document`.  Pages without the toggle are left alone.
pub fn install(document: &Document) -> Result<(), JsValue> {
    MENU_STATE.with(|s| *s.borrow_mut() = MenuState::default());

    let (Some(toggle), Some(overlay)) = (
        document.get_element_by_id(ID_TOGGLE),
        document.get_element_by_id(ID_OVERLAY),
    ) else {
        web_sys::console::warn_1(&"Navigation elements not found; menu disabled".into());
        return Ok(());
    };

    let doc = document.clone();
    let on_toggle = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: MouseEvent| {
        update(&doc, MenuState::toggle);
    }));
    toggle.add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())?;
    on_toggle.forget();

    let doc = document.clone();
    let on_overlay = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: MouseEvent| {
        update(&doc, MenuState::close);
    }));
    overlay.add_event_listener_with_callback("click", on_overlay.as_ref().unchecked_ref())?;
    on_overlay.forget();

    let doc = document.clone();
    let on_key = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: KeyboardEvent| {
        let changed = MENU_STATE.with(|s| s.borrow_mut().on_key(&e.key()));
        if changed {
            sync_classes(&doc);
        }
    }));
    document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    on_key.forget();

    setup_link_handlers(document)
}

fn setup_link_handlers(document: &Document) -> Result<(), JsValue> {
    let links = document.query_selector_all(LINK_SELECTOR)?;
    for i in 0..links.length() {
        let Some(link) = links.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let doc = document.clone();
        let anchor = link.clone();
        let on_click = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: MouseEvent| {
            e.prevent_default();
            let Some(target) = anchor
                .get_attribute("href")
                .and_then(|href| doc.query_selector(&href).ok().flatten())
            else {
                return;
            };
            update(&doc, MenuState::close);
            Timeout::new(SCROLL_DELAY_MS, move || scroll_to_section(&target)).forget();
        }));
        link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

fn update(document: &Document, f: impl FnOnce(&mut MenuState)) {
    MENU_STATE.with(|s| f(&mut s.borrow_mut()));
    sync_classes(document);
}

/// Mirror the state onto all three elements.
fn sync_classes(document: &Document) {
    let open = is_open();
    for id in [ID_TOGGLE, ID_MENU, ID_OVERLAY] {
        if let Some(el) = document.get_element_by_id(id) {
            if let Err(e) = el.class_list().toggle_with_force(ACTIVE_CLASS, open) {
                web_sys::console::error_1(&e);
            }
        }
    }
}

fn scroll_to_section(target: &Element) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
}

//! Browser glue: local storage, viewport, scrolling, key listening and the
//! window-level toggle event. Off wasm32 every call degrades to a no-op so the
//! drawer logic still builds and runs natively.

use crate::drawer::preference::KeyValueStore;
use crate::error::{StorageError, StorageResult};
use crate::types::{ScrollTarget, SidebarToggle};

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> StorageResult<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStore for LocalStorage {
    #[cfg(target_arch = "wasm32")]
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|_| StorageError::Read(key.to_string()))
    }

    #[cfg(target_arch = "wasm32")]
    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Unavailable)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable)
    }
}

/// Current `window.innerWidth`, if there is a window
pub fn viewport_width() -> Option<f64> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Smooth-scroll the target into view. Returns false when it is not on the page.
pub fn scroll_into_view(target: &ScrollTarget, footer_selector: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        let element = match target {
            ScrollTarget::Footer => document.query_selector(footer_selector).ok().flatten(),
        };
        let Some(element) = element else {
            tracing::debug!(?target, "scroll target not found");
            return false;
        };

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (target, footer_selector);
        false
    }
}

/// Re-publish a toggle as `window.dispatchEvent(new CustomEvent(name, { detail }))`
pub fn dispatch_toggle_event(event_name: &str, toggle: SidebarToggle) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let detail = match serde_wasm_bindgen::to_value(&toggle) {
            Ok(detail) => detail,
            Err(err) => {
                tracing::warn!("Could not encode {} detail: {}", event_name, err);
                return;
            }
        };

        let init = web_sys::CustomEventInit::new();
        init.set_detail(&detail);
        match web_sys::CustomEvent::new_with_event_init_dict(event_name, &init) {
            Ok(event) => {
                let _ = window.dispatch_event(&event);
            }
            Err(_) => tracing::warn!("Could not create {} event", event_name),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (event_name, toggle);
    }
}

/// Window `keydown` listener that lives as long as this value.
///
/// Off wasm32 there is no window; listeners go into a per-thread registry
/// instead and [`dispatch_key`] stands in for the browser.
pub struct KeyListener {
    #[cfg(target_arch = "wasm32")]
    closure: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::KeyboardEvent)>,
    #[cfg(not(target_arch = "wasm32"))]
    id: u64,
}

impl KeyListener {
    pub fn register(on_key: impl FnMut(String) + 'static) -> Option<Self> {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;

            let mut on_key = on_key;
            let closure = wasm_bindgen::closure::Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
                move |event: web_sys::KeyboardEvent| on_key(event.key()),
            );
            let window = web_sys::window()?;
            window
                .add_event_listener_with_callback(
                    "keydown",
                    closure.as_ref().unchecked_ref::<js_sys::Function>(),
                )
                .ok()?;
            Some(Self { closure })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Some(Self {
                id: native_keys::add(Box::new(on_key)),
            })
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for KeyListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "keydown",
                self.closure.as_ref().unchecked_ref::<js_sys::Function>(),
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Drop for KeyListener {
    fn drop(&mut self) {
        native_keys::remove(self.id);
    }
}

/// Deliver a key press to every live [`KeyListener`] on this thread
#[cfg(not(target_arch = "wasm32"))]
pub fn dispatch_key(key: &str) {
    for listener in native_keys::snapshot() {
        (listener.borrow_mut())(key.to_string());
    }
}

/// Number of [`KeyListener`]s currently registered on this thread
#[cfg(not(target_arch = "wasm32"))]
pub fn key_listener_count() -> usize {
    native_keys::count()
}

#[cfg(not(target_arch = "wasm32"))]
mod native_keys {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    pub(super) type Listener = Rc<RefCell<Box<dyn FnMut(String)>>>;

    thread_local! {
        static NEXT_ID: Cell<u64> = const { Cell::new(0) };
        static LISTENERS: RefCell<Vec<(u64, Listener)>> = const { RefCell::new(Vec::new()) };
    }

    pub(super) fn add(on_key: Box<dyn FnMut(String)>) -> u64 {
        let id = NEXT_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        LISTENERS.with(|l| l.borrow_mut().push((id, Rc::new(RefCell::new(on_key)))));
        id
    }

    pub(super) fn remove(id: u64) {
        // try_with: the registry may already be gone during thread teardown
        let _ = LISTENERS.try_with(|l| l.borrow_mut().retain(|(other, _)| *other != id));
    }

    // Cloned out so a listener may register or drop listeners while running
    pub(super) fn snapshot() -> Vec<Listener> {
        LISTENERS.with(|l| l.borrow().iter().map(|(_, f)| f.clone()).collect())
    }

    pub(super) fn count() -> usize {
        LISTENERS.with(|l| l.borrow().len())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_key_listener_lives_until_dropped() {
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = seen.clone();
        let listener = KeyListener::register(move |key| sink.borrow_mut().push(key));
        assert!(listener.is_some());
        assert_eq!(key_listener_count(), 1);

        dispatch_key("Escape");
        drop(listener);
        dispatch_key("Enter");

        assert_eq!(key_listener_count(), 0);
        assert_eq!(*seen.borrow(), vec!["Escape".to_string()]);
    }

    #[test]
    fn test_storage_unavailable_off_wasm() {
        assert_eq!(LocalStorage.get("sidebar-open"), Err(StorageError::Unavailable));
        assert!(!scroll_into_view(&ScrollTarget::Footer, "footer"));
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_drawer::error::StorageResult;
use portfolio_drawer::prelude::*;

const KEY: &str = "sidebar-open";

fn mount(store: MemoryStore, width: f64) -> DrawerController<MemoryStore> {
    DrawerController::mount(DrawerConfig::default(), store, width, ToggleBroadcast::new())
}

fn contact() -> NavItem {
    *NAV_ITEMS.iter().find(|i| i.is_action_button).unwrap()
}

/// Accepts reads, rejects writes (quota exceeded)
struct ReadOnlyStore(MemoryStore);

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.0.get(key)
    }

    fn set(&self, key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Write(key.to_string()))
    }
}

#[test]
fn route_change_always_closes_mobile() {
    let mut drawer = mount(MemoryStore::new(), 1440.0);
    let visits = [
        ("/", true),
        ("/about", false),
        ("/projects", true),
        ("/projects", true),
    ];
    for (path, open_first) in visits {
        if open_first {
            drawer.toggle_mobile();
            assert!(drawer.mobile_open());
        }
        drawer.route_changed(path);
        assert!(!drawer.mobile_open(), "still open after {path}");
        assert_eq!(drawer.current_route(), Some(path));
    }
}

#[test]
fn route_change_leaves_desktop_alone() {
    let mut drawer = mount(MemoryStore::new(), 1440.0);
    drawer.route_changed("/summary");
    assert!(drawer.desktop_open());
}

#[test]
fn escape_closes_mobile_and_is_idempotent() {
    let mut drawer = mount(MemoryStore::new(), 800.0);
    drawer.toggle_mobile();
    drawer.key_pressed("Escape");
    assert!(!drawer.mobile_open());
    drawer.key_pressed("Escape");
    assert!(!drawer.mobile_open());
}

#[test]
fn double_toggle_restores_and_persists_final_value() {
    let store = MemoryStore::new();
    let mut drawer = mount(store.clone(), 1440.0);
    let original = drawer.desktop_open();

    assert_eq!(drawer.toggle_desktop(), !original);
    assert_eq!(store.raw(KEY).as_deref(), Some("false"));
    assert_eq!(drawer.toggle_desktop(), original);
    assert_eq!(store.raw(KEY).as_deref(), Some("true"));
}

#[test]
fn narrow_viewport_ignores_stored_open() {
    let drawer = mount(MemoryStore::with_entry(KEY, "true"), 1023.0);
    assert!(!drawer.desktop_open());
    assert!(!drawer.drawer_visible());
}

#[test]
fn breakpoint_width_without_preference_opens() {
    let drawer = mount(MemoryStore::new(), 1024.0);
    assert!(drawer.desktop_open());
}

#[test]
fn contact_scrolls_without_changing_route() {
    let mut drawer = mount(MemoryStore::new(), 1440.0);
    drawer.route_changed("/experience");
    drawer.toggle_mobile();

    let outcome = drawer.select(&contact());
    assert_eq!(outcome, NavOutcome::Scroll(ScrollTarget::Footer));
    assert_eq!(drawer.current_route(), Some("/experience"));
    assert!(!drawer.mobile_open());

    // Closed already: still closed, still no route change
    drawer.select(&contact());
    assert!(!drawer.mobile_open());
    assert_eq!(drawer.current_route(), Some("/experience"));
}

#[test]
fn each_toggle_broadcasts_once_with_result() {
    let bus = ToggleBroadcast::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    bus.subscribe(move |toggle: SidebarToggle| sink.borrow_mut().push(toggle.is_open));

    let mut drawer =
        DrawerController::mount(DrawerConfig::default(), MemoryStore::new(), 1440.0, bus);
    assert!(seen.borrow().is_empty());

    drawer.toggle_desktop();
    drawer.toggle_mobile();
    drawer.toggle_desktop();
    drawer.toggle_desktop();
    assert_eq!(*seen.borrow(), vec![false, true, false]);
}

#[test]
fn unsubscribed_listener_hears_nothing() {
    let bus = ToggleBroadcast::new();
    let seen = Rc::new(RefCell::new(0));
    let sink = seen.clone();
    let id = bus.subscribe(move |_| *sink.borrow_mut() += 1);

    let mut drawer =
        DrawerController::mount(DrawerConfig::default(), MemoryStore::new(), 1440.0, bus.clone());
    drawer.toggle_desktop();
    assert!(bus.unsubscribe(id));
    drawer.toggle_desktop();
    assert_eq!(*seen.borrow(), 1);
}

#[test]
fn failed_write_keeps_memory_state() {
    let inner = MemoryStore::with_entry(KEY, "true");
    let mut drawer = DrawerController::mount(
        DrawerConfig::default(),
        ReadOnlyStore(inner.clone()),
        1440.0,
        ToggleBroadcast::new(),
    );
    assert!(drawer.desktop_open());
    assert!(!drawer.toggle_desktop());
    assert!(!drawer.desktop_open());
    assert_eq!(inner.raw(KEY).as_deref(), Some("true"));
}

#[test]
fn unavailable_storage_falls_back_to_open() {
    let drawer = DrawerController::mount(
        DrawerConfig::default(),
        UnavailableStore,
        1440.0,
        ToggleBroadcast::new(),
    );
    assert!(drawer.desktop_open());
}

#[test]
fn custom_storage_key_is_used() {
    let config = DrawerConfig::from_json(r#"{ "storage_key": "nav-drawer" }"#).unwrap();
    let store = MemoryStore::new();
    let mut drawer = DrawerController::mount(config, store.clone(), 1440.0, ToggleBroadcast::new());
    drawer.toggle_desktop();
    assert_eq!(store.raw("nav-drawer").as_deref(), Some("false"));
    assert_eq!(store.raw(KEY), None);
}

#[test]
fn toggle_payload_serialises_as_is_open() {
    let json = serde_json::to_string(&SidebarToggle { is_open: true }).unwrap();
    assert_eq!(json, r#"{"isOpen":true}"#);
}

use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use mts_theme::{
    FileStore, ManualSignal, MemoryStore, PollingSignal, PresentationSink, ResolvedTheme,
    RootAttributes, ThemeBundle, ThemeChange, ThemeConfig, ThemePreference, ThemeRuntime,
    THEME_ATTRIBUTE,
};
use pretty_assertions::assert_eq;

/// Sink that records every theme it is given
#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<ResolvedTheme>>>);

impl Recorder {
    fn applied(&self) -> Vec<ResolvedTheme> {
        self.0.borrow().clone()
    }
}

impl PresentationSink for Recorder {
    fn apply_resolved_theme(&mut self, theme: ResolvedTheme) {
        self.0.borrow_mut().push(theme);
    }
}

fn runtime_with(store: MemoryStore, signal: ManualSignal, sink: Recorder) -> ThemeRuntime {
    ThemeRuntime::new(ThemeConfig::default(), store, signal, sink)
}

#[test]
fn stored_preference_takes_precedence() {
    for (stored, expected) in [
        ("light", ResolvedTheme::Light),
        ("dark", ResolvedTheme::Dark),
    ] {
        let sink = Recorder::default();
        let runtime = runtime_with(
            MemoryStore::with_entry("mts-theme", stored),
            ManualSignal::new(!expected.is_dark()),
            sink.clone(),
        );

        assert_eq!(runtime.preference().as_str(), stored);
        assert_eq!(runtime.resolved_theme(), expected);
        assert_eq!(sink.applied(), vec![expected]);
    }
}

#[test]
fn invalid_stored_value_falls_back_to_default() {
    let store = MemoryStore::with_entry("mts-theme", "nope");
    let runtime = runtime_with(store.clone(), ManualSignal::new(false), Recorder::default());

    assert_eq!(runtime.preference(), ThemePreference::System);
    assert_eq!(runtime.resolved_theme(), ResolvedTheme::Light);
    // Initialization only reads.
    assert_eq!(store.value("mts-theme").as_deref(), Some("nope"));
}

#[test]
fn stored_values_are_case_sensitive() {
    let runtime = runtime_with(
        MemoryStore::with_entry("mts-theme", "Dark"),
        ManualSignal::new(false),
        Recorder::default(),
    );
    assert_eq!(runtime.preference(), ThemePreference::System);
}

#[test]
fn custom_storage_key_and_default() {
    let store = MemoryStore::with_entry("mts-theme", "dark");
    let config = ThemeConfig::new()
        .with_storage_key("acme-theme")
        .with_default_preference(ThemePreference::Light);
    let runtime = ThemeRuntime::new(
        config,
        store.clone(),
        ManualSignal::new(true),
        Recorder::default(),
    );

    // The default key is not consulted.
    assert_eq!(runtime.preference(), ThemePreference::Light);
    assert!(!runtime.is_following_system());

    runtime.set_preference(ThemePreference::Dark);
    assert_eq!(store.value("acme-theme").as_deref(), Some("dark"));

    runtime.set_preference(ThemePreference::Light);
    assert!(!store.contains_key("acme-theme"));
}

#[test]
fn setting_the_default_removes_the_stored_key() {
    let store = MemoryStore::new();
    let runtime = runtime_with(store.clone(), ManualSignal::new(false), Recorder::default());

    runtime.set_preference(ThemePreference::Dark);
    assert_eq!(store.value("mts-theme").as_deref(), Some("dark"));

    runtime.set_preference(ThemePreference::System);
    assert!(!store.contains_key("mts-theme"));
    assert!(store.is_empty());
}

#[test]
fn system_preference_follows_live_changes() {
    let signal = ManualSignal::new(false);
    let sink = Recorder::default();
    let runtime = runtime_with(MemoryStore::new(), signal.clone(), sink.clone());
    assert_eq!(runtime.resolved_theme(), ResolvedTheme::Light);

    signal.set_dark_preferred(true);
    assert_eq!(runtime.resolved_theme(), ResolvedTheme::Dark);
    assert_eq!(runtime.preference(), ThemePreference::System);

    signal.set_dark_preferred(false);
    assert_eq!(
        sink.applied(),
        vec![ResolvedTheme::Light, ResolvedTheme::Dark, ResolvedTheme::Light]
    );
}

#[test]
fn explicit_preference_detaches_from_signal() {
    let signal = ManualSignal::new(true);
    let sink = Recorder::default();
    let runtime = runtime_with(MemoryStore::new(), signal.clone(), sink.clone());
    assert_eq!(signal.listener_count(), 1);

    runtime.set_preference(ThemePreference::Light);
    assert_eq!(signal.listener_count(), 0);

    signal.set_dark_preferred(false);
    signal.set_dark_preferred(true);
    assert_eq!(runtime.resolved_theme(), ResolvedTheme::Light);
    assert_eq!(sink.applied(), vec![ResolvedTheme::Dark, ResolvedTheme::Light]);

    // Back to system: current value applies and changes are followed again.
    runtime.set_preference(ThemePreference::System);
    assert_eq!(signal.listener_count(), 1);
    assert_eq!(runtime.resolved_theme(), ResolvedTheme::Dark);
    signal.set_dark_preferred(false);
    assert_eq!(runtime.resolved_theme(), ResolvedTheme::Light);
}

#[test]
fn switching_to_system_twice_keeps_one_subscription() {
    let signal = ManualSignal::new(false);
    let sink = Recorder::default();
    let runtime = runtime_with(MemoryStore::new(), signal.clone(), sink.clone());

    runtime.set_preference(ThemePreference::System);
    runtime.set_preference(ThemePreference::System);
    assert_eq!(signal.listener_count(), 1);

    signal.set_dark_preferred(true);
    // One init, two explicit sets, one live change.
    assert_eq!(sink.applied().len(), 4);
}

#[test]
fn dropping_runtime_tears_down_subscription() {
    let signal = ManualSignal::new(false);
    let root = RootAttributes::new();
    let runtime = ThemeRuntime::new(
        ThemeConfig::default(),
        MemoryStore::new(),
        signal.clone(),
        root.clone(),
    );
    let handle = runtime.handle();
    assert_eq!(signal.listener_count(), 1);

    drop(runtime);
    assert_eq!(signal.listener_count(), 0);
    assert!(!handle.is_alive());

    signal.set_dark_preferred(true);
    assert_eq!(root.attribute(THEME_ATTRIBUTE), None);
}

#[test]
#[should_panic(expected = "ThemeHandle used after its ThemeRuntime was dropped")]
fn handle_outliving_runtime_panics() {
    let runtime = ThemeRuntime::builder().build();
    let handle = runtime.handle();
    drop(runtime);
    handle.set_preference(ThemePreference::Dark);
}

#[test]
fn end_to_end_with_root_attributes() {
    let store = MemoryStore::new();
    let signal = ManualSignal::new(true);
    let root = RootAttributes::new();
    let runtime = ThemeRuntime::new(
        ThemeConfig::default(),
        store.clone(),
        signal.clone(),
        root.clone(),
    );

    assert_eq!(runtime.preference(), ThemePreference::System);
    assert_eq!(runtime.resolved_theme(), ResolvedTheme::Dark);
    assert_eq!(root.attribute(THEME_ATTRIBUTE).as_deref(), Some("dark"));

    runtime.set_preference(ThemePreference::Light);
    assert_eq!(runtime.resolved_theme(), ResolvedTheme::Light);
    assert_eq!(root.attribute(THEME_ATTRIBUTE), None);
    assert_eq!(store.value("mts-theme").as_deref(), Some("light"));

    signal.set_dark_preferred(false);
    signal.set_dark_preferred(true);
    assert_eq!(root.attribute(THEME_ATTRIBUTE), None);
}

#[test]
fn handles_and_observers_share_state() {
    let runtime = ThemeRuntime::builder()
        .signal(ManualSignal::new(false))
        .build();
    let handle = runtime.handle();
    let other = handle.clone();

    let changes = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&changes);
    let _sub = handle.subscribe(move |change| log.borrow_mut().push(*change));

    other.toggle();
    assert_eq!(runtime.preference(), ThemePreference::Dark);
    assert_eq!(*handle.theme(), *ThemeBundle::default().dark());

    handle.toggle();
    assert_eq!(
        *changes.borrow(),
        vec![
            ThemeChange {
                preference: ThemePreference::Dark,
                resolved: ResolvedTheme::Dark,
            },
            ThemeChange {
                preference: ThemePreference::Light,
                resolved: ResolvedTheme::Light,
            },
        ]
    );
}

#[test]
fn file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.toml");

    {
        let runtime = ThemeRuntime::builder()
            .store(FileStore::new(&path))
            .signal(ManualSignal::new(false))
            .build();
        runtime.set_preference(ThemePreference::Dark);
    }
    assert_eq!(fs::read_to_string(&path).unwrap().trim(), "mts-theme = \"dark\"");

    let runtime = ThemeRuntime::builder()
        .store(FileStore::new(&path))
        .signal(ManualSignal::new(false))
        .build();
    assert_eq!(runtime.preference(), ThemePreference::Dark);
    assert_eq!(runtime.resolved_theme(), ResolvedTheme::Dark);

    runtime.set_preference(ThemePreference::System);
    assert_eq!(fs::read_to_string(&path).unwrap().trim(), "");
}

#[test]
fn corrupt_file_store_degrades_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.toml");
    fs::write(&path, "mts-theme = = dark").unwrap();

    let runtime = ThemeRuntime::builder()
        .store(FileStore::new(&path))
        .signal(ManualSignal::new(true))
        .build();

    assert_eq!(runtime.preference(), ThemePreference::System);
    assert_eq!(runtime.resolved_theme(), ResolvedTheme::Dark);

    // The next explicit choice replaces the unreadable file.
    runtime.set_preference(ThemePreference::Light);
    drop(runtime);

    let runtime = ThemeRuntime::builder()
        .store(FileStore::new(&path))
        .signal(ManualSignal::new(true))
        .build();
    assert_eq!(runtime.preference(), ThemePreference::Light);
}

#[test]
fn file_store_shared_with_other_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.toml");
    fs::write(&path, "window-width = 1280\n").unwrap();

    let runtime = ThemeRuntime::builder()
        .store(FileStore::new(&path))
        .signal(ManualSignal::new(false))
        .build();
    runtime.set_preference(ThemePreference::Dark);
    drop(runtime);

    let body = fs::read_to_string(&path).unwrap();
    assert!(body.contains("window-width = 1280"), "{body}");

    let runtime = ThemeRuntime::builder()
        .store(FileStore::new(&path))
        .signal(ManualSignal::new(false))
        .build();
    assert_eq!(runtime.preference(), ThemePreference::Dark);
}

#[test]
fn polling_signal_drives_runtime() {
    let dark = Rc::new(std::cell::Cell::new(false));
    let probe = Rc::clone(&dark);
    let signal = PollingSignal::new(move || probe.get());
    let runtime = ThemeRuntime::builder().signal(signal.clone()).build();

    dark.set(true);
    assert_eq!(runtime.resolved_theme(), ResolvedTheme::Light);
    assert!(signal.poll());
    assert_eq!(runtime.resolved_theme(), ResolvedTheme::Dark);
}

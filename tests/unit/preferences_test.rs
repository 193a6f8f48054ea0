//! Unit tests for the persisted UI preferences.

use lexikid::storage::{PreferenceStore, TomlPreferenceStore, UiPreferences, UI_PREFERENCES_KEY};
use tempfile::TempDir;

#[test]
fn test_missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let store = TomlPreferenceStore::new(dir.path());

    let preferences = store.load().unwrap();
    assert!(preferences.sound_enabled);
    assert!(!preferences.has_interacted);
}

#[test]
fn test_preferences_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let store = TomlPreferenceStore::new(dir.path());
    store
        .save(&UiPreferences {
            sound_enabled: false,
            has_interacted: true,
        })
        .unwrap();

    let reopened = TomlPreferenceStore::new(dir.path());
    let preferences = reopened.load().unwrap();
    assert!(!preferences.sound_enabled);
    assert!(preferences.has_interacted);
    assert!(reopened
        .path()
        .ends_with(format!("{}.toml", UI_PREFERENCES_KEY)));
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let store = TomlPreferenceStore::new(dir.path());
    std::fs::write(store.path(), "sound_enabled = \"maybe\"").unwrap();

    assert!(store.load().is_err());
}

#[test]
fn test_update_records_interaction_once() {
    let dir = TempDir::new().unwrap();
    let store = TomlPreferenceStore::new(dir.path());

    let mut firsts = Vec::new();
    for _ in 0..2 {
        store
            .update(&mut |p| firsts.push(p.record_interaction()))
            .unwrap();
    }

    assert_eq!(firsts, vec![true, false]);
    assert!(TomlPreferenceStore::new(dir.path()).load().unwrap().has_interacted);
}

#[test]
fn test_update_replaces_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let store = TomlPreferenceStore::new(dir.path());
    std::fs::write(store.path(), "this is = = not toml").unwrap();

    // Same value as the default, the file is still rewritten
    let preferences = store.update(&mut |p| p.sound_enabled = true).unwrap();
    assert!(preferences.sound_enabled);
    assert!(store.load().unwrap().sound_enabled);

    let reopened = TomlPreferenceStore::new(dir.path()).load().unwrap();
    assert_eq!(reopened, preferences);
}

#[test]
fn test_failed_write_still_holds_in_memory() {
    let dir = TempDir::new().unwrap();
    // A regular file where the data directory should be makes every write fail
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();
    let store = TomlPreferenceStore::new(&blocker);

    let result = store.update(&mut |p| {
        p.record_interaction();
    });
    assert!(result.is_err());
    assert!(store.load().unwrap().has_interacted);
}

//! Theme persistence through the TOML file store.

use tictac::{FileThemeStore, Theme, ThemePreference, ThemeStore};

#[test]
fn test_missing_file_loads_light() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileThemeStore::new(dir.path().join("theme.toml"));
    assert_eq!(store.load().unwrap(), None);
    assert_eq!(ThemePreference::load(store).theme(), Theme::Light);
}

#[test]
fn test_toggle_persists_across_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.toml");

    let mut preference = ThemePreference::load(FileThemeStore::new(&path));
    assert_eq!(preference.toggle().unwrap(), Theme::Dark);

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.trim(), r#"gameOptionsTheme = "dark""#);

    let mut reloaded = ThemePreference::load(FileThemeStore::new(&path));
    assert_eq!(reloaded.theme(), Theme::Dark);
    assert_eq!(reloaded.toggle().unwrap(), Theme::ColorfulRgb);
    assert_eq!(reloaded.toggle().unwrap(), Theme::Light);
    assert_eq!(
        FileThemeStore::new(&path).load().unwrap().as_deref(),
        Some("light")
    );
}

#[test]
fn test_unknown_stored_name_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.toml");
    std::fs::write(&path, "gameOptionsTheme = \"neon\"\n").unwrap();

    let preference = ThemePreference::load(FileThemeStore::new(&path));
    assert_eq!(preference.theme(), Theme::Light);
}

#[test]
fn test_corrupt_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.toml");
    std::fs::write(&path, "this is not toml = = =").unwrap();

    let store = FileThemeStore::new(&path);
    assert!(store.load().is_err());
    assert_eq!(ThemePreference::load(store).theme(), Theme::Light);
}

#[test]
fn test_set_writes_through() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.toml");

    let mut preference = ThemePreference::load(FileThemeStore::new(&path));
    preference.set(Theme::ColorfulRgb).unwrap();
    assert_eq!(
        ThemePreference::load(FileThemeStore::new(&path)).theme(),
        Theme::ColorfulRgb
    );
}

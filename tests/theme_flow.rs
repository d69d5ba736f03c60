//! End-to-end theme behavior: persistence across sessions and the
//! preference/resolution contract.

use ambiance::{
    set_mode_detector, ColorMode, PreferenceStore, ThemeController, ThemePreference,
};
use proptest::prelude::*;
use serial_test::serial;

fn preference_strategy() -> impl Strategy<Value = ThemePreference> {
    prop_oneof![
        Just(ThemePreference::Light),
        Just(ThemePreference::Dark),
        Just(ThemePreference::System),
    ]
}

proptest! {
    /// For any sequence of valid set_preference calls, the committed
    /// preference is the most recently set value and the resolved mode
    /// follows the decision table.
    #[test]
    #[serial]
    fn committed_preference_is_last_write(sequence in prop::collection::vec(preference_strategy(), 1..16)) {
        set_mode_detector(|| ColorMode::Dark);
        let mut controller = ThemeController::ephemeral();
        for preference in &sequence {
            controller.set_preference(*preference);
        }

        let last = *sequence.last().unwrap();
        let (preference, resolved) = controller.state();
        prop_assert_eq!(preference, last);
        prop_assert_eq!(resolved, last.resolve(ColorMode::Dark));
        prop_assert_eq!(controller.visual_root().is_dark(), resolved == ColorMode::Dark);
    }
}

#[test]
#[serial]
fn preference_survives_across_sessions() {
    set_mode_detector(|| ColorMode::Light);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut first = ThemeController::new(Some(PreferenceStore::at(&path)));
    first.set_preference(ThemePreference::Dark);
    drop(first);

    let second = ThemeController::new(Some(PreferenceStore::at(&path)));
    assert_eq!(second.state(), (ThemePreference::Dark, ColorMode::Dark));
    assert!(second.visual_root().is_dark());
}

#[test]
#[serial]
fn toggle_override_survives_across_sessions() {
    set_mode_detector(|| ColorMode::Dark);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    // Toggling away from system commits a concrete override.
    let mut first = ThemeController::new(Some(PreferenceStore::at(&path)));
    first.toggle();
    assert_eq!(first.state(), (ThemePreference::Light, ColorMode::Light));
    drop(first);

    // The override holds in the next session even though the OS is dark.
    let second = ThemeController::new(Some(PreferenceStore::at(&path)));
    assert_eq!(second.state(), (ThemePreference::Light, ColorMode::Light));
}

#[test]
#[serial]
fn corrupt_persisted_value_falls_back_to_system() {
    set_mode_detector(|| ColorMode::Dark);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, r#"{ "theme": "sepia" }"#).unwrap();

    let controller = ThemeController::new(Some(PreferenceStore::at(&path)));
    assert_eq!(
        controller.state(),
        (ThemePreference::System, ColorMode::Dark)
    );
}

#[test]
#[serial]
fn fresh_session_defaults_to_system_resolution() {
    set_mode_detector(|| ColorMode::Light);
    let dir = tempfile::tempdir().unwrap();
    let controller = ThemeController::new(Some(PreferenceStore::at(dir.path().join("state.json"))));

    let (preference, resolved) = controller.state();
    assert_eq!(preference, ThemePreference::System);
    assert_eq!(resolved, ColorMode::Light);
    assert!(!controller.visual_root().is_dark());
}

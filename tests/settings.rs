mod common;

mod tests {
    use myrtio_strip_player::{
        PatternId, PersistenceError, PlaybackSettings, SettingsAdapter, SettingsStore,
    };

    use super::common::MemoryStore;

    const MAX_LEDS: usize = 100;

    #[test]
    fn test_load_uses_defaults_for_missing_keys() {
        let mut adapter = SettingsAdapter::new(MemoryStore::with(&[("led.pattern", 5)]));
        let settings = adapter.load(&PlaybackSettings::default(), MAX_LEDS);

        assert_eq!(
            settings,
            PlaybackSettings {
                pattern: PatternId::Glow,
                ..PlaybackSettings::default()
            }
        );
    }

    #[test]
    fn test_save_of_loaded_settings_is_noop() {
        let mut adapter = SettingsAdapter::new(MemoryStore::with(&[
            ("led.on", 1),
            ("led.count", 300),
            ("led.duration", 2),
        ]));
        let settings = adapter.load(&PlaybackSettings::default(), MAX_LEDS);
        assert_eq!(settings.led_count, 100);
        assert_eq!(settings.duration_secs, 5);

        assert_eq!(adapter.save(&settings), Ok(false));
        assert_eq!(adapter.store().commits, 0);
        assert!(adapter.store().writes.is_empty());
    }

    #[test]
    fn test_save_writes_changed_fields_once() {
        let mut adapter = SettingsAdapter::new(MemoryStore::default());
        let mut settings = adapter.load(&PlaybackSettings::default(), MAX_LEDS);

        settings.pattern = PatternId::Propeller;
        settings.playlist = true;
        assert_eq!(adapter.save(&settings), Ok(true));

        let store = adapter.store();
        assert_eq!(store.commits, 1);
        assert_eq!(
            store.writes,
            [
                ("led.pattern".to_string(), 8),
                ("led.playlist".to_string(), 1)
            ]
        );
        assert_eq!(adapter.saved(), Some(&settings));
    }

    #[test]
    fn test_save_before_load_writes_everything() {
        let mut adapter = SettingsAdapter::new(MemoryStore::default());

        assert_eq!(adapter.save(&PlaybackSettings::default()), Ok(true));
        assert_eq!(adapter.store().writes.len(), 5);
        assert_eq!(adapter.store().get("led.duration"), Some(30));
    }

    #[test]
    fn test_failed_commit_rewrites_every_field() {
        let mut adapter = SettingsAdapter::new(MemoryStore::default());
        let loaded = adapter.load(&PlaybackSettings::default(), MAX_LEDS);
        adapter.store_mut().fail_commit = true;

        let off = PlaybackSettings {
            power: false,
            ..loaded
        };
        assert_eq!(adapter.save(&off), Err(PersistenceError::Driver));
        assert_eq!(adapter.saved(), None);
        assert_eq!(adapter.store().get("led.on"), Some(0));

        adapter.store_mut().fail_commit = false;
        let writes = adapter.store().writes.len();
        assert_eq!(adapter.save(&loaded), Ok(true));
        assert_eq!(adapter.store().writes.len(), writes + 5);
        assert_eq!(adapter.store().get("led.on"), Some(1));
        assert_eq!(adapter.saved(), Some(&loaded));
    }
}

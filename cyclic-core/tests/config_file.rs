//! Loading slider configs from disk.

use std::io::Write;

use cyclic_core::{ConfigError, HeadlessSurface, SliderConfig};

fn write_config(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn load_and_mount_clock_hours() {
    let file = write_config(
        r#"
        value = 11.0
        max = 12.0
        label = "Hour"
        unit = "h"
        "#,
    );
    let config = SliderConfig::load(file.path()).unwrap();
    let mut slider = config.build(HeadlessSurface::new(120.0)).unwrap();

    assert_eq!(slider.step_up(), Some(0.0));
    assert_eq!(config.readout(slider.value()), "Hour: 0h");
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = SliderConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn zero_step_is_rejected_on_load() {
    let file = write_config("value = 1.0\nstep = 0.0\n");
    let err = SliderConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

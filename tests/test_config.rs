use std::io::Write;
use std::path::Path;

use pixel_runner::config::Config;
use pixel_runner::error::ConfigError;

use tempfile::NamedTempFile;

fn write_config(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

#[test]
fn loads_overrides_from_file() {
    let file = write_config(r#"{ "cheat_code": "moo", "bull": { "duration": 300 } }"#);
    let cfg = Config::load(file.path()).unwrap();
    assert_eq!(cfg.cheat_code, "moo");
    assert_eq!(cfg.bull.duration, 300);
    assert_eq!(cfg.bull.speed, 4.0);
    assert_eq!(cfg.canvas.ground_y, 350.0);
}

#[test]
fn empty_object_is_default() {
    let file = write_config("{}");
    assert_eq!(Config::load(file.path()).unwrap(), Config::default());
}

#[test]
fn missing_file_is_io_error() {
    let err = Config::load(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("here.json"));
}

#[test]
fn malformed_json_is_parse_error() {
    let file = write_config(r#"{ "fps": "fast" "#);
    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn out_of_range_values_are_rejected() {
    let file = write_config(r#"{ "physics": { "jump_impulse": 5.0 } }"#);
    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn ground_must_lie_within_canvas() {
    let mut cfg = Config::default();
    cfg.canvas.ground_y = 500.0;
    assert!(cfg.validate().is_err());

    cfg.canvas.ground_y = 350.0;
    cfg.obstacles.airborne_altitudes.clear();
    assert!(cfg.validate().is_err());
}

#[test]
fn negative_speed_step_is_rejected() {
    let mut cfg = Config::default();
    cfg.speed.step = -0.5;
    assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));

    cfg.speed.step = 0.0;
    assert!(cfg.validate().is_ok());
}

#[test]
fn zero_bull_duration_is_rejected() {
    let file = write_config(r#"{ "bull": { "duration": 0 } }"#);
    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

use pointscale::{Error, GeneratorConfig, generate};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn parse_lines(path: &Path) -> Vec<[f64; 3]> {
    let content = fs::read_to_string(path).expect("Should read point file");
    content
        .lines()
        .map(|line| {
            let fields: Vec<f64> = line
                .split(' ')
                .map(|f| f.parse().unwrap_or_else(|_| panic!("Field {:?} is not a float", f)))
                .collect();
            assert_eq!(fields.len(), 3, "Line {:?} should have three coordinates", line);
            [fields[0], fields[1], fields[2]]
        })
        .collect()
}

#[test]
fn test_ten_points_to_fresh_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("points.txt");
    let config = GeneratorConfig {
        count: 10,
        output: path.clone(),
        ..Default::default()
    };

    let summary = generate(&config).expect("Generation should succeed");
    assert_eq!(summary.count, 10);
    assert_eq!(summary.path, path);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.ends_with('\n'), "File should be newline-terminated");
    assert_eq!(content.lines().count(), 10);
    assert_eq!(parse_lines(&path).len(), 10);
}

#[test]
fn test_coordinates_in_range_with_six_digits() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("points.txt");
    let config = GeneratorConfig {
        count: 2_000,
        output: path.clone(),
        ..Default::default()
    };
    generate(&config).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    for field in content.split_whitespace() {
        let (_, fraction) = field.split_once('.').expect("Coordinate should have a decimal point");
        assert!(fraction.len() <= 6, "Coordinate {} has more than 6 fractional digits", field);
        let v: f64 = field.parse().unwrap();
        assert!((0.0..=9.0).contains(&v), "Coordinate {} is outside [0, 9]", v);
    }
}

#[test]
fn test_unseeded_runs_differ() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("a.txt");
    let second = dir.path().join("b.txt");
    generate(&GeneratorConfig { count: 100, output: first.clone(), ..Default::default() }).unwrap();
    generate(&GeneratorConfig { count: 100, output: second.clone(), ..Default::default() }).unwrap();

    let a = parse_lines(&first);
    let b = parse_lines(&second);
    assert_eq!(a.len(), b.len());
    assert_ne!(a, b, "Two entropy-seeded runs should not produce identical files");
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("a.txt");
    let second = dir.path().join("b.txt");
    generate(&GeneratorConfig { count: 50, output: first.clone(), seed: Some(42), ..Default::default() }).unwrap();
    generate(&GeneratorConfig { count: 50, output: second.clone(), seed: Some(42), ..Default::default() }).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_existing_file_is_truncated() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("points.txt");
    fs::write(&path, "stale\n".repeat(500)).unwrap();

    generate(&GeneratorConfig { count: 3, output: path.clone(), ..Default::default() }).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 3);
    assert!(!content.contains("stale"));
}

#[test]
fn test_zero_points_gives_empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("points.txt");
    let summary = generate(&GeneratorConfig { count: 0, output: path.clone(), ..Default::default() }).unwrap();
    assert_eq!(summary.count, 0);
    assert!(fs::read_to_string(&path).unwrap().is_empty());
}

#[test]
fn test_custom_bounds_and_precision() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("points.txt");
    let config = GeneratorConfig {
        count: 200,
        output: path.clone(),
        seed: Some(1),
        min: -1.0,
        max: 1.0,
        precision: 2,
    };
    generate(&config).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    for field in content.split_whitespace() {
        assert_eq!(field.split_once('.').map(|(_, f)| f.len()), Some(2), "Field {}", field);
        let v: f64 = field.parse().unwrap();
        assert!((-1.0..=1.0).contains(&v));
    }
}

#[test]
fn test_unwritable_path_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("points.txt");
    let result = generate(&GeneratorConfig { count: 10, output: path, ..Default::default() });
    assert!(matches!(result, Err(Error::Io(_))), "Expected an I/O error, got {:?}", result);
}

#[test]
fn test_invalid_config_writes_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("points.txt");
    let result = generate(&GeneratorConfig { min: 5.0, max: 1.0, output: path.clone(), ..Default::default() });
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
    assert!(!path.exists(), "Rejected config should not create the file");
}

#[test]
fn test_overflowing_bounds_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("points.txt");
    let result = generate(&GeneratorConfig { min: -1e308, max: 1e308, output: path.clone(), ..Default::default() });
    assert!(matches!(result, Err(Error::InvalidConfig(_))), "Expected a config error, got {:?}", result);
    assert!(!path.exists());
}

#[test]
fn test_confirmation_message() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("points.txt");
    let summary = generate(&GeneratorConfig { count: 10, output: path.clone(), ..Default::default() }).unwrap();
    let message = summary.confirmation();
    assert!(message.starts_with("10 3D points saved to '"));
    assert!(message.contains(&path.display().to_string()));
}

//! Tests for generated names and word-list loading.

use islands::{NamesConfig, RANDOM_NAME_MAX, RANDOM_NAME_MIN, random_name};
use std::io::Write;
use tempfile::NamedTempFile;

fn url_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

#[test]
fn test_random_name_length_and_alphabet() {
    for _ in 0..500 {
        let name = random_name();
        assert!(
            (RANDOM_NAME_MIN..=RANDOM_NAME_MAX).contains(&name.len()),
            "bad length: {name}"
        );
        assert!(name.chars().all(url_safe), "bad character in {name}");
    }
}

#[test]
fn test_random_names_vary() {
    let names: std::collections::HashSet<_> = (0..50).map(|_| random_name()).collect();
    assert!(names.len() > 1);
}

#[test]
fn test_haiku_name_uses_configured_words() {
    let config = NamesConfig::new(
        vec!["bold".into(), "shy".into()],
        vec!["frog".into(), "pond".into()],
    )
    .unwrap();

    for _ in 0..100 {
        let name = config.haiku_name();
        let mut parts = name.splitn(3, '-');
        let adjective = parts.next().unwrap();
        let noun = parts.next().unwrap();
        let number: u32 = parts.next().unwrap().parse().unwrap();
        assert!(["bold", "shy"].contains(&adjective));
        assert!(["frog", "pond"].contains(&noun));
        assert!((1..=9999).contains(&number));
    }
}

#[test]
fn test_load_names_from_file() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "adjectives = [\"misty\"]").unwrap();
    writeln!(file, "nouns = [\"island\"]").unwrap();

    let config = NamesConfig::from_file(file.path()).expect("load");
    assert_eq!(config.adjectives(), &vec!["misty".to_string()]);
    assert!(config.haiku_name().starts_with("misty-island-"));
}

#[test]
fn test_missing_file_is_error() {
    let err = NamesConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(err.message.contains("read"));
}

#[test]
fn test_empty_nouns_in_file_is_error() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "adjectives = [\"misty\"]\nnouns = []").unwrap();
    assert!(NamesConfig::from_file(file.path()).is_err());
}

//! Structured-file I/O: YAML, JSON, and tab-separated values.
//!
//! Each helper performs a single open-read-close or open-write-close
//! cycle. There is no locking and no partial-write recovery; callers
//! are responsible for serializing access to a given path.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Read and deserialize a YAML document.
pub fn read_yaml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Serialize `data` as YAML and write it to `path`.
pub fn write_yaml<T: Serialize>(path: impl AsRef<Path>, data: &T) -> Result<()> {
    let content = serde_yaml::to_string(data)?;
    fs::write(path, content)?;
    Ok(())
}

/// Read and deserialize a JSON document.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Serialize `data` as compact JSON and write it to `path`.
///
/// Non-ASCII characters are written verbatim, and there is no trailing
/// newline.
pub fn write_json<T: Serialize>(path: impl AsRef<Path>, data: &T) -> Result<()> {
    let content = serde_json::to_string(data)?;
    fs::write(path, content)?;
    Ok(())
}

/// Read a tab-separated file into rows of fields.
///
/// Exactly one trailing `\n` is chopped per line (a `\r` before it
/// survives), then each line is split on `\t`. Fields are not
/// unescaped. An empty file yields an empty vector.
pub fn read_tsv(path: impl AsRef<Path>) -> Result<Vec<Vec<String>>> {
    let content = fs::read_to_string(path)?;
    let mut rows = Vec::new();
    for line in content.split_inclusive('\n') {
        let line = line.strip_suffix('\n').unwrap_or(line);
        rows.push(line.split('\t').map(str::to_string).collect());
    }
    Ok(rows)
}

/// Write rows as tab-separated values, one row per line.
///
/// Fields are joined with a single `\t` and every row ends with `\n`.
/// Embedded tabs and newlines are not escaped, so a field containing
/// either will not survive a read-back intact.
pub fn write_tsv(path: impl AsRef<Path>, rows: &[Vec<String>]) -> Result<()> {
    let mut content = String::new();
    for row in rows {
        content.push_str(&row.join("\t"));
        content.push('\n');
    }
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Settings {
        name: String,
        retries: u32,
    }

    #[test]
    fn test_yaml_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.yaml");

        let settings = Settings {
            name: "backup".into(),
            retries: 3,
        };
        write_yaml(&path, &settings).unwrap();
        let loaded: Settings = read_yaml(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_yaml_mapping() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("map.yaml");

        let mut map = BTreeMap::new();
        map.insert("host".to_string(), "localhost".to_string());
        map.insert("名前".to_string(), "値".to_string());
        write_yaml(&path, &map).unwrap();
        let loaded: BTreeMap<String, String> = read_yaml(&path).unwrap();
        assert_eq!(loaded, map);
    }

    #[test]
    fn test_read_yaml_missing_file() {
        let dir = tempdir().unwrap();
        let result: Result<Settings> = read_yaml(dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = Settings {
            name: "deploy".into(),
            retries: 5,
        };
        write_json(&path, &settings).unwrap();
        let loaded: Settings = read_json(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_json_writes_non_ascii_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("unicode.json");

        let mut map = BTreeMap::new();
        map.insert("label".to_string(), "日本語".to_string());
        write_json(&path, &map).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("日本語"));
        assert!(!raw.ends_with('\n'));
    }

    #[test]
    fn test_read_json_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();
        let result: Result<Settings> = read_json(&path);
        assert!(matches!(result, Err(crate::Error::Json(_))));
    }

    #[test]
    fn test_tsv_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rows.tsv");

        let rows = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string()],
        ];
        write_tsv(&path, &rows).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\tb\nc\n");
        assert_eq!(read_tsv(&path).unwrap(), rows);
    }

    #[test]
    fn test_read_tsv_without_trailing_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial.tsv");
        fs::write(&path, "x\ty").unwrap();
        assert_eq!(
            read_tsv(&path).unwrap(),
            vec![vec!["x".to_string(), "y".to_string()]]
        );
    }

    #[test]
    fn test_read_tsv_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.tsv");
        fs::write(&path, "").unwrap();
        assert_eq!(read_tsv(&path).unwrap(), Vec::<Vec<String>>::new());
    }

    #[test]
    fn test_read_tsv_keeps_carriage_return() {
        // Only the \n is chopped; a \r before it belongs to the field.
        let dir = tempdir().unwrap();
        let path = dir.path().join("crlf.tsv");
        fs::write(&path, "a\r\n").unwrap();
        assert_eq!(read_tsv(&path).unwrap(), vec![vec!["a\r".to_string()]]);
    }

    #[test]
    fn test_write_tsv_does_not_escape_tabs() {
        // A field with an embedded tab is written as-is and reads back
        // as two fields.
        let dir = tempdir().unwrap();
        let path = dir.path().join("embedded.tsv");
        write_tsv(&path, &[vec!["a\tb".to_string()]]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\tb\n");
        assert_eq!(
            read_tsv(&path).unwrap(),
            vec![vec!["a".to_string(), "b".to_string()]]
        );
    }
}

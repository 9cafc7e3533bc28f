use crate::error::{ReportError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Returns `Ok(None)` when the file does not exist.
fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn parse_score(token: &str, path: &Path) -> Result<f64> {
    let value: f64 = token.parse().map_err(|_| ReportError::Parse {
        path: path.to_path_buf(),
        message: format!("not a number: {:?}", token),
    })?;

    if !value.is_finite() {
        return Err(ReportError::Parse {
            path: path.to_path_buf(),
            message: format!("non-finite score: {:?}", token),
        });
    }

    Ok(value)
}

/// Reads a single-score record. Every non-blank line must parse; the last
/// one holds the value.
pub fn read_scalar(path: &Path) -> Result<Option<f64>> {
    let Some(content) = read_optional(path)? else {
        return Ok(None);
    };

    let mut value = None;
    for line in content.lines().map(str::trim).filter(|line| !line.is_empty()) {
        value = Some(parse_score(line, path)?);
    }

    value.map(Some).ok_or_else(|| ReportError::Parse {
        path: path.to_path_buf(),
        message: "empty score file".to_string(),
    })
}

/// Reads a whitespace-separated score series, one value per turn. Every
/// line must parse; the last non-blank line is the series.
pub fn read_series(path: &Path) -> Result<Option<Vec<f64>>> {
    let Some(content) = read_optional(path)? else {
        return Ok(None);
    };

    let mut series = Vec::new();
    for line in content.lines().filter(|line| !line.trim().is_empty()) {
        series = line
            .split_whitespace()
            .map(|token| parse_score(token, path))
            .collect::<Result<Vec<_>>>()?;
    }

    if series.is_empty() {
        return Err(ReportError::Parse {
            path: path.to_path_buf(),
            message: "empty score series".to_string(),
        });
    }

    Ok(Some(series))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_scalar(&dir.path().join("final-score.txt")).unwrap(), None);
    }

    #[test]
    fn scalar_uses_last_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("final-score.txt");
        fs::write(&path, "12.5\n 17.25 \n\n").unwrap();
        assert_eq!(read_scalar(&path).unwrap(), Some(17.25));
    }

    #[test]
    fn scalar_garbage_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("final-score.txt");
        fs::write(&path, "twelve\n").unwrap();
        assert!(matches!(read_scalar(&path), Err(ReportError::Parse { .. })));

        fs::write(&path, "NaN\n").unwrap();
        assert!(matches!(read_scalar(&path), Err(ReportError::Parse { .. })));

        fs::write(&path, "").unwrap();
        assert!(matches!(read_scalar(&path), Err(ReportError::Parse { .. })));
    }

    #[test]
    fn scalar_garbage_on_earlier_line_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("final-score.txt");
        fs::write(&path, "garbage\n12.0\n").unwrap();
        assert!(matches!(read_scalar(&path), Err(ReportError::Parse { .. })));
    }

    #[test]
    fn series_parses_whitespace_separated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.txt");
        fs::write(&path, "10 9.5\t9.25  8\n").unwrap();
        assert_eq!(
            read_series(&path).unwrap(),
            Some(vec![10.0, 9.5, 9.25, 8.0])
        );
    }

    #[test]
    fn series_rejects_bad_token_and_empty_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.txt");
        fs::write(&path, "10 x 8").unwrap();
        assert!(matches!(read_series(&path), Err(ReportError::Parse { .. })));

        fs::write(&path, "  \n").unwrap();
        assert!(matches!(read_series(&path), Err(ReportError::Parse { .. })));

        assert_eq!(read_series(&dir.path().join("missing.txt")).unwrap(), None);
    }

    #[test]
    fn series_keeps_last_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.txt");
        fs::write(&path, "1 2 3\n4 5\n\n").unwrap();
        assert_eq!(read_series(&path).unwrap(), Some(vec![4.0, 5.0]));

        fs::write(&path, "1 bad 3\n4 5\n").unwrap();
        assert!(matches!(read_series(&path), Err(ReportError::Parse { .. })));
    }
}

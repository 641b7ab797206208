use crate::utils::error::{ReverserError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(ReverserError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ReverserError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 兩個檔案都存在時比較 canonical 路徑，否則比較字串
pub fn validate_distinct_paths(field_name: &str, input: &str, output: &str) -> Result<()> {
    let same_file = match (std::fs::canonicalize(input), std::fs::canonicalize(output)) {
        (Ok(input), Ok(output)) => input == output,
        _ => input == output,
    };

    if same_file {
        return Err(ReverserError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: output.to_string(),
            reason: "Output path must differ from the input path".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ReverserError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("io.input_path", "../data/in_file.txt").is_ok());
        assert!(validate_path("io.input_path", "").is_err());
        assert!(validate_path("io.input_path", "   ").is_err());
        assert!(validate_path("io.input_path", "in\0file").is_err());
    }

    #[test]
    fn test_validate_distinct_paths() {
        assert!(validate_distinct_paths("io.output_path", "a.txt", "b.txt").is_ok());
        assert!(validate_distinct_paths("io.output_path", "a.txt", "a.txt").is_err());
    }

    #[test]
    fn test_validate_distinct_paths_resolves_aliases() {
        let dir = tempfile::TempDir::new().unwrap();
        let input = dir.path().join("a.txt");
        let other = dir.path().join("b.txt");
        std::fs::write(&input, "abc\n").unwrap();
        std::fs::write(&other, "").unwrap();

        let input_str = input.display().to_string();
        let alias = dir.path().join(".").join("a.txt").display().to_string();
        assert_ne!(input_str, alias);
        assert!(validate_distinct_paths("io.output_path", &input_str, &alias).is_err());

        let other_str = other.display().to_string();
        assert!(validate_distinct_paths("io.output_path", &input_str, &other_str).is_ok());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("reverse.worker_threads", 4, 1, 1024).is_ok());
        assert!(validate_range("reverse.worker_threads", 0, 1, 1024).is_err());
        assert!(validate_range("reverse.worker_threads", 2048, 1, 1024).is_err());
    }
}

use std::fs;
use std::io;
use std::path::Path;

pub fn file_name(base_name: &str, suffix: &str) -> String {
    format!("{}{}", base_name, suffix)
}

pub fn with_final_newline(content: &str) -> String {
    format!("{}\n", content.trim_end())
}

pub fn write_artifact(dir: &Path, base_name: &str, suffix: &str, content: &str) -> io::Result<()> {
    fs::write(
        dir.join(file_name(base_name, suffix)),
        with_final_newline(content),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("fortune-cookies", ".md"), "fortune-cookies.md");
    }

    #[test]
    fn test_final_newline_appended() {
        assert_eq!(with_final_newline("abc"), "abc\n");
    }

    #[test]
    fn test_trailing_whitespace_trimmed() {
        assert_eq!(with_final_newline("abc  \n\n"), "abc\n");
    }

    #[test]
    fn test_empty_content_becomes_single_newline() {
        assert_eq!(with_final_newline(""), "\n");
    }

    #[test]
    fn test_leading_whitespace_kept() {
        assert_eq!(with_final_newline("  abc"), "  abc\n");
    }

    #[test]
    fn test_write_artifact_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "out", ".txt", "first").unwrap();
        write_artifact(dir.path(), "out", ".txt", "second  ").unwrap();
        let written = fs::read_to_string(dir.path().join("out.txt")).unwrap();
        assert_eq!(written, "second\n");
    }
}

use std::path::{Path, PathBuf};

// @module: File and path utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @generates: Renamed path next to the input file
    // @params: input_file, title
    pub fn build_renamed_path<P: AsRef<Path>>(input_file: P, title: &str) -> PathBuf {
        let input_file = input_file.as_ref();
        let parent = input_file.parent().unwrap_or_else(|| Path::new(""));

        let mut file_name = title.to_string();
        if let Some(ext) = input_file.extension() {
            file_name.push('.');
            file_name.push_str(&ext.to_string_lossy());
        }

        parent.join(file_name)
    }

    /// Strip characters that are unsafe in a file name from a title.
    ///
    /// Removes path separators and control characters; the model reply is not
    /// trusted to be path-safe.
    pub fn sanitize_title(title: &str) -> String {
        title
            .chars()
            .filter(|c| !matches!(c, '/' | '\\') && !c.is_control())
            .collect()
    }
}

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

const TMP_SUFFIX: &str = "tmp";

/// Writes `data` to `path` by staging it in a sibling temporary file first.
pub fn write_atomic(path: &Path, data: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path(Path::new("dir/config.json")),
            PathBuf::from("dir/config.json.tmp")
        );
        assert_eq!(tmp_path(Path::new("dir/state")), PathBuf::from("dir/state.tmp"));
    }

    #[test]
    fn write_atomic_replaces_contents_and_cleans_up() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sub").join("config.json");
        write_atomic(&path, "first").unwrap();
        write_atomic(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!tmp_path(&path).exists());
    }
}

use derive_new::new;
use std::path::PathBuf;

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

/// Text with exactly `lines` newline-terminated lines
pub fn lines_of_text(lines: usize) -> String {
    use fake::{Fake, faker::lorem::en::Sentence};

    (0..lines)
        .map(|_| format!("{}\n", Sentence(3..8).fake::<String>()))
        .collect()
}

/// Write an executable shell script and return its path
#[cfg(unix)]
pub fn write_script(path: PathBuf, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    write_file(FileSpec::new(path.clone(), format!("#!/bin/sh\n{body}")));
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .unwrap_or_else(|e| panic!("Failed to make {:?} executable: {}", path, e));

    path
}

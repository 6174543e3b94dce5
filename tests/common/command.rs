use crate::common::file::{FileSpec, lines_of_text, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use derive_new::new;
use rstest::fixture;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, new)]
pub struct Author {
    pub name: String,
    pub email: String,
}

pub fn generate_random_author() -> Author {
    use fake::Fake;
    use fake::faker::internet::en::FreeEmail;
    use fake::faker::name::en::Name;

    Author::new(Name().fake::<String>(), FreeEmail().fake::<String>())
}

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository with a single commit adding `1.txt` with three lines
#[fixture]
pub fn committed_repository_dir(repository_dir: TempDir) -> TempDir {
    run_git_command(repository_dir.path(), &["init", "--quiet"])
        .assert()
        .success();

    commit_lines(repository_dir.path(), "1.txt", 3, &generate_random_author());

    repository_dir
}

/// Directory that git will not treat as part of any enclosing repository
pub fn ceiling_for(dir: &Path) -> PathBuf {
    let dir = dir.canonicalize().expect("Failed to canonicalize temp dir");
    dir.parent().map(Path::to_path_buf).unwrap_or(dir)
}

pub fn run_logger_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("git-logger").expect("Failed to find git-logger binary");
    cmd.env("NO_PAGER", "1");
    cmd.env("NO_COLOR", "1");
    cmd.env("GIT_CEILING_DIRECTORIES", ceiling_for(dir));
    cmd.env_remove("GIT_LOGGER_FILE");
    cmd.env_remove("GIT_LOGGER_REPO");
    cmd.env_remove("GIT_LOGGER_GIT");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.env("GIT_CEILING_DIRECTORIES", ceiling_for(dir));
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Write `lines` lines to `file_name` and commit it as `author`
pub fn commit_lines(dir: &Path, file_name: &str, lines: usize, author: &Author) {
    write_file(FileSpec::new(dir.join(file_name), lines_of_text(lines)));

    run_git_command(dir, &["add", "."]).assert().success();

    run_git_command(
        dir,
        &["-c", "commit.gpgsign=false", "commit", "--quiet", "-m", "change"],
    )
    .envs(vec![
        ("GIT_AUTHOR_NAME", &author.name),
        ("GIT_AUTHOR_EMAIL", &author.email),
        ("GIT_COMMITTER_NAME", &author.name),
        ("GIT_COMMITTER_EMAIL", &author.email),
    ])
    .assert()
    .success();
}

/// Get the current HEAD commit SHA
pub fn get_head_commit_sha(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_git_command(dir, &["rev-parse", "HEAD"]).output()?;
    let stdout = String::from_utf8(output.stdout)?;

    Ok(stdout.trim().to_string())
}

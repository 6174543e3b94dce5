use crate::areas::git::Git;
use crate::artifacts::commit::diffstat::parse_added_lines;
use crate::artifacts::commit::record::{CommitRecord, Timestamp};
use crate::errors::{LoggerError, LoggerResult};
use derive_new::new;

const HEAD_HASH_ARGS: &[&str] = &["rev-parse", "HEAD"];
/// Followed by the resolved commit hash
const AUTHOR_ARGS: &[&str] = &["log", "-1", "--pretty=format:%an"];
/// Followed by the resolved commit hash
const DIFFSTAT_ARGS: &[&str] = &["show", "--stat", "--no-color", "--format="];

/// Reads the metadata of the commit at `HEAD`
#[derive(new)]
pub struct Inspector<'g> {
    git: &'g Git,
}

impl<'g> Inspector<'g> {
    /// Build a record for the latest commit, stamped with the current time
    ///
    /// Runs three git processes one after the other: hash, author name, diffstat.
    /// The later two name the hash returned by the first rather than `HEAD`.
    pub fn inspect_latest_commit(&self) -> LoggerResult<CommitRecord> {
        let commit_hash = self.git.run(HEAD_HASH_ARGS)?;
        if commit_hash.is_empty() {
            return Err(LoggerError::ToolEmpty {
                program: self.git.program().display().to_string(),
                args: HEAD_HASH_ARGS.join(" "),
            });
        }

        let user = self.git.run(&with_revision(AUTHOR_ARGS, &commit_hash))?;
        let added_lines = self.added_lines(&commit_hash)?;

        Ok(CommitRecord::new(
            Timestamp::now(),
            commit_hash,
            user,
            added_lines,
        ))
    }

    fn added_lines(&self, commit_hash: &str) -> LoggerResult<u64> {
        let args = with_revision(DIFFSTAT_ARGS, commit_hash);
        let summary = self.git.run(&args)?;

        parse_added_lines(&summary).map_err(|err| LoggerError::Decode {
            program: self.git.program().display().to_string(),
            args: args.join(" "),
            reason: err.to_string(),
        })
    }
}

fn with_revision<'a>(args: &[&'a str], revision: &'a str) -> Vec<&'a str> {
    let mut args = args.to_vec();
    args.push(revision);
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::areas::git::DEFAULT_GIT_PROGRAM;
    use crate::errors::ErrorKind;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;

    fn git_in(dir: &TempDir) -> Git {
        Git::new(DEFAULT_GIT_PROGRAM, dir.path().to_path_buf().into_boxed_path())
    }

    fn commit_all(git: &Git, author: &str, message: &str) {
        let author_config = format!("user.name={author}");
        git.run(&["add", "."]).unwrap();
        git.run(&[
            "-c",
            &author_config,
            "-c",
            "user.email=logger@example.com",
            "-c",
            "commit.gpgsign=false",
            "commit",
            "--quiet",
            "-m",
            message,
        ])
        .unwrap();
    }

    #[test]
    fn inspects_the_head_commit() {
        let dir = TempDir::new().unwrap();
        let git = git_in(&dir);
        git.run(&["init", "--quiet"]).unwrap();

        dir.child("a.txt").write_str("one\ntwo\nthree\n").unwrap();
        commit_all(&git, "Grace Hopper", "first");
        dir.child("b.txt").write_str("four\nfive\n").unwrap();
        commit_all(&git, "Zoë Łukasz 山田", "second");

        let record = Inspector::new(&git).inspect_latest_commit().unwrap();

        assert_eq!(record.commit_hash(), git.run(&["rev-parse", "HEAD"]).unwrap());
        assert_eq!(record.commit_hash().len(), 40);
        assert_eq!(record.user(), "Zoë Łukasz 山田");
        assert_eq!(record.added_lines(), 2);
    }

    #[test]
    fn message_mentioning_insertions_does_not_leak_into_the_count() {
        let dir = TempDir::new().unwrap();
        let git = git_in(&dir);
        git.run(&["init", "--quiet"]).unwrap();

        dir.child("a.txt").write_str("one\n").unwrap();
        commit_all(&git, "Grace Hopper", "revert 900 insertions(+) from last week");

        let record = Inspector::new(&git).inspect_latest_commit().unwrap();

        assert_eq!(record.added_lines(), 1);
    }

    #[test]
    fn deletion_only_commit_counts_zero_added_lines() {
        let dir = TempDir::new().unwrap();
        let git = git_in(&dir);
        git.run(&["init", "--quiet"]).unwrap();

        dir.child("a.txt").write_str("one\ntwo\n").unwrap();
        commit_all(&git, "Grace Hopper", "first");
        dir.child("a.txt").write_str("one\n").unwrap();
        commit_all(&git, "Grace Hopper", "trim");

        let record = Inspector::new(&git).inspect_latest_commit().unwrap();

        assert_eq!(record.added_lines(), 0);
    }

    /// Stand-in git whose `HEAD` has moved on once the hash has been read
    #[cfg(unix)]
    fn moving_head_git(dir: &TempDir) -> Git {
        use std::os::unix::fs::PermissionsExt;

        let script = dir.child("moving-git");
        script
            .write_str(
                "#!/bin/sh\n\
                 pinned=1111111111111111111111111111111111111111\n\
                 for last in \"$@\"; do :; done\n\
                 case \"$1\" in\n\
                 rev-parse) echo \"$pinned\" ;;\n\
                 log) [ \"$last\" = \"$pinned\" ] && echo 'Pinned Author' || echo 'Moved Author' ;;\n\
                 show) [ \"$last\" = \"$pinned\" ] && echo ' 1 file changed, 3 insertions(+)' \
                       || echo ' 1 file changed, 50 insertions(+)' ;;\n\
                 *) exit 1 ;;\n\
                 esac\n",
            )
            .unwrap();
        std::fs::set_permissions(script.path(), std::fs::Permissions::from_mode(0o755)).unwrap();

        Git::new(script.path(), dir.path().to_path_buf().into_boxed_path())
    }

    #[cfg(unix)]
    #[test]
    fn author_and_diffstat_come_from_the_resolved_hash() {
        let dir = TempDir::new().unwrap();
        let git = moving_head_git(&dir);

        let record = Inspector::new(&git).inspect_latest_commit().unwrap();

        assert_eq!(record.commit_hash(), "1111111111111111111111111111111111111111");
        assert_eq!(record.user(), "Pinned Author");
        assert_eq!(record.added_lines(), 3);
    }

    #[test]
    fn repository_without_commits_fails() {
        let dir = TempDir::new().unwrap();
        let git = git_in(&dir);
        git.run(&["init", "--quiet"]).unwrap();

        let err = Inspector::new(&git).inspect_latest_commit().unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ExternalTool);
    }
}

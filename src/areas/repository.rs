use crate::areas::git::Git;
use crate::areas::log_store::LogStore;
use crate::config::Config;
use anyhow::Context;
use std::cell::{RefCell, RefMut};

/// A git working directory paired with the commit log it feeds
pub struct Repository {
    writer: RefCell<Box<dyn std::io::Write>>,
    git: Git,
    log_store: LogStore,
}

impl Repository {
    pub fn new(config: &Config, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = config
            .repo_dir()
            .canonicalize()
            .with_context(|| format!("cannot open repository directory {:?}", config.repo_dir()))?;

        let git = Git::new(config.git_program(), path.into_boxed_path());
        let log_store = LogStore::new(config.log_file_path().into_boxed_path());

        Ok(Repository {
            writer: RefCell::new(writer),
            git,
            log_store,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn git(&self) -> &Git {
        &self.git
    }

    pub fn log_store(&self) -> &LogStore {
        &self.log_store
    }
}

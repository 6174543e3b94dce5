use crate::areas::repository::Repository;
use crate::artifacts::commit::inspector::Inspector;
use colored::Colorize;

impl Repository {
    /// Append a row describing `HEAD` to the commit log
    pub fn record(&self) -> anyhow::Result<()> {
        let record = Inspector::new(self.git()).inspect_latest_commit()?;
        let table = self.log_store().append(record.clone())?;

        writeln!(
            self.writer(),
            "Commit log updated: {} {} {} {} ({} rows in {})",
            record.timestamp(),
            record.commit_hash().yellow(),
            record.user(),
            format!("+{}", record.added_lines()).green(),
            table.len(),
            self.log_store().path().display()
        )?;

        Ok(())
    }
}

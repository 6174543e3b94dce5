use crate::areas::repository::Repository;
use crate::artifacts::commit::record::CommitRecord;
use colored::Colorize;

#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    /// Only show the newest `n` rows
    pub max_count: Option<usize>,
    pub abbrev_commit: bool,
}

impl Repository {
    /// Print logged rows, oldest first
    pub fn show(&self, opts: &ShowOptions) -> anyhow::Result<()> {
        let table = self.log_store().load()?;

        if table.is_empty() {
            writeln!(self.writer(), "No commits logged yet")?;
            return Ok(());
        }

        let rows = match opts.max_count {
            Some(count) => table.tail(count),
            None => table.rows(),
        };

        for record in rows {
            self.show_record(record, opts.abbrev_commit)?;
        }

        Ok(())
    }

    fn show_record(&self, record: &CommitRecord, abbrev_commit: bool) -> anyhow::Result<()> {
        let hash = if abbrev_commit {
            record.short_hash()
        } else {
            record.commit_hash()
        };

        writeln!(
            self.writer(),
            "{} {} {} {}",
            record.timestamp(),
            hash.yellow(),
            record.user(),
            format!("+{}", record.added_lines()).green()
        )?;

        Ok(())
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::commit::inspector::Inspector;
use crate::artifacts::log::table::COLUMNS;

impl Repository {
    /// Print the record `HEAD` would produce, without touching the log
    pub fn inspect(&self) -> anyhow::Result<()> {
        let record = Inspector::new(self.git()).inspect_latest_commit()?;

        let values = [
            record.timestamp().to_string(),
            record.commit_hash().to_string(),
            record.user().to_string(),
            record.added_lines().to_string(),
        ];
        let width = COLUMNS.iter().map(|label| label.len()).max().unwrap_or_default() + 1;

        for (label, value) in COLUMNS.iter().zip(values) {
            writeln!(self.writer(), "{:<width$} {}", format!("{label}:"), value)?;
        }

        Ok(())
    }
}

//! Terminal output helpers

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// `io::Write` adapter over a `minus` pager
///
/// Lets `show` write into the pager exactly as it writes to stdout; the caller
/// hands the pager to `minus::page_all` once the command has finished.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

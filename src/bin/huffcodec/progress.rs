//! Progress display while reading the input text.
//!
//! Built on `indicatif`, see <https://docs.rs/indicatif>

use std::io::Read;

use indicatif::{HumanDuration, ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::debug;

/// Reader wrapper that advances a progress bar by every byte read.
pub struct ProgressMonitor<R: Read> {
    /// Expected size of the input, usually taken from file metadata
    pub total: usize,
    pub read: usize,
    reader: R,
    progress_bar: ProgressBar,
}

impl<R: Read> ProgressMonitor<R> {
    pub fn new(reader: R, total: usize) -> Self {
        // https://docs.rs/indicatif/latest/indicatif/index.html#templates
        let style = ProgressStyle::with_template(
            "reading {wide_bar} {binary_bytes}/{binary_total_bytes} [{eta}]",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar());
        let progress_bar = ProgressBar::new(total as u64).with_style(style);
        // 8hz is plenty for a bar that usually lives well under a second
        progress_bar.set_draw_target(ProgressDrawTarget::stderr_with_hz(8));
        Self {
            total,
            read: 0,
            reader,
            progress_bar,
        }
    }

    fn update(&mut self, delta: usize) {
        self.progress_bar.inc(delta as u64);
        let done = delta == 0 || self.read >= self.total;
        if done && !self.progress_bar.is_finished() {
            self.progress_bar.finish_and_clear();
            debug!(
                "read {} in {}",
                fmt_size(self.read as f64),
                HumanDuration(self.progress_bar.elapsed())
            );
        }
    }
}

impl<R: Read> Read for ProgressMonitor<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let out = self.reader.read(buf)?;
        self.read += out;
        self.update(out);
        Ok(out)
    }
}

/// Human readable byte count using binary units
pub fn fmt_size(size_in_bytes: f64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut size = size_in_bytes;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{:.0}{}", size, UNITS[unit])
    } else {
        format!("{:.2}{}", size, UNITS[unit])
    }
}

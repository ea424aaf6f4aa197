use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use snmpush_core::runner::ProgressCallback;

static PROGRESS: OnceLock<ProgressBar> = OnceLock::new();

/// Creates the batch progress bar. Hidden under `-q` and when stderr is not a terminal.
pub fn start(total: u64, q_level: u8) -> ProgressBar {
    PROGRESS
        .get_or_init(|| {
            let target = if q_level > 0 {
                ProgressDrawTarget::hidden()
            } else {
                ProgressDrawTarget::stderr()
            };
            let pb = ProgressBar::with_draw_target(Some(total), target);
            if let Ok(style) = ProgressStyle::with_template(
                "{spinner:.blue} [{bar:30.green/white}] {pos}/{len} operations {msg}",
            ) {
                pb.set_style(style.progress_chars("━╸ ").tick_strings(&[
                    "▁▁▁▁▁", "▁▂▂▂▁", "▁▄▂▄▁", "▂▄▆▄▂", "▄▆█▆▄", "▂▄▆▄▂", "▁▄▂▄▁", "▁▂▂▂▁",
                ]));
            }
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        })
        .clone()
}

/// Moves the bar to the number of processed combinations.
pub fn callback(pb: ProgressBar) -> ProgressCallback {
    Box::new(move |processed| {
        pb.set_position(processed as u64);
        pb.set_message(format!("{}", "sending".italic().white()));
    })
}

/// Log writer that prints above the progress bar while it is drawn.
pub struct ProgressWriter;

impl Write for ProgressWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let msg = String::from_utf8_lossy(buf);
        let msg = msg.trim_end_matches('\n');

        match PROGRESS.get() {
            Some(pb) if !pb.is_finished() && !pb.is_hidden() => pb.println(msg),
            _ => writeln!(io::stdout().lock(), "{msg}")?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

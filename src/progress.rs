//! Progress feedback for transitions and scripts.
//!
//! Feedback is cosmetic: nothing in the transition logic depends on it. Use `()`
//! to discard it, or [`TextProgress`] to render it onto a text stream such as a
//! UART or RTT channel.

use core::fmt::Write;

/// Observer for transition and script progress.
///
/// Every method has a no-op default.
pub trait Progress {
    /// A script is starting.
    fn banner(&mut self, _title: &str) {}

    /// A transition away from the color named `label` is starting.
    fn begin(&mut self, _label: &str) {}

    /// One interpolation step was committed.
    fn step(&mut self) {}

    /// A transition arrived at the color named `label`.
    fn end(&mut self, _label: &str) {}

    /// A script has finished.
    fn finish(&mut self) {}
}

impl Progress for () {}

impl<P: Progress + ?Sized> Progress for &mut P {
    fn banner(&mut self, title: &str) {
        (**self).banner(title);
    }

    fn begin(&mut self, label: &str) {
        (**self).begin(label);
    }

    fn step(&mut self) {
        (**self).step();
    }

    fn end(&mut self, label: &str) {
        (**self).end(label);
    }

    fn finish(&mut self) {
        (**self).finish();
    }
}

const RULE: &str = "-----------------------------------------------------------";
const TAB_STOP: usize = 8;

/// Renders progress as console text.
///
/// ```text
/// <Off>   ................................................... <Blue>
/// ```
///
/// Write errors are ignored.
pub struct TextProgress<W: Write> {
    out: W,
}

impl<W: Write> TextProgress<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Progress for TextProgress<W> {
    fn banner(&mut self, title: &str) {
        let _ = write!(self.out, "\n{RULE}\n{title}\n{RULE}\n\n");
    }

    fn begin(&mut self, label: &str) {
        let _ = write!(self.out, "<{label}>");
        // Labels shorter than a tab stop get padded onto it.
        if label.len() + 2 < TAB_STOP {
            let _ = self.out.write_char('\t');
        }
    }

    fn step(&mut self) {
        let _ = self.out.write_char('.');
    }

    fn end(&mut self, label: &str) {
        let _ = writeln!(self.out, " <{label}>");
    }

    fn finish(&mut self) {
        let _ = write!(self.out, "\nDone!\n\n");
    }
}

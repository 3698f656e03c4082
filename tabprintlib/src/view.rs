//! Output sinks for rendered text.

use std::io::Write;

use crate::Result;

/// Somewhere rendered text is displayed.
pub trait View {
    fn write(&mut self, text: &str) -> Result<()>;
}

impl<T: View + ?Sized> View for &mut T {
    fn write(&mut self, text: &str) -> Result<()> {
        (**self).write(text)
    }
}

/// Writes text to any [`std::io::Write`], flushing after each write.
#[derive(Debug)]
pub struct WriterView<W: Write> {
    writer: W,
}

impl<W: Write> WriterView<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterView<std::io::Stdout> {
    /// View over standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> View for WriterView<W> {
    fn write(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps every written text in memory.
#[derive(Debug, Clone, Default)]
pub struct BufferView {
    written: Vec<String>,
}

impl BufferView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Each write, in order.
    pub fn written(&self) -> &[String] {
        &self.written
    }

    /// All writes concatenated.
    pub fn contents(&self) -> String {
        self.written.concat()
    }
}

impl View for BufferView {
    fn write(&mut self, text: &str) -> Result<()> {
        self.written.push(text.to_string());
        Ok(())
    }
}

//! Indentation-aware line buffer for emitted Swift.

#[derive(Debug, Clone)]
pub struct SwiftWriter {
    buffer: String,
    indent: String,
    depth: usize,
}

impl SwiftWriter {
    pub fn new(indent_width: usize) -> Self {
        Self {
            buffer: String::new(),
            indent: " ".repeat(indent_width),
            depth: 0,
        }
    }

    /// Write one line at the current depth. Empty text writes a bare newline.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buffer.push_str(&self.indent);
            }
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    /// Write `header {` and indent everything until the matching [`close`](Self::close).
    pub fn open(&mut self, header: impl AsRef<str>) -> &mut Self {
        self.line(format!("{} {{", header.as_ref()));
        self.depth += 1;
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self.line("}")
    }

    /// Write a braced block whose body is produced by `body`.
    pub fn block(&mut self, header: impl AsRef<str>, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.open(header);
        body(self);
        self.close()
    }

    /// Write a `switch` whose `case` labels sit at the same depth as the keyword.
    pub fn switch(&mut self, subject: impl AsRef<str>, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.line(format!("switch {} {{", subject.as_ref()));
        body(self);
        self.line("}")
    }

    /// Write `body` one level deeper without braces, as under a `case` label.
    pub fn indented(&mut self, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.depth += 1;
        body(self);
        self.depth = self.depth.saturating_sub(1);
        self
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

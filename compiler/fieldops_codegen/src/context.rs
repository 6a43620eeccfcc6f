//! Source writer for one emitted item.
//!
//! Every emitter owns a fresh `CodegenContext` and returns its output, so no
//! indentation or other state carries over between generated functions.

/// Indentation-aware text buffer.
#[derive(Debug, Default)]
pub struct CodegenContext {
    /// Current indentation level.
    indent: usize,
    /// Generated code output.
    output: String,
}

impl CodegenContext {
    pub fn new() -> Self {
        Self {
            indent: 0,
            output: String::with_capacity(1024),
        }
    }

    /// Increase indentation level.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
    }

    /// Write a line (with indentation and newline).
    pub fn writeln(&mut self, s: &str) {
        self.write_indent();
        self.output.push_str(s);
        self.output.push('\n');
    }

    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    /// Write `header {`, the indented body, then the closing `}`.
    pub fn block(&mut self, header: &str, body: impl FnOnce(&mut Self)) {
        self.block_with_close(header, "}", body);
    }

    /// Like [`Self::block`] but with a custom closing line (`} else {`, `});`).
    pub fn block_with_close(&mut self, header: &str, close: &str, body: impl FnOnce(&mut Self)) {
        if header.is_empty() {
            self.writeln("{");
        } else {
            self.writeln(&format!("{header} {{"));
        }
        self.indent();
        body(self);
        self.dedent();
        self.writeln(close);
    }

    /// Take the generated output.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

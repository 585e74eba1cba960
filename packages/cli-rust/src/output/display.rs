//! Terminal rendering for command results
//!
//! [`Display`] writes to an injected sink so handlers can be exercised
//! against an in-memory buffer. Message boxes are produced by the pure
//! [`render_message`] function.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, Table};
use console::{Style, measure_text_width, style};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

const SECTION_RULE: usize = 20;

/// The four message classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Warning,
    Info,
}

impl MessageKind {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Success => Style::new().green(),
            Self::Error => Style::new().red(),
            Self::Warning => Style::new().yellow(),
            Self::Info => Style::new().cyan(),
        }
    }
}

/// Render a message inside a rounded box with its glyph
///
/// Multi-line messages keep their line breaks; every line is padded to the
/// widest one.
pub fn render_message(kind: MessageKind, message: &str) -> String {
    let border = kind.style();
    let glyph = kind.style().bold().apply_to(kind.glyph()).to_string();

    let mut lines: Vec<String> = Vec::new();
    for (index, line) in message.lines().enumerate() {
        if index == 0 {
            lines.push(format!("{glyph} {line}"));
        } else {
            lines.push(format!("  {line}"));
        }
    }
    if lines.is_empty() {
        lines.push(glyph);
    }

    let width = lines
        .iter()
        .map(|line| measure_text_width(line))
        .max()
        .unwrap_or(0);
    let rule = "─".repeat(width + 2);

    let mut out = String::new();
    out.push_str(&border.apply_to(format!("╭{rule}╮")).to_string());
    out.push('\n');
    for line in &lines {
        let padding = " ".repeat(width - measure_text_width(line));
        out.push_str(&format!(
            "{} {line}{padding} {}\n",
            border.apply_to("│"),
            border.apply_to("│")
        ));
    }
    out.push_str(&border.apply_to(format!("╰{rule}╯")).to_string());
    out
}

/// An in-memory sink shared between a [`Display`] and a test
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    /// Everything written so far, with styling removed
    pub fn contents(&self) -> String {
        let raw = String::from_utf8_lossy(&self.0.borrow()).into_owned();
        console::strip_ansi_codes(&raw).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Output surface for commands
pub struct Display {
    out: RefCell<Box<dyn Write>>,
}

impl Display {
    pub fn new(out: Box<dyn Write>) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    /// A display writing into a buffer the caller can inspect
    pub fn buffered() -> (Self, SharedBuffer) {
        let buffer = SharedBuffer::default();
        (Self::new(Box::new(buffer.clone())), buffer)
    }

    /// Write one line
    pub fn line(&self, text: impl AsRef<str>) {
        let mut out = self.out.borrow_mut();
        // Write failures on a closed stdout are ignored
        let _ = writeln!(out, "{}", text.as_ref());
        let _ = out.flush();
    }

    pub fn blank(&self) {
        self.line("");
    }

    pub fn banner(&self) {
        self.line(super::banner::render_banner());
    }

    /// Boxed command title
    pub fn title(&self, text: &str) {
        let width = measure_text_width(text) + 4;
        let border = Style::new().cyan();
        self.blank();
        self.line(border.apply_to(format!("╭{}╮", "─".repeat(width))).to_string());
        self.line(format!(
            "{}  {}  {}",
            border.apply_to("│"),
            style(text).cyan().bold(),
            border.apply_to("│")
        ));
        self.line(border.apply_to(format!("╰{}╯", "─".repeat(width))).to_string());
        self.blank();
    }

    pub fn section(&self, text: &str) {
        let rule = style("━".repeat(SECTION_RULE)).cyan();
        self.blank();
        self.line(format!("{rule} {} {rule}", style(text).cyan().bold()));
        self.blank();
    }

    /// Bordered table; an empty row set shows "No data found" instead
    pub fn table(&self, headers: &[&str], rows: Vec<Vec<String>>) {
        if rows.is_empty() {
            self.info("No data found");
            return;
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(
            headers
                .iter()
                .map(|header| Cell::new(header).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
        for row in rows {
            table.add_row(row);
        }
        self.line(table.to_string());
        self.blank();
    }

    /// Two-column Property/Value table
    pub fn properties(&self, rows: &[(&str, String)]) {
        self.table(
            &["Property", "Value"],
            rows.iter()
                .map(|(key, value)| vec![key.to_string(), value.clone()])
                .collect(),
        );
    }

    /// Numbered list under a section header; empty shows "No items found"
    pub fn list(&self, title: &str, items: &[String]) {
        if items.is_empty() {
            self.info("No items found");
            return;
        }
        self.section(title);
        for (index, item) in items.iter().enumerate() {
            self.line(format!("{} {item}", style(format!("{}.", index + 1)).cyan()));
        }
        self.blank();
    }

    pub fn message(&self, kind: MessageKind, text: &str) {
        self.line(render_message(kind, text));
    }

    pub fn success(&self, text: &str) {
        self.message(MessageKind::Success, text);
    }

    pub fn error(&self, text: &str) {
        self.message(MessageKind::Error, text);
    }

    pub fn warning(&self, text: &str) {
        self.message(MessageKind::Warning, text);
    }

    pub fn info(&self, text: &str) {
        self.message(MessageKind::Info, text);
    }
}

use std::fmt;

use crate::error::PortalError;

/// Line buffer a page renders into.
#[derive(Debug, Default)]
pub struct Page {
    lines: Vec<String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Title with an underline of matching width.
    pub fn heading(&mut self, title: &str) {
        self.line(title);
        self.line("=".repeat(title.chars().count()));
    }

    pub fn section(&mut self, title: &str) {
        self.blank();
        self.line(title);
        self.line("-".repeat(title.chars().count()));
    }

    pub fn append(&mut self, other: Page) {
        self.lines.extend(other.lines);
    }

    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// Short notification shown after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }
}

impl From<PortalError> for Toast {
    fn from(e: PortalError) -> Self {
        Toast::error(e.to_string())
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.kind {
            ToastKind::Success => "[ok]",
            ToastKind::Error => "[error]",
            ToastKind::Info => "[info]",
        };
        write!(f, "{} {}", marker, self.message)
    }
}

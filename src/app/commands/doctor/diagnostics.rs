#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub subject: String,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn push_error(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        let diagnostic = Diagnostic {
            subject: subject.into(),
            message: message.into(),
            severity: Severity::Error,
        };
        self.errors.push(diagnostic);
    }

    pub fn push_warning(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        let diagnostic = Diagnostic {
            subject: subject.into(),
            message: message.into(),
            severity: Severity::Warning,
        };
        self.warnings.push(diagnostic);
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.errors.iter().chain(self.warnings.iter())
    }

    pub fn emit(&self) {
        for diagnostic in &self.errors {
            eprintln!("[ERROR] {}: {}", diagnostic.subject, diagnostic.message);
        }
        for diagnostic in &self.warnings {
            eprintln!("[WARN] {}: {}", diagnostic.subject, diagnostic.message);
        }
    }
}

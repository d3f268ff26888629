use std::fmt;

/// Problems found while reading a batch of location updates.
/// Malformed entries are reported here and skipped rather than failing the batch.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
}

#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub message: String,
    // Where in the input, e.g. "line 3" or "[1]/properties/battery_level"
    pub location: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    /// Entry was dropped
    Error,
    /// Entry was kept but a reading looks wrong
    Warning,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, message: String, location: Option<String>) {
        self.push(IssueSeverity::Error, message, location);
    }

    pub fn add_warning(&mut self, message: String, location: Option<String>) {
        self.push(IssueSeverity::Warning, message, location);
    }

    fn push(&mut self, severity: IssueSeverity, message: String, location: Option<String>) {
        log::debug!("{:?} at {:?}: {}", severity, location, message);
        self.issues.push(ValidationIssue {
            severity,
            message,
            location,
        });
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.with_severity(IssueSeverity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.with_severity(IssueSeverity::Warning)
    }

    fn with_severity(&self, severity: IssueSeverity) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |issue| issue.severity == severity)
    }

    /// No entry was dropped
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(loc) => write!(f, "[{}] {}", loc, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (heading, severity) in [
            ("Errors", IssueSeverity::Error),
            ("Warnings", IssueSeverity::Warning),
        ] {
            let mut issues = self.with_severity(severity).peekable();
            if issues.peek().is_none() {
                continue;
            }
            writeln!(f, "{}:", heading)?;
            for issue in issues {
                writeln!(f, "  {}", issue)?;
            }
        }
        Ok(())
    }
}

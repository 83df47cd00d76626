use std::fmt;

/// Which option list a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Rider,
    Bike,
}

impl OptionKind {
    /// Plural label used in listings ("riders", "bikes")
    pub fn plural(&self) -> &'static str {
        match self {
            OptionKind::Rider => "riders",
            OptionKind::Bike => "bikes",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Rider => f.write_str("rider"),
            OptionKind::Bike => f.write_str("bike"),
        }
    }
}

/// Known values for a rider or bike field
///
/// Used for soft validation only: a value outside the list can still be
/// logged once the user confirms it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionList {
    kind: OptionKind,
    values: Vec<String>,
}

impl OptionList {
    pub fn new(kind: OptionKind, values: Vec<String>) -> Self {
        Self { kind, values }
    }

    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Exact, case-sensitive membership check
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

//! Transaction and file results.

use changemaker_shared::CurrencyCode;
use changemaker_shared::types::format_amount;
use serde::Serialize;

use crate::change::{Breakdown, ChangePolicy};

/// One resolved transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeLine {
    /// Amount owed in minor units.
    pub owed_cents: u64,
    /// Amount paid in minor units.
    pub paid_cents: u64,
    /// Change handed back, after rounding.
    pub change_cents: u64,
    /// Algorithm that produced the breakdown.
    pub policy: ChangePolicy,
    /// Denominations handed back, largest first.
    pub breakdown: Breakdown,
}

impl ChangeLine {
    /// A transaction paid exactly; nothing is handed back.
    pub fn no_change(owed_cents: u64, paid_cents: u64) -> Self {
        Self {
            owed_cents,
            paid_cents,
            change_cents: 0,
            policy: ChangePolicy::Minimum,
            breakdown: Breakdown::default(),
        }
    }

    /// Whether the randomized policy was used.
    pub fn used_random(&self) -> bool {
        self.policy.is_random()
    }
}

/// Renders `[*]<owed>, <paid>, <change>: <breakdown>`.
///
/// The `*` marks randomized change.
impl std::fmt::Display for ChangeLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}, {}, {}: {}",
            if self.used_random() { "*" } else { "" },
            format_amount(self.owed_cents),
            format_amount(self.paid_cents),
            format_amount(self.change_cents),
            self.breakdown
        )
    }
}

/// A line of a transaction file that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedLine {
    /// 1-based line number within the file.
    pub line_number: usize,
    /// The line as it appeared, trimmed.
    pub input: String,
    /// Why it was rejected.
    pub error: String,
}

impl std::fmt::Display for RejectedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "! line {}: {}: {}", self.line_number, self.input, self.error)
    }
}

/// Outcome of one transaction line, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileEntry {
    /// The line was processed.
    Processed(ChangeLine),
    /// The line was rejected; neighbouring lines are unaffected.
    Rejected(RejectedLine),
}

impl FileEntry {
    /// Whether this entry used randomized change.
    pub fn used_random(&self) -> bool {
        matches!(self, Self::Processed(line) if line.used_random())
    }
}

impl std::fmt::Display for FileEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Processed(line) => write!(f, "{line}"),
            Self::Rejected(rejected) => write!(f, "{rejected}"),
        }
    }
}

/// Every transaction of a file plus file-level facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResult {
    /// Currency the file was processed in.
    pub currency: CurrencyCode,
    /// Divisor that decided randomization for every line.
    pub divisor: u32,
    /// Whether any line used randomized change.
    pub has_random: bool,
    /// One entry per transaction line, in file order.
    pub entries: Vec<FileEntry>,
}

impl FileResult {
    /// Report header shared by every front end.
    pub fn summary_line(&self) -> String {
        if self.has_random {
            format!("* randomization used - divisible by {}", self.divisor)
        } else {
            format!("* no entries divisible by {}", self.divisor)
        }
    }

    /// Formatted result lines, one per entry.
    pub fn result_lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    /// Processed transactions only.
    pub fn processed(&self) -> impl Iterator<Item = &ChangeLine> {
        self.entries.iter().filter_map(|entry| match entry {
            FileEntry::Processed(line) => Some(line),
            FileEntry::Rejected(_) => None,
        })
    }

    /// Rejected lines only.
    pub fn rejected(&self) -> impl Iterator<Item = &RejectedLine> {
        self.entries.iter().filter_map(|entry| match entry {
            FileEntry::Rejected(rejected) => Some(rejected),
            FileEntry::Processed(_) => None,
        })
    }

    /// Summary line followed by every result line, newline-terminated.
    pub fn render(&self) -> String {
        let mut out = self.summary_line();
        out.push('\n');
        for entry in &self.entries {
            out.push_str(&entry.to_string());
            out.push('\n');
        }
        out
    }
}

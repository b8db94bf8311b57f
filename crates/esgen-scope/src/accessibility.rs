//! How a variable reference uses its binding.

use serde::Serialize;

/// Three-point lattice `Read, Write < ReadWrite`.
///
/// Escalation only ever moves upward: asking a `Write` reference for
/// readability yields `ReadWrite`, never `Read`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accessibility {
    Read,
    Write,
    ReadWrite,
}

impl Accessibility {
    #[must_use]
    pub const fn with_readability(self) -> Self {
        match self {
            Self::Read => Self::Read,
            Self::Write | Self::ReadWrite => Self::ReadWrite,
        }
    }

    #[must_use]
    pub const fn with_writability(self) -> Self {
        match self {
            Self::Write => Self::Write,
            Self::Read | Self::ReadWrite => Self::ReadWrite,
        }
    }

    /// Least upper bound of two accessibilities.
    #[must_use]
    pub const fn join(self, other: Self) -> Self {
        match (self, other) {
            (Self::Read, Self::Read) => Self::Read,
            (Self::Write, Self::Write) => Self::Write,
            _ => Self::ReadWrite,
        }
    }

    pub const fn is_read(self) -> bool {
        matches!(self, Self::Read | Self::ReadWrite)
    }

    pub const fn is_write(self) -> bool {
        matches!(self, Self::Write | Self::ReadWrite)
    }

    pub const fn is_read_write(self) -> bool {
        matches!(self, Self::ReadWrite)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::ReadWrite => "read-write",
        }
    }
}

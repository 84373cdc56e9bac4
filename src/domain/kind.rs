//! Record kinds
//!
//! Each collected record set has a kind that decides the column suffix and
//! the worksheet it is written to.

use std::fmt;

/// The three record sets gathered by the collector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// The blockchain member resource (exactly one record)
    Member,
    /// Transaction nodes belonging to the member
    Node,
    /// Smart-contract documents stored in Cosmos DB
    Contract,
}

impl RecordKind {
    /// All kinds in worksheet order
    pub const ALL: [RecordKind; 3] = [RecordKind::Member, RecordKind::Node, RecordKind::Contract];

    /// Suffix appended to every field name: `{field}_{tag}`
    pub fn tag(self) -> &'static str {
        match self {
            RecordKind::Member => "member",
            RecordKind::Node => "node",
            RecordKind::Contract => "contract",
        }
    }

    /// Worksheet name in the collector output
    pub fn sheet_name(self) -> &'static str {
        match self {
            RecordKind::Member => "Member Metadata",
            RecordKind::Node => "Nodes Metadata",
            RecordKind::Contract => "Contracts Metadata",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

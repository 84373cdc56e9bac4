// abs-metadata - Azure Blockchain Service metadata collector
// Copyright (c) 2025 abs-metadata Contributors
// Licensed under the MIT License

//! # abs-metadata
//!
//! Two batch jobs for reviewing Azure Blockchain Service deployments in a
//! spreadsheet.
//!
//! ## Overview
//!
//! - **Collect** the blockchain member, its transaction nodes (Azure
//!   Resource Manager) and its smart contracts (Azure Cosmos DB) into a
//!   workbook with one sheet per record set. Every column gets a `_Y`
//!   marker twin.
//! - **Filter** that workbook after an operator has typed `Y` into the
//!   marker cells of the columns worth keeping.
//!
//! Both jobs fail open: an unreachable service or a broken sheet degrades
//! that one sheet and the workbook is still written.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Transforms and the two jobs
//! - [`adapters`] - Azure Resource Manager, Cosmos DB and `.xlsx` files
//! - [`domain`] - Records, tables, outcomes and errors
//! - [`config`] - Credentials file loading
//! - [`logging`] - Structured logging
//!
//! ## Tagging and filtering
//!
//! ```rust
//! use abs_metadata::core::transform::{filter_marked_columns, tag_records};
//! use abs_metadata::domain::{FieldValue, Record, RecordKind};
//!
//! let records = vec![Record::new().with("id", "m1").with("status", "active")];
//! let mut table = tag_records(&records, RecordKind::Member);
//! assert_eq!(
//!     table.column_names(),
//!     vec!["id_member", "status_member", "id_member_Y", "status_member_Y"]
//! );
//!
//! table.column_mut("id_member_Y").unwrap().values = vec![FieldValue::text("Y")];
//! table.column_mut("status_member_Y").unwrap().values = vec![FieldValue::text("")];
//!
//! let filtered = filter_marked_columns(table).into_value();
//! assert_eq!(filtered.column_names(), vec!["id_member"]);
//! ```
//!
//! ## Error Handling
//!
//! [`domain::MetadataError`] covers every failure. Steps allowed to fail
//! without stopping a job return [`domain::Outcome`] instead.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;

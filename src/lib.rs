// lib.rs
//! # TABIO
//!
//! Helpers for the unglamorous half of a data-analytics notebook workflow:
//! getting tables, snapshots, and configuration on and off disk with one
//! call, so the analysis cells stay about analysis.
//!
//! Every destination folder is passed explicitly by the caller; nothing is
//! resolved relative to the process launch location. Successful writes are
//! reported through `tracing` rather than printed, so the confirmation
//! lines land wherever the notebook's subscriber points them.
//!
//! ## `table_utils`
//!
//! - **Purpose**: In-memory shapes for tabular artifacts.
//! - **Features**:
//!   - **Table**: ordered named columns over row-major string data, with
//!     rows normalized to the header width at construction.
//!   - **Bundle**: an insertion-ordered, unique-name collection of tables
//!     destined for one multi-sheet workbook.
//!
//! ## `save_utils`
//!
//! - **Purpose**: One-call persistence of tabular artifacts.
//! - **Features**:
//!   - **save_table**: write a `Table` as CSV (header row, no index column),
//!     creating the destination folder and normalizing the `.csv` suffix.
//!   - **save_bundle**: write a `Bundle` as an XLSX workbook, one worksheet
//!     per entry, normalizing the `.xlsx` suffix.
//!
//! ## `config_utils`
//!
//! - **Purpose**: Load YAML configuration documents that parameterize
//!   analysis steps.
//! - **Features**:
//!   - **read_config**: parse a config file into a nested
//!     `serde_yaml::Value`, re-reading on every call; a missing file fails
//!     with the attempted path in the error.
//!   - **read_config_as**: the same, deserialized straight into a caller
//!     supplied type.
//!
//! ## `object_utils`
//!
//! - **Purpose**: Binary snapshots of arbitrary serializable values between
//!   notebook sessions.
//! - **Features**:
//!   - **export_object**: bincode-serialize any serde value to a `.bin`
//!     file, creating the folder and overwriting prior snapshots.
//!   - **load_object**: restore a snapshot, or return `None` (with a
//!     warning) when the name was never exported.
//!
//! ## License
//!
//! This project is licensed under the MIT License.

pub mod config_utils;
pub mod object_utils;
pub mod save_utils;
pub mod table_utils;

//! # assetbook
//!
//! A small single-user inventory ledger. Asset records (article number,
//! name, model, quantity, unit price, country of origin) are kept as JSON
//! files in a working directory and edited through an interactive console
//! menu. There is no database and no network surface; each file is a
//! complete snapshot of one record set, written whole on every change.
//!
//! The building blocks are the validated datatypes (article numbers,
//! country codes, the asset record itself), an in-memory ordered store
//! with an auto-incrementing article number counter, a file-backed
//! persistence layer, and the console menu loop that ties them together.

#[macro_use]
extern crate text_io;

// module exports
pub mod console;
pub mod datatypes;
pub mod file_store;
pub mod menu;
pub mod store;

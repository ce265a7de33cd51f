//! # rna-store
//!
//! Persistence of finalized audits to the external audit database
//! (Airtable).
//!
//! The core engine only hands over plain data; this crate owns the flat
//! field naming the database expects ([`prepare_record`]) and the HTTP push
//! ([`AirtableClient`]). A failed push changes nothing locally — the caller
//! decides whether to retry.

mod client;
mod error;
mod record;

pub use client::AirtableClient;
pub use error::StoreError;
pub use record::prepare_record;

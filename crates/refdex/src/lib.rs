//! refdex: reference code lookup.
//!
//! refdex ranks short catalog records, such as medical billing codes and diagnostic codes,
//! against free-text queries typed at the terminal. Queries tolerate partial codes,
//! curated abbreviations, and single typos. Results are grouped so related codes stay
//! together, and each catalog reports how many records matched in total.

#![warn(missing_docs)]

pub mod cli;

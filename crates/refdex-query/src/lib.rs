//! Query normalization and tokenization for refdex.
//!
//! A raw query typed by the user goes through two steps before it reaches the scorer:
//!
//! - **Normalization**: lowercase, strip everything except word characters, whitespace and
//!   the clinically meaningful punctuation `& - ' /`, collapse whitespace runs
//! - **Tokenization**: split the normalized form on single spaces, dropping empty pieces
//!
//! # Example
//!
//! ```
//! use refdex_query::Query;
//!
//! let query = Query::parse("  I&D, Abscess!! ");
//! assert_eq!(query.normalized, "i&d abscess");
//! assert_eq!(query.tokens, vec!["i&d", "abscess"]);
//! ```

#![warn(missing_docs)]

mod normalize;
mod query;

pub use normalize::{is_retained_char, normalize, tokenize};
pub use query::Query;

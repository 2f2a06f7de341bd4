//! # scriptkit — helpers for command-line scripts
//!
//! Small, synchronous, stateless building blocks for CLI scripts:
//! colored console reporting, structured-file I/O (YAML / JSON / TSV),
//! an inclusive-range string codec, random password generation, and
//! fixed-width table-row rendering that keeps columns aligned in the
//! presence of double-width CJK characters.
//!
//! ## Quick start
//!
//! ```rust
//! use scriptkit::{decode_range, encode_range, table_line, table_row};
//!
//! let (low, high) = decode_range("1-10", "port range")?;
//! assert_eq!(encode_range(low, high), "1-10");
//!
//! println!("{}", table_line(12));
//! println!("{}", table_row("名前", 12, None));
//! println!("{}", table_line(12));
//! # Ok::<(), scriptkit::Error>(())
//! ```
//!
//! ## Error handling
//!
//! Every fallible helper returns [`Result`]. Scripts that want the
//! classic print-and-exit behavior call [`Error::exit`] or the helpers
//! in [`console`]; library callers match on the [`Error`] variants
//! instead.
//!
//! Interactive prompts live in the companion `scriptkit-input` crate.

pub mod console;
pub mod error;
pub mod files;
pub mod password;
pub mod range;
pub mod table;

pub use error::{Error, Result};
pub use files::{read_json, read_tsv, read_yaml, write_json, write_tsv, write_yaml};
pub use password::generate_password;
pub use range::{decode_range, encode_range};
pub use table::{is_cjk, table_line, table_row};

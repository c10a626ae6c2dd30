//! # in-memoriam
//!
//! Memorial text generation for remembered community members.
//!
//! Person records (YAML) are formatted one by one, sorted by name or first
//! nickname, and collected into "books": one text file per group of initial
//! letters (`ABCDE`, `FGHIJ`, `KLMNOP`, `QRSTU`, `VWXYZ`). Persons within a
//! book are separated by a `<pb>` page break.
//!
//! ## Example
//!
//! ```
//! use in_memoriam::{Layout, parse_records, render_records};
//!
//! let yaml = r#"
//! - name: Richard Bader
//!   nicks: [ShadowCats]
//!   dates: [17 August 1962, 24 June 2010]
//! - name: Sam Stone
//! "#;
//!
//! let books = render_records(parse_records(yaml).unwrap(), &Layout::FixedOrder).unwrap();
//!
//! assert_eq!(books.len(), 1);
//! assert_eq!(books[0].label, "QRSTU");
//! assert_eq!(
//!     books[0].text,
//!     "Richard \"ShadowCats\" Bader\n\n17 August 1962 - 24 June 2010<pb>Sam Stone"
//! );
//! ```

pub mod error;
pub mod groups;
pub mod normalize;
pub mod person;
pub mod render;
pub mod sink;
pub mod source;
pub mod template;

pub use error::{MemoriamError, Result};
pub use groups::{BOOK_GROUPS, book_group};
pub use person::{Membership, Person, extract_date};
pub use render::{Bucket, PAGE_BREAK, build_persons, group_persons, render_persons, render_records};
pub use sink::{output_path, output_prefix, write_buckets};
pub use source::{RawMembership, RawPerson, Text, parse_records, read_records, read_template};
pub use template::{Field, Layout, Template};

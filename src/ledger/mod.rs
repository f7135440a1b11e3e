//! Record model, input validation, and monthly aggregation.
//!
//! Nothing in here touches the filesystem; storage hands loaded records in
//! and the CLI hands raw strings in.

pub mod category;
pub mod record;
pub mod summary;
pub mod validation;

pub use category::Category;
pub use record::{max_amount, Kind, Record, YearMonth, MAX_AMOUNT_UNITS};
pub use summary::{summarize, summarize_month, Summary};
pub use validation::{
    validate_amount, validate_category, validate_date, validate_kind, validate_month,
    RecordDraft, DATE_FORMAT,
};

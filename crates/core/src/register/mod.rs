//! Transaction and file processing.

pub mod error;
pub mod file;
pub mod sample;
pub mod transaction;
pub mod types;


pub use error::{RegisterError, TransactionError};
pub use file::{parse_currency_header, process_file};
pub use sample::{SampleTransaction, generate_transactions, render_sample_file};
pub use transaction::CashRegister;
pub use types::{ChangeLine, FileEntry, FileResult, RejectedLine};

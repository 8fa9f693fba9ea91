pub mod batch;
pub mod parser;

pub use batch::{process_batch, run_batch, BatchError, BatchSummary};
pub use parser::{parse_input, process_input, InputError, Request};

pub mod execution;
pub mod filter;

pub use execution::{Execution, ExecutionStatus, RequestInfo, ResponseInfo};
pub use filter::{ExecutionFilter, ExecutionPage, FilterPatch, DEFAULT_PAGE_SIZE};

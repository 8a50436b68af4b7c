//! Natural language task extraction.
//!
//! Two entry points turn English text into [`ParsedTask`] records:
//! - [`parse_task`] for a single sentence like
//!   "Finish landing page Aman by 11pm 20th june P1"
//! - [`parse_transcript`] for meeting notes like
//!   "Aman you take the landing page by 10pm tomorrow. Rajeev should ..."
//!
//! Both are total: any input produces a valid result.

mod assignee;
mod meeting;
mod parser;
mod priority;
mod types;

pub use assignee::{extract_assignee, find_assignee, AssigneeMatch};
pub use meeting::{parse_transcript, parse_transcript_at, split_sentences};
pub use parser::{parse_task, parse_task_at};
pub use priority::{extract_priority, find_priority, PriorityMatch};
pub use types::{ParsedTask, Priority};

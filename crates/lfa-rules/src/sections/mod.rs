//! Section-level rule groups
//!
//! One group per top-level document section. Each group is a named
//! function with a declared input shape: it receives the section it
//! checks plus whatever related sections its referential checks need,
//! never the whole document. Groups return a sequence of findings and
//! are total — absence of an optional field is a condition to report,
//! not a defect.

mod activities;
mod change_theory;
mod outcomes;
mod outputs;
mod partners;
mod problem_context;

pub use activities::activities;
pub use change_theory::change_theory;
pub use outcomes::outcomes;
pub use outputs::outputs;
pub use partners::partners;
pub use problem_context::problem_context;

// Pipeline orchestration: wires the loader, matching engine, and report
// assembler into one batch run.

pub mod run;

pub use run::{run, RunSummary};

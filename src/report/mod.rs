// Report construction and output: name joining, file writers, and the
// terminal display.

pub mod assemble;
pub mod terminal;
pub mod writer;

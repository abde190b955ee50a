//! Replay domain: deterministic input scripts and tick traces.

mod driver;
mod script;

#[cfg(test)]
mod tests;

pub use driver::drive_app;
pub use script::{InputFrame, InputScript, TickRecord, run_script, trace_to_json};

pub mod run;

pub use run::{run, RunConfig};

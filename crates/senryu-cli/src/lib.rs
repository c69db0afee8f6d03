//! senryu-cli
//!
//! Command-line front end for the senryu verse detector.
//!
//! ```bash
//! senryu-cli 古池や蛙飛び込む水の音
//! cat poems.txt | senryu-cli --json --overlap non-overlapping
//! senryu-cli --tokens 柿食えば鐘が鳴るなり法隆寺
//! ```

pub mod args;
pub mod output;
pub mod run;

pub use args::Cli;

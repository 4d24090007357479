// smudge/src/commands/mod.rs

pub mod analyze;
pub mod generate;
pub mod inspect;
pub mod load;
pub mod report;

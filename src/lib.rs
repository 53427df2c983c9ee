pub mod error;
pub mod flags;
pub mod shell;

pub mod core;
pub mod highlight;
pub mod sys;

//! Data models for figure records.

mod figure;

pub use figure::Figure;

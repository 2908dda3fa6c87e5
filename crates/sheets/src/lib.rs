#![forbid(unsafe_code)]

pub mod google;
pub mod records;
pub mod source;

pub use google::{GoogleSheets, SheetsConfig, SheetsInitError, Tab};
pub use records::{ChallengeRecord, GroupRecord, StudentRecord};
pub use source::{
    ChallengeSource, GroupSource, InMemorySheets, SourceError, Sources, StudentSource,
};

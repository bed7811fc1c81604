pub mod git;
pub mod hook;
pub mod record;
pub mod usage;

pub use git::GitInfo;
pub use hook::HookJson;
pub use record::{RecordKind, TranscriptRecord};
pub use usage::UsageTotals;

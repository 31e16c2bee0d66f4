//! Profile aggregate management

pub mod account;
pub mod ports;
pub mod projector;
pub mod reader;
pub mod timeline;
pub mod upsert;

pub use account::{AccountRemoval, AccountService};
pub use projector::{parse_skills, project};
pub use reader::ProfileReader;
pub use timeline::TimelineEditor;
pub use upsert::{UpsertCoordinator, UpsertOutcome};

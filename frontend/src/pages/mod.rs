pub mod leave;

pub use leave::LeavePage;

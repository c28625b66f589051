#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Blocking user interaction: a yes/no confirmation and a notification that must be seen.
pub trait Prompter: Send + Sync {
    fn confirm(&self, message: &str) -> bool;

    fn notify(&self, message: &str, level: NoticeLevel);
}

/// Which completion states are shown. Pure view state — selecting a filter
/// never mutates the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
}

impl Filter {
    /// All filters in tab-bar order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Pending, Filter::Completed];

    /// Tab label
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Pending => "Pending",
            Filter::Completed => "Completed",
        }
    }

    /// Whether an item with this completion flag is shown under the filter
    pub fn matches(self, completed: bool) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !completed,
            Filter::Completed => completed,
        }
    }

    /// Placeholder text shown when the projection is empty
    pub fn empty_message(self) -> &'static str {
        match self {
            Filter::All => "Your todo list is empty!",
            Filter::Pending => "No pending tasks found.",
            Filter::Completed => "No completed tasks found.",
        }
    }

    /// The next filter in cycle order (Tab key)
    pub fn next(self) -> Filter {
        match self {
            Filter::All => Filter::Pending,
            Filter::Pending => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }
}

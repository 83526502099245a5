use clap::Args;

/// Noisy path classes hidden unless asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathCategory {
    Static,
    Uploads,
    Avatars,
    Events,
    Typing,
    Messages,
    Presence,
    ErrorReport,
    Other,
}

/// Classify a path (without query). Rules are checked in order.
pub fn categorize(path: &str) -> PathCategory {
    if path.starts_with("/static/") {
        PathCategory::Static
    } else if path.starts_with("/user_uploads/") {
        PathCategory::Uploads
    } else if path.starts_with("/user_avatars/") || path.starts_with("/avatar/") {
        PathCategory::Avatars
    } else if is_endpoint(path, "events") {
        PathCategory::Events
    } else if matches!(path, "/json/typing" | "/api/v1/typing") {
        PathCategory::Typing
    } else if is_endpoint(path, "messages") {
        PathCategory::Messages
    } else if matches!(
        path,
        "/json/users/me/presence" | "/api/v1/users/me/presence"
    ) {
        PathCategory::Presence
    } else if path == "/json/report/error" {
        PathCategory::ErrorReport
    } else {
        PathCategory::Other
    }
}

/// `/json/<name>` or `/api/v1/<name>`, followed by nothing, `/` or `?`.
fn is_endpoint(path: &str, name: &str) -> bool {
    ["/json/", "/api/v1/"].iter().any(|prefix| {
        path.strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix(name))
            .is_some_and(|tail| tail.is_empty() || tail.starts_with('/') || tail.starts_with('?'))
    })
}

/// Which categories to show.
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryToggles {
    /// Include static asset requests
    #[arg(short = 's', long = "static")]
    pub static_assets: bool,

    /// Include file upload requests
    #[arg(short, long)]
    pub uploads: bool,

    /// Include avatar requests
    #[arg(short, long)]
    pub avatars: bool,

    /// Include event queue polls (gateway logs only)
    #[arg(short, long)]
    pub events: bool,

    /// Include message fetches and sends
    #[arg(short, long)]
    pub messages: bool,

    /// Include typing notifications
    #[arg(short, long)]
    pub typing: bool,

    /// Include presence updates
    #[arg(short, long)]
    pub presence: bool,

    /// Include client error reports
    #[arg(short = 'r', long)]
    pub error_reports: bool,

    /// Hide everything not explicitly included above
    #[arg(short = 'O', long = "no-other")]
    pub exclude_other: bool,
}

impl CategoryToggles {
    pub fn allows(&self, category: PathCategory) -> bool {
        match category {
            PathCategory::Static => self.static_assets,
            PathCategory::Uploads => self.uploads,
            PathCategory::Avatars => self.avatars,
            PathCategory::Events => self.events,
            PathCategory::Typing => self.typing,
            PathCategory::Messages => self.messages,
            PathCategory::Presence => self.presence,
            PathCategory::ErrorReport => self.error_reports,
            PathCategory::Other => !self.exclude_other,
        }
    }
}

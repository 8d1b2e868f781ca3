use crate::artifacts::shortcut::{Arity, SHORTCUTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shortcut {
    AddAll,
    RestoreAll,
    Commit,
    Push,
    PushBranch,
    Pull,
    PullBranch,
    Status,
    Log,
    BranchList,
    BranchDelete,
    Checkout,
    CheckoutNewBranch,
    Clear,
    Help,
}

impl Shortcut {
    /// Every shortcut, in the order the help text lists them.
    pub const ALL: [Shortcut; 15] = [
        Shortcut::AddAll,
        Shortcut::RestoreAll,
        Shortcut::Commit,
        Shortcut::Push,
        Shortcut::PushBranch,
        Shortcut::Pull,
        Shortcut::PullBranch,
        Shortcut::Status,
        Shortcut::Log,
        Shortcut::BranchList,
        Shortcut::BranchDelete,
        Shortcut::Checkout,
        Shortcut::CheckoutNewBranch,
        Shortcut::Clear,
        Shortcut::Help,
    ];

    pub fn from_key(key: &str) -> Option<Shortcut> {
        SHORTCUTS.get(key).copied()
    }

    /// The canonical key of the shortcut (aliases resolve to the same variant).
    pub fn key(&self) -> &'static str {
        match self {
            Shortcut::AddAll => "gaa",
            Shortcut::RestoreAll => "gra",
            Shortcut::Commit => "gcm",
            Shortcut::Push => "gp",
            Shortcut::PushBranch => "gpb",
            Shortcut::Pull => "gpl",
            Shortcut::PullBranch => "gplb",
            Shortcut::Status => "gs",
            Shortcut::Log => "gl",
            Shortcut::BranchList => "gb",
            Shortcut::BranchDelete => "gbd",
            Shortcut::Checkout => "gco",
            Shortcut::CheckoutNewBranch => "gcb",
            Shortcut::Clear => "cl",
            Shortcut::Help => "gsh",
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            Shortcut::Commit => Arity::Message,
            Shortcut::PushBranch
            | Shortcut::PullBranch
            | Shortcut::BranchDelete
            | Shortcut::Checkout
            | Shortcut::CheckoutNewBranch => Arity::Branch,
            Shortcut::AddAll
            | Shortcut::RestoreAll
            | Shortcut::Push
            | Shortcut::Pull
            | Shortcut::Status
            | Shortcut::Log
            | Shortcut::BranchList
            | Shortcut::Clear
            | Shortcut::Help => Arity::None,
        }
    }

    /// Key plus argument placeholder, as shown in the help listing.
    pub fn signature(&self) -> String {
        match self.arity() {
            Arity::None => self.key().to_string(),
            Arity::Branch => format!("{} branch-name", self.key()),
            Arity::Message => format!("{} \"message\"", self.key()),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Shortcut::AddAll => "git add .",
            Shortcut::RestoreAll => "git restore .",
            Shortcut::Commit => "git commit -m \"message\"",
            Shortcut::Push => "git push",
            Shortcut::PushBranch => "git push origin branch-name",
            Shortcut::Pull => "git pull",
            Shortcut::PullBranch => "git pull origin branch-name",
            Shortcut::Status => "git status",
            Shortcut::Log => "git log",
            Shortcut::BranchList => "git branch",
            Shortcut::BranchDelete => "git branch -d branch-name",
            Shortcut::Checkout => "git checkout branch-name",
            Shortcut::CheckoutNewBranch => "git checkout -b branch-name",
            Shortcut::Clear => "clear",
            Shortcut::Help => "Show this help message",
        }
    }

    /// The static reference listing printed by the help shortcut.
    pub fn help_text() -> String {
        const SIGNATURE_WIDTH: usize = 18;

        let mut text = String::from(
            "\nGit Shortcuts - Available Commands:\n----------------------------------\n",
        );
        for shortcut in Shortcut::ALL {
            text.push_str(&format!(
                "{:<width$}- {}\n",
                shortcut.signature(),
                shortcut.description(),
                width = SIGNATURE_WIDTH
            ));
        }

        text
    }
}

impl std::fmt::Display for Shortcut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

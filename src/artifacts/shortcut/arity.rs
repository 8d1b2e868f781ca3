/// How many trailing tokens a shortcut consumes, and how it reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Trailing tokens are ignored.
    None,
    /// The first trailing token is a branch name.
    Branch,
    /// All trailing tokens form one space-joined message.
    Message,
}

impl Arity {
    /// Reduces the trailing tokens to the single value this arity expects.
    ///
    /// Returns `None` when a value is required but no token was given.
    pub fn extract(&self, args: &[String]) -> Option<String> {
        match self {
            Arity::None => Some(String::new()),
            Arity::Branch => args.first().cloned(),
            Arity::Message if args.is_empty() => None,
            Arity::Message => Some(args.join(" ")),
        }
    }

    pub fn missing_message(&self) -> &'static str {
        match self {
            Arity::None => "",
            Arity::Branch => "Error: Branch name is required",
            Arity::Message => "Error: Commit message is required",
        }
    }
}

/// The kind of callable an arity error refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CallableKind {
    /// A built-in math function such as `sqrt` or `log`.
    Function,
    /// A built-in procedure such as `print` or `forward`.
    Procedure,
}

#[derive(Debug)]
/// Represents an error raised when a call supplies the wrong number of
/// arguments to a callable with a fixed arity.
pub struct ArityError {
    /// Whether a function or a procedure was called.
    pub kind:     CallableKind,
    /// The name of the callable.
    pub name:     String,
    /// How many arguments the callable requires.
    pub needs:    usize,
    /// How many arguments the call supplied.
    pub provided: usize,
}

impl std::fmt::Display for CallableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Function => "function",
            Self::Procedure => "procedure",
        };
        write!(f, "{kind}")
    }
}

impl std::fmt::Display for ArityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "{} '{}' needs {} argument(s), {} provided.",
               self.kind, self.name, self.needs, self.provided)
    }
}

impl std::error::Error for ArityError {}

//! Public/protected route classification

/// A single public route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// Matches exactly this path
    Exact(String),
    /// Matches this path and everything below it
    Prefix(String),
}

impl PathPattern {
    /// Parse an ant-style pattern: a trailing `/**` makes it a prefix match
    pub fn parse(pattern: &str) -> Self {
        match pattern.strip_suffix("/**") {
            Some(prefix) => Self::Prefix(prefix.to_string()),
            None => Self::Exact(pattern.to_string()),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(exact) => path == exact,
            Self::Prefix(prefix) => match path.strip_prefix(prefix.as_str()) {
                Some(rest) => rest.is_empty() || rest.starts_with('/') || prefix.ends_with('/'),
                None => false,
            },
        }
    }
}

/// Ordered table of public routes; every other path requires authentication
///
/// Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    public: Vec<PathPattern>,
}

impl AccessPolicy {
    pub fn new(public: Vec<PathPattern>) -> Self {
        Self { public }
    }

    /// Build the policy from configured pattern strings
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            patterns
                .into_iter()
                .map(|p| PathPattern::parse(p.as_ref()))
                .collect(),
        )
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.public.iter().any(|pattern| pattern.matches(path))
    }

    pub fn requires_auth(&self, path: &str) -> bool {
        !self.is_public(path)
    }

    pub fn patterns(&self) -> &[PathPattern] {
        &self.public
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::from_patterns(["/auth/login", "/auth/register", "/health", "/live"])
    }
}

use crate::error::identity::InvalidIdentityNameError;
use crate::registry::RESERVED_SECTION_NAMES;
use std::fmt;
use std::str::FromStr;

/// A name that can be registered: usable as a registry section, as a token
/// in the space-separated user list, and as a suffix of an archive path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentityName(String);

impl IdentityName {
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidIdentityNameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(InvalidIdentityNameError::Empty);
        }
        if name.chars().any(char::is_whitespace) {
            return Err(InvalidIdentityNameError::ContainsWhitespace(name));
        }
        if name.contains(['/', '\\']) {
            return Err(InvalidIdentityNameError::ContainsPathSeparator(name));
        }
        if name == "." || name == ".." {
            return Err(InvalidIdentityNameError::RelativePathComponent(name));
        }
        if RESERVED_SECTION_NAMES.contains(&name.as_str()) {
            return Err(InvalidIdentityNameError::Reserved(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for IdentityName {
    type Err = InvalidIdentityNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for IdentityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IdentityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The ordered, duplicate-free list of every identity ever observed.
///
/// Stored in the registry as a single space-separated value. Membership is
/// decided per token, so `bob` is not a member of `bobby`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentityNameSet {
    names: Vec<String>,
}

impl IdentityNameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a stored value. Repeated tokens keep their first position.
    pub fn parse(value: &str) -> Self {
        let mut set = Self::new();
        for token in value.split_whitespace() {
            set.push_token(token);
        }
        set
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Appends `name` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, name: &IdentityName) -> bool {
        self.push_token(name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn push_token(&mut self, token: &str) -> bool {
        if self.contains(token) {
            false
        } else {
            self.names.push(token.to_string());
            true
        }
    }
}

impl fmt::Display for IdentityNameSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_names_that_break_the_registry() {
        assert_eq!(IdentityName::new(""), Err(InvalidIdentityNameError::Empty));
        assert!(matches!(
            IdentityName::new("John Doe"),
            Err(InvalidIdentityNameError::ContainsWhitespace(_))
        ));
        assert!(matches!(
            IdentityName::new("../etc"),
            Err(InvalidIdentityNameError::ContainsPathSeparator(_))
        ));
        assert!(matches!(
            IdentityName::new(".."),
            Err(InvalidIdentityNameError::RelativePathComponent(_))
        ));
        assert!(matches!(
            IdentityName::new("current"),
            Err(InvalidIdentityNameError::Reserved(_))
        ));
        assert!(matches!(
            IdentityName::new("users"),
            Err(InvalidIdentityNameError::Reserved(_))
        ));
        assert_eq!(IdentityName::new("alice").unwrap().as_str(), "alice");
    }

    #[test]
    fn membership_is_per_token() {
        let set = IdentityNameSet::parse("alice bobby");
        assert!(set.contains("bobby"));
        assert!(!set.contains("bob"));
        assert!(!set.contains("ali"));
    }

    #[test]
    fn parse_drops_repeated_tokens() {
        let set = IdentityNameSet::parse("  alice bob\talice  bob carol ");
        assert_eq!(set.to_string(), "alice bob carol");
    }

    #[test]
    fn insert_appends_in_order() {
        let mut set = IdentityNameSet::parse("alice");
        assert!(set.insert(&IdentityName::new("bob").unwrap()));
        assert!(!set.insert(&IdentityName::new("alice").unwrap()));
        assert_eq!(set.to_string(), "alice bob");
    }

    proptest! {
        #[test]
        fn inserting_never_duplicates(names in proptest::collection::vec("[a-t]{1,6}", 0..20)) {
            let mut set = IdentityNameSet::new();
            for name in &names {
                set.insert(&IdentityName::new(name.as_str()).unwrap());
                set.insert(&IdentityName::new(name.as_str()).unwrap());
            }
            let reparsed = IdentityNameSet::parse(&set.to_string());
            let tokens: Vec<&str> = reparsed.iter().collect();
            for (i, token) in tokens.iter().enumerate() {
                prop_assert!(!tokens[i + 1..].contains(token));
            }
            prop_assert_eq!(reparsed, set);
        }
    }
}

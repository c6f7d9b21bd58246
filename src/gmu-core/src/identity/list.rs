use crate::identity::IdentityNameSet;
use crate::registry::Registry;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListedIdentity {
    pub name: String,
    pub is_current: bool,
}

impl fmt::Display for ListedIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_current { '*' } else { ' ' };
        write!(f, "{} {}", marker, self.name)
    }
}

/// A read-only view of the registered identities, in registration order.
#[derive(Clone, Debug)]
pub struct IdentityListing {
    users: IdentityNameSet,
    current: String,
}

impl IdentityListing {
    pub fn from_registry(registry: &Registry) -> Self {
        Self {
            users: registry.users(),
            current: registry.current_name().to_string(),
        }
    }

    /// Can be called any number of times; each call starts from the first identity.
    pub fn iter(&self) -> impl Iterator<Item = ListedIdentity> + '_ {
        self.users.iter().map(move |name| ListedIdentity {
            name: name.to_string(),
            is_current: name == self.current,
        })
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

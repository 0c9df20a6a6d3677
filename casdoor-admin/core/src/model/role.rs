use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::{error, ADMINISTRATOR_ROLE};

/// Role names of which the operator must hold at least one.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct RoleSet(IndexSet<String>);

impl RoleSet {
    /// # Errors
    ///
    /// Returns an error if no role is given or a role name is blank.
    pub fn new<I, S>(roles: I) -> error::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles = roles.into_iter().map(Into::into).collect::<IndexSet<String>>();
        if roles.is_empty() {
            return Err(error::Error::EmptyRoleSet);
        }
        if roles.iter().any(|role| role.trim().is_empty()) {
            return Err(error::Error::BlankRoleName);
        }
        Ok(Self(roles))
    }

    #[must_use]
    pub fn administrator() -> Self { Self(IndexSet::from([ADMINISTRATOR_ROLE.to_string()])) }

    /// Reports whether any of `granted` is one of the required roles.
    pub fn is_satisfied_by<'a, I>(&self, granted: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        granted.into_iter().any(|role| self.0.contains(role))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> { self.0.iter().map(String::as_str) }

    #[must_use]
    pub fn len(&self) -> usize { self.0.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl TryFrom<Vec<String>> for RoleSet {
    type Error = error::Error;

    fn try_from(roles: Vec<String>) -> Result<Self, Self::Error> { Self::new(roles) }
}

impl From<RoleSet> for Vec<String> {
    fn from(roles: RoleSet) -> Self { roles.0.into_iter().collect() }
}

impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, role) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(role)?;
        }
        Ok(())
    }
}

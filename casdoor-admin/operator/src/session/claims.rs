use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// Subset of the claims Casdoor puts into operator access tokens.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    #[serde(default)]
    pub owner: String,

    pub name: String,

    #[serde(default)]
    pub display_name: String,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub roles: Vec<ClaimRole>,

    pub exp: i64,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ClaimRole {
    #[serde(default)]
    pub owner: String,

    pub name: String,
}

impl Claims {
    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(|role| role.name.as_str())
    }
}

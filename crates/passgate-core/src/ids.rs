//! Identifier newtypes.
//!
//! `UserId` and `TokenId` are both UUIDs underneath but are distinct types,
//! so a token id cannot be handed to something that expects a user.
//!
//! ```
//! use passgate_core::{TokenId, UserId};
//!
//! fn owner_of(user: UserId) -> String {
//!     user.to_string()
//! }
//!
//! let user = UserId::new();
//! let _token = TokenId::new();
//! assert_eq!(owner_of(user).len(), 36);
//! // owner_of(_token); // mismatched types
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// A string that is not a valid identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {source}")]
pub struct ParseIdError {
    /// Name of the identifier type, e.g. `"UserId"`.
    pub kind: &'static str,
    #[source]
    pub source: uuid::Error,
}

macro_rules! uuid_newtype {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Fresh random (v4) identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<Uuid>().map(Self).map_err(|source| ParseIdError {
                    kind: stringify!($name),
                    source,
                })
            }
        }
    };
}

uuid_newtype!(
    /// Identifier of a registered user, assigned by the user store.
    ///
    /// Carried in the `sub` claim of every issued token.
    ///
    /// ```
    /// use passgate_core::UserId;
    ///
    /// let id: UserId = "123e4567-e89b-12d3-a456-426614174000".parse().unwrap();
    /// assert_eq!(id.to_string(), "123e4567-e89b-12d3-a456-426614174000");
    /// ```
    UserId
);

uuid_newtype!(
    /// Unique identifier of one issued token (the `jti` claim).
    ///
    /// Lets log lines refer to a token without printing the token itself.
    TokenId
);

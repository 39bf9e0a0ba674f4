use serde::{Deserialize, Serialize};
#[cfg(feature = "backend")]
use rusqlite::{
    types::{FromSql, FromSqlResult, ToSqlOutput, Value, ValueRef},
    ToSql,
};

use super::UserId;

/// Who can see a catalog record.
///
/// Stored as a nullable owner column: `NULL` is [`Visibility::Shared`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    /// Private to one user, who may also write it
    Owned(UserId),
    /// Global read-only entry visible to every user
    Shared,
}

impl Visibility {
    /// `owner == user || shared`
    pub fn is_visible_to(&self, user: &UserId) -> bool {
        match self {
            Visibility::Owned(owner) => owner == user,
            Visibility::Shared => true,
        }
    }

    pub fn owner(&self) -> Option<UserId> {
        match self {
            Visibility::Owned(owner) => Some(*owner),
            Visibility::Shared => None,
        }
    }
}

impl From<UserId> for Visibility {
    fn from(owner: UserId) -> Self {
        Visibility::Owned(owner)
    }
}

#[cfg(feature = "backend")]
impl ToSql for Visibility {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Visibility::Owned(owner) => ToSqlOutput::from(owner.id),
            Visibility::Shared => ToSqlOutput::Owned(Value::Null),
        })
    }
}

#[cfg(feature = "backend")]
impl FromSql for Visibility {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Ok(match value {
            ValueRef::Null => Visibility::Shared,
            other => Visibility::Owned(UserId::column_result(other)?),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_owned_is_only_visible_to_owner() {
        let alice = UserId::new(1);
        let bob = UserId::new(2);
        let owned = Visibility::Owned(alice);
        assert!(owned.is_visible_to(&alice));
        assert!(!owned.is_visible_to(&bob));
        assert_eq!(owned.owner(), Some(alice));
    }

    #[test]
    fn test_shared_is_visible_to_everyone() {
        assert!(Visibility::Shared.is_visible_to(&UserId::new(1)));
        assert!(Visibility::Shared.is_visible_to(&UserId::new(2)));
        assert_eq!(Visibility::Shared.owner(), None);
    }
}

//! The `User` item type and the `users` query.

use pagewin::{PageQuery, PageWindow, Paginator, Projection, Record, Result};
use serde::Serialize;

/// A user as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// The name of the user.
    pub name: String,
    /// The occupation of the user.
    pub occupation: String,
    /// The age of the user.
    pub age: i64,
}

impl User {
    pub const NAME: &'static str = "name";
    pub const OCCUPATION: &'static str = "occupation";
    pub const AGE: &'static str = "age";
}

impl Projection for User {
    const FIELDS: &'static [&'static str] = &[User::NAME, User::OCCUPATION, User::AGE];

    fn project(record: &Record) -> Result<Self> {
        Ok(User {
            name: record.require_str(User::NAME)?.to_string(),
            occupation: record.require_str(User::OCCUPATION)?.to_string(),
            age: record.require_int(User::AGE)?,
        })
    }
}

/// Arguments of the `users` query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersArgs {
    pub order_by: String,
    pub limit: Option<i64>,
    pub offset: i64,
    pub name: Option<String>,
    pub occupation: Option<String>,
}

impl UsersArgs {
    /// Builds the page query. Empty name/occupation arguments add no filter.
    pub fn to_query(&self) -> PageQuery {
        PageQuery::new(self.order_by.as_str())
            .maybe_limit(self.limit)
            .offset(self.offset)
            .filter_opt(User::NAME, self.name.as_deref())
            .filter_opt(User::OCCUPATION, self.occupation.as_deref())
    }
}

/// Get a list of users.
pub fn users(
    paginator: &Paginator,
    dataset: &[Record],
    args: &UsersArgs,
) -> Result<PageWindow<User>> {
    paginator.paginate(dataset, &args.to_query())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(order_by: &str) -> UsersArgs {
        UsersArgs {
            order_by: order_by.into(),
            ..UsersArgs::default()
        }
    }

    #[test]
    fn query_from_args() {
        let q = UsersArgs {
            limit: Some(5),
            offset: 1,
            name: Some("Osborn".into()),
            occupation: Some(String::new()),
            ..args("age")
        }
        .to_query();

        assert_eq!(q.order_by(), "age");
        assert_eq!(q.get_limit(), Some(5));
        assert_eq!(q.get_offset(), 1);
        assert_eq!(q.filters().iter().collect::<Vec<_>>(), vec![("name", "Osborn")]);
    }

    #[test]
    fn project_user() {
        let r = Record::new()
            .with("id", 9)
            .with("name", "Eddie Brock")
            .with("occupation", "Journalist")
            .with("age", 20);
        assert_eq!(
            User::project(&r).unwrap(),
            User {
                name: "Eddie Brock".into(),
                occupation: "Journalist".into(),
                age: 20,
            }
        );
    }

    #[test]
    fn id_is_not_an_order_key() {
        assert!(!User::has_field("id"));
        let err = users(&Paginator::default(), &[], &args("id")).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}

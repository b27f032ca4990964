//! Filter value object and its compilation into one query condition.
//!
//! Each predicate primitive returns `Option<SimpleExpr>`: `None` means
//! "impose no constraint on this dimension". The composer folds the
//! primitives with AND via `Condition::add_option`, which skips `None`
//! entries, so an all-absent filter compiles to the empty conjunction and
//! the query builder emits no WHERE clause at all (match everything).

use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition};
use serde::{Deserialize, Serialize};

use crate::entity::{member, team};

/// Sparse search criteria over the member/team join.
///
/// Every field is independently optional; absence means "no constraint",
/// not "require null". Blank strings are indistinguishable from absent
/// fields — an HTTP layer binding empty query parameters produces `""`,
/// which must not filter anything out.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilter {
    /// Exact match on `member.username`.
    pub username: Option<String>,
    /// Exact match on `team.name`, through the join.
    pub team_name: Option<String>,
    /// Inclusive lower bound on `member.age`.
    pub age_min: Option<i32>,
    /// Inclusive upper bound on `member.age`.
    pub age_max: Option<i32>,
}

impl SearchFilter {
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn with_team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    #[must_use]
    pub fn with_age_min(mut self, age_min: i32) -> Self {
        self.age_min = Some(age_min);
        self
    }

    #[must_use]
    pub fn with_age_max(mut self, age_max: i32) -> Self {
        self.age_max = Some(age_max);
        self
    }

    /// Compose the present fields into one conjunction.
    ///
    /// Composition order is fixed (username, team name, lower bound, upper
    /// bound) so the generated SQL is deterministic per call.
    #[must_use]
    pub fn to_condition(&self) -> Condition {
        Condition::all()
            .add_option(username_eq(self.username.as_deref()))
            .add_option(team_name_eq(self.team_name.as_deref()))
            .add_option(age_goe(self.age_min))
            .add_option(age_loe(self.age_max))
    }
}

/// Treat `None` and blank strings alike.
fn has_text(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

fn username_eq(username: Option<&str>) -> Option<SimpleExpr> {
    has_text(username).map(|u| member::Column::Username.eq(u))
}

fn team_name_eq(team_name: Option<&str>) -> Option<SimpleExpr> {
    has_text(team_name).map(|n| team::Column::Name.eq(n))
}

fn age_goe(age_min: Option<i32>) -> Option<SimpleExpr> {
    age_min.map(|min| member::Column::Age.gte(min))
}

fn age_loe(age_max: Option<i32>) -> Option<SimpleExpr> {
    age_max.map(|max| member::Column::Age.lte(max))
}

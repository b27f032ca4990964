//! Query executor for the member/team schema.
//!
//! Every function is generic over `C: ConnectionTrait`: the caller passes a
//! plain connection or an open transaction and thereby owns the scope the
//! reads run in. Nothing here begins, commits or rolls back anything.

use sea_orm::sea_query::Order;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
};
use serde::Serialize;
use tracing::instrument;

use crate::entity::{member, team};
use crate::error::Result;
use crate::filter::SearchFilter;
use crate::page::{OrderBy, Page, PageRequest, SortDir, SortField};

/// Flattened read-only projection of the member/team left join.
///
/// Team fields are null for unaffiliated members; the row is produced by
/// the join and never persisted.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct MemberTeamRow {
    pub member_id: i64,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
}

/// Data for persisting a new member.
#[derive(Clone, Debug, Default)]
pub struct NewMember {
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i64>,
}

/// Members left-joined to their team and filtered by the composed condition.
///
/// The left join keeps members with no team; their team columns surface as
/// null in the projection.
fn joined(filter: &SearchFilter) -> Select<member::Entity> {
    member::Entity::find()
        .join(JoinType::LeftJoin, member::Relation::Team.def())
        .filter(filter.to_condition())
}

fn project(select: Select<member::Entity>) -> Select<member::Entity> {
    select
        .select_only()
        .column_as(member::Column::Id, "member_id")
        .column(member::Column::Username)
        .column(member::Column::Age)
        .column_as(team::Column::Id, "team_id")
        .column_as(team::Column::Name, "team_name")
}

fn ordered(select: Select<member::Entity>, order: OrderBy) -> Select<member::Entity> {
    let dir = match order.dir {
        SortDir::Asc => Order::Asc,
        SortDir::Desc => Order::Desc,
    };
    match order.field {
        SortField::MemberId => select.order_by(member::Column::Id, dir),
        SortField::Username => select.order_by(member::Column::Username, dir),
        SortField::Age => select.order_by(member::Column::Age, dir),
        SortField::TeamName => select.order_by(team::Column::Name, dir),
    }
}

/// Unpaged search: all rows matching the filter, no implicit limit.
///
/// Result order is whatever the backing store returns; callers that need a
/// specific order should use [`search_page`] with an explicit [`OrderBy`].
///
/// # Errors
/// Returns [`crate::SearchError::Db`] when the store rejects the query.
#[instrument(level = "debug", skip(conn))]
pub async fn search<C>(conn: &C, filter: &SearchFilter) -> Result<Vec<MemberTeamRow>>
where
    C: ConnectionTrait,
{
    let rows = project(joined(filter))
        .into_model::<MemberTeamRow>()
        .all(conn)
        .await?;
    Ok(rows)
}

/// Paged search: one bounded content query plus the total count of rows
/// matching the same condition.
///
/// Both queries observe the same composed condition and run in whatever
/// scope `conn` provides; they are not atomic with each other beyond that.
/// The count query is skipped whenever a short page already proves the
/// total (see `PageRequest::proven_total`).
///
/// # Errors
/// Returns [`crate::SearchError::Db`] when the store rejects either query.
#[instrument(level = "debug", skip(conn))]
pub async fn search_page<C>(
    conn: &C,
    filter: &SearchFilter,
    request: &PageRequest,
) -> Result<Page<MemberTeamRow>>
where
    C: ConnectionTrait,
{
    let mut select = joined(filter);
    if let Some(order) = request.order() {
        select = ordered(select, order);
    }
    let content = project(select)
        .offset(request.offset())
        .limit(request.page_size())
        .into_model::<MemberTeamRow>()
        .all(conn)
        .await?;

    let total = match request.proven_total(content.len()) {
        Some(total) => total,
        None => joined(filter).count(conn).await?,
    };

    Ok(Page::assemble(content, request, total))
}

/// Persist a new member; the surrogate id is generated by the store.
///
/// # Errors
/// Returns [`crate::SearchError::Db`] when the insert fails.
pub async fn save_member<C>(conn: &C, new_member: NewMember) -> Result<member::Model>
where
    C: ConnectionTrait,
{
    let model = member::ActiveModel {
        username: Set(new_member.username),
        age: Set(new_member.age),
        team_id: Set(new_member.team_id),
        ..Default::default()
    }
    .insert(conn)
    .await?;
    Ok(model)
}

/// Persist a new team.
///
/// # Errors
/// Returns [`crate::SearchError::Db`] when the insert fails.
pub async fn save_team<C>(conn: &C, name: &str) -> Result<team::Model>
where
    C: ConnectionTrait,
{
    let model = team::ActiveModel {
        name: Set(name.to_owned()),
        ..Default::default()
    }
    .insert(conn)
    .await?;
    Ok(model)
}

/// # Errors
/// Returns [`crate::SearchError::Db`] when the store rejects the query.
pub async fn find_member_by_id<C>(conn: &C, id: i64) -> Result<Option<member::Model>>
where
    C: ConnectionTrait,
{
    Ok(member::Entity::find_by_id(id).one(conn).await?)
}

/// # Errors
/// Returns [`crate::SearchError::Db`] when the store rejects the query.
pub async fn find_all_members<C>(conn: &C) -> Result<Vec<member::Model>>
where
    C: ConnectionTrait,
{
    Ok(member::Entity::find().all(conn).await?)
}

/// # Errors
/// Returns [`crate::SearchError::Db`] when the store rejects the query.
pub async fn find_members_by_username<C>(conn: &C, username: &str) -> Result<Vec<member::Model>>
where
    C: ConnectionTrait,
{
    let rows = member::Entity::find()
        .filter(member::Column::Username.eq(username))
        .all(conn)
        .await?;
    Ok(rows)
}

/// The derived reverse view of the weak Team→Member back-reference.
///
/// # Errors
/// Returns [`crate::SearchError::Db`] when the store rejects the query.
pub async fn members_of_team<C>(conn: &C, team_id: i64) -> Result<Vec<member::Model>>
where
    C: ConnectionTrait,
{
    let rows = member::Entity::find()
        .filter(member::Column::TeamId.eq(team_id))
        .all(conn)
        .await?;
    Ok(rows)
}

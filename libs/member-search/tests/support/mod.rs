use anyhow::Result;
use member_search::db::{self, DbOpts};
use member_search::repo::{self, NewMember};
use sea_orm::{ConnectionTrait, DatabaseConnection};

/// Fresh in-memory `SQLite` database with the member/team schema applied.
pub async fn setup_db() -> Result<DatabaseConnection> {
    init_tracing();
    let conn = db::connect(db::SQLITE_MEMORY_URL, &DbOpts::in_memory()).await?;
    create_schema(&conn).await?;
    Ok(conn)
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

async fn create_schema(conn: &DatabaseConnection) -> Result<()> {
    conn.execute_unprepared(
        "CREATE TABLE team (
id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
name TEXT NOT NULL
)",
    )
    .await?;
    conn.execute_unprepared(
        "CREATE TABLE member (
id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
username TEXT,
age INTEGER NOT NULL,
team_id INTEGER REFERENCES team (id)
)",
    )
    .await?;
    Ok(())
}

/// teamA/teamB plus the four classic members.
pub async fn seed_four_members(conn: &DatabaseConnection) -> Result<()> {
    let team_a = repo::save_team(conn, "teamA").await?;
    let team_b = repo::save_team(conn, "teamB").await?;
    for (username, age, team_id) in [
        ("member1", 10, team_a.id),
        ("member2", 20, team_a.id),
        ("member3", 30, team_b.id),
        ("member4", 40, team_b.id),
    ] {
        repo::save_member(
            conn,
            NewMember {
                username: Some(username.to_owned()),
                age,
                team_id: Some(team_id),
            },
        )
        .await?;
    }
    Ok(())
}

/// One hundred members alternating between two teams, ages 0..100.
pub async fn seed_hundred_members(conn: &DatabaseConnection) -> Result<()> {
    let team_a = repo::save_team(conn, "teamA").await?;
    let team_b = repo::save_team(conn, "teamB").await?;
    for i in 0..100_i32 {
        let team_id = if i % 2 == 0 { team_a.id } else { team_b.id };
        repo::save_member(
            conn,
            NewMember {
                username: Some(format!("member{i}")),
                age: i,
                team_id: Some(team_id),
            },
        )
        .await?;
    }
    Ok(())
}

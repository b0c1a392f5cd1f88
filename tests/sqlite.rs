use chrono::{TimeZone, Utc};
use nullables::{NullBool, NullFloat64, NullInt64, NullString, NullTime};
use sqlx::{Connection, Executor, SqliteConnection};

mod common;

type Record = (NullInt64, NullString, NullFloat64, NullBool, NullTime);

async fn connect() -> anyhow::Result<SqliteConnection> {
    common::setup_if_needed();

    let mut conn = SqliteConnection::connect("sqlite::memory:").await?;

    conn.execute(
        r#"
CREATE TABLE records (
    id INTEGER PRIMARY KEY,
    n INTEGER,
    s TEXT,
    f REAL,
    b BOOLEAN,
    t DATETIME
)
        "#,
    )
    .await?;

    Ok(conn)
}

async fn insert(conn: &mut SqliteConnection, id: i64, record: &Record) -> anyhow::Result<()> {
    sqlx::query("INSERT INTO records (id, n, s, f, b, t) VALUES (?, ?, ?, ?, ?, ?)")
        .bind(id)
        .bind(record.0)
        .bind(record.1.clone())
        .bind(record.2)
        .bind(record.3)
        .bind(record.4)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

async fn fetch(conn: &mut SqliteConnection, id: i64) -> anyhow::Result<Record> {
    let record = sqlx::query_as::<_, Record>("SELECT n, s, f, b, t FROM records WHERE id = ?")
        .bind(id)
        .fetch_one(&mut *conn)
        .await?;

    Ok(record)
}

#[tokio::test]
async fn it_round_trips_valid_values() -> anyhow::Result<()> {
    let mut conn = connect().await?;

    let record = (
        NullInt64::new(9358295312),
        NullString::new("this is foo".into()),
        NullFloat64::new(939399419.1225182),
        NullBool::new(true),
        NullTime::new(Utc.with_ymd_and_hms(2024, 12, 31, 8, 30, 0).unwrap()),
    );

    insert(&mut conn, 1, &record).await?;

    assert_eq!(fetch(&mut conn, 1).await?, record);

    Ok(())
}

#[tokio::test]
async fn it_binds_null_wrappers_as_sql_null() -> anyhow::Result<()> {
    let mut conn = connect().await?;

    // stale values behind a cleared flag must not reach the store
    let mut n = NullInt64::new(5);
    n.clear();

    let record = (
        n,
        NullString::null(),
        NullFloat64::null(),
        NullBool::null(),
        NullTime::null(),
    );

    insert(&mut conn, 2, &record).await?;

    let (n, s, f, b, t) = fetch(&mut conn, 2).await?;

    assert!(n.is_null());
    assert!(s.is_null());
    assert!(f.is_null());
    assert!(b.is_null());
    assert!(t.is_null());

    let nulls: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM records WHERE id = 2 AND n IS NULL AND s IS NULL AND t IS NULL",
    )
    .fetch_one(&mut conn)
    .await?;

    assert_eq!(nulls, 1);

    Ok(())
}

#[tokio::test]
async fn it_decodes_a_mix_of_present_and_missing_columns() -> anyhow::Result<()> {
    let mut conn = connect().await?;

    conn.execute("INSERT INTO records (id, n, s) VALUES (3, 42, NULL)")
        .await?;

    let (n, s, f, _, _) = fetch(&mut conn, 3).await?;

    assert_eq!(n, NullInt64::new(42));
    assert_eq!(s, NullString::null());
    assert_eq!(f, NullFloat64::null());

    Ok(())
}

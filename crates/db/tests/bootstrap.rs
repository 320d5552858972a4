use sqlx::PgPool;

/// Connect, migrate, and confirm every table is present.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    junrei_db::health_check(&pool).await.unwrap();

    let tables = [
        "missions",
        "places",
        "mission_places",
        "visits",
        "visit_photos",
        "reports",
        "certificates",
        "badges",
        "user_badges",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// The mission slug is unique and the violation names a `uq_` constraint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_slug_violates_named_constraint(pool: PgPool) {
    sqlx::query("INSERT INTO missions (slug, title) VALUES ('shikoku', 'A')")
        .execute(&pool)
        .await
        .unwrap();

    let err = sqlx::query("INSERT INTO missions (slug, title) VALUES ('shikoku', 'B')")
        .execute(&pool)
        .await
        .unwrap_err();

    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_missions_slug"));
}

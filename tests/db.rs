use customer_service::db::with_connection;
use customer_service::repository::errors::RepositoryError;
use diesel::prelude::*;

mod common;

#[test]
fn test_pool_hands_out_connections() {
    let test_db = common::TestDb::new("test_pool_connection.db");
    let conn = test_db.pool().get();
    assert!(conn.is_ok());
}

#[test]
fn test_unit_of_work_commits_on_success() {
    use customer_service::schema::customers;

    let test_db = common::TestDb::new("test_unit_of_work_commits.db");

    with_connection(test_db.pool(), |conn| {
        diesel::insert_into(customers::table)
            .values((
                customers::name.eq("Ann"),
                customers::email.eq("a@x.com"),
                customers::phone.eq("555"),
                customers::address.eq("1 Main St"),
            ))
            .execute(conn)
            .map_err(RepositoryError::from)
    })
    .unwrap();

    let count: i64 = with_connection(test_db.pool(), |conn| {
        customers::table
            .count()
            .get_result(conn)
            .map_err(RepositoryError::from)
    })
    .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_unit_of_work_rolls_back_on_error() {
    use customer_service::schema::customers;

    let test_db = common::TestDb::new("test_unit_of_work_rolls_back.db");

    let result: Result<(), RepositoryError> = with_connection(test_db.pool(), |conn| {
        diesel::insert_into(customers::table)
            .values((
                customers::name.eq("Ann"),
                customers::email.eq("a@x.com"),
                customers::phone.eq("555"),
                customers::address.eq("1 Main St"),
            ))
            .execute(conn)?;
        Err(RepositoryError::Unexpected("abort".to_string()))
    });
    assert!(matches!(result, Err(RepositoryError::Unexpected(_))));

    let count: i64 = with_connection(test_db.pool(), |conn| {
        customers::table
            .count()
            .get_result(conn)
            .map_err(RepositoryError::from)
    })
    .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn test_sql_errors_surface_as_repository_errors() {
    let test_db = common::TestDb::new("test_sql_errors.db");

    let result = with_connection(test_db.pool(), |conn| {
        diesel::sql_query("SELECT * FROM missing_table")
            .execute(conn)
            .map_err(RepositoryError::from)
    });

    assert!(matches!(result, Err(RepositoryError::DatabaseError(_))));
}

#[derive(QueryableByName)]
struct ForeignKeys {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    foreign_keys: i32,
}

#[derive(QueryableByName)]
struct JournalMode {
    #[diesel(sql_type = diesel::sql_types::Text)]
    journal_mode: String,
}

#[test]
fn test_pooled_connections_carry_pragmas() {
    let test_db = common::TestDb::new("test_pooled_pragmas.db");
    let mut conn = test_db.pool().get().unwrap();

    let fk: ForeignKeys = diesel::sql_query("PRAGMA foreign_keys")
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(fk.foreign_keys, 1);

    let mode: JournalMode = diesel::sql_query("PRAGMA journal_mode")
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(mode.journal_mode, "wal");
}

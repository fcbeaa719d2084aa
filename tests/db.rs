mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let path = {
        let test_db = common::TestDb::new("test_creates_and_removes_db_files.db");
        let conn = test_db.pool().get();
        assert!(conn.is_ok());
        assert!(test_db.path().exists());
        test_db.path().clone()
    };
    assert!(!path.exists());
}

#[test]
fn test_default_pool_is_read_only() {
    use diesel::connection::SimpleConnection;

    let test_db = common::TestDb::new("test_default_pool_is_read_only.db");
    let database_url = test_db.path().to_string_lossy().to_string();

    let pool = sports_store::db::establish_connection_pool(&database_url).expect("build pool");
    let mut conn = pool.get().expect("get connection");

    let result = conn.batch_execute(
        "INSERT INTO products (name, description, price) VALUES ('Kayak', '', '275');",
    );
    assert!(result.is_err());
}

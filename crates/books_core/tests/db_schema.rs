use books_core::db::schema::{ensure_schema, BOOKS_TABLE};
use books_core::db::{open_db, open_db_in_memory};
use books_core::{Book, BooksDb, RepoError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_books_table() {
    let conn = open_db_in_memory().unwrap();

    assert_table_exists(&conn, BOOKS_TABLE);
    assert_eq!(column_names(&conn), vec!["id", "title", "author"]);
}

#[test]
fn ensure_schema_is_idempotent_on_same_connection() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO books (id, title, author) VALUES (1, 'Dune', 'Frank Herbert');",
        [],
    )
    .unwrap();

    ensure_schema(&conn).unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM books;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn reopening_same_file_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.db");

    let first = BooksDb::open(&path).unwrap();
    first.upsert(1, "Dune", "Frank Herbert").unwrap();
    first.close().unwrap();

    let second = BooksDb::open(&path).unwrap();
    assert_eq!(
        second.get_by_id(1).unwrap(),
        Book::new(1, "Dune", "Frank Herbert")
    );
    assert_eq!(second.list_all().unwrap().len(), 1);
}

#[test]
fn open_creates_missing_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.db");
    assert!(!path.exists());

    let conn = open_db(&path).unwrap();
    assert_table_exists(&conn, BOOKS_TABLE);
    assert!(path.exists());
}

#[test]
fn open_in_missing_directory_returns_db_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("books.db");

    let err = BooksDb::open(&path).err().unwrap();
    assert!(matches!(err, RepoError::Db(_)));
}

#[test]
fn null_fields_in_existing_rows_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE books (id INTEGER PRIMARY KEY, title TEXT, author TEXT);
         INSERT INTO books (id, title, author) VALUES (9, NULL, 'Anonymous');",
    )
    .unwrap();
    drop(conn);

    let db = BooksDb::open(&path).unwrap();
    let err = db.get_by_id(9).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

fn column_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn.prepare("PRAGMA table_info(books);").unwrap();
    let names = stmt
        .query_map([], |row| row.get::<_, String>("name"))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    names
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}

use quill_core::db::open_db_in_memory;
use quill_core::{
    Author, AuthorDraft, AuthorListQuery, AuthorNameLookup, AuthorRepository, AuthorService,
    RepoError, SqliteAuthorRepository, ValidationError,
};
use rusqlite::params;
use uuid::Uuid;

fn validation_of(err: &RepoError) -> &ValidationError {
    err.as_validation()
        .unwrap_or_else(|| panic!("expected validation error, got {err}"))
}

#[test]
fn register_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let service = AuthorService::new(SqliteAuthorRepository::new(&conn));

    let author = service
        .register_author(&AuthorDraft::new("Mary Shelley", "5551234567"))
        .unwrap();

    let loaded = service.get_author(author.id()).unwrap().unwrap();
    assert_eq!(loaded, author);
}

#[test]
fn registering_duplicate_name_fails_for_the_second() {
    let conn = open_db_in_memory().unwrap();
    let service = AuthorService::new(SqliteAuthorRepository::new(&conn));

    service
        .register_author(&AuthorDraft::new("Mary Shelley", "5551234567"))
        .unwrap();
    let err = service
        .register_author(&AuthorDraft::new("Mary Shelley", "5557654321"))
        .unwrap_err();

    assert_eq!(validation_of(&err), &ValidationError::DuplicateName);
    let all = service.list_authors(&AuthorListQuery::default()).unwrap();
    assert_eq!(all.len(), 1);
}

#[test]
fn renaming_to_own_name_succeeds() {
    let conn = open_db_in_memory().unwrap();
    let service = AuthorService::new(SqliteAuthorRepository::new(&conn));

    let author = service
        .register_author(&AuthorDraft::new("Mary Shelley", "5551234567"))
        .unwrap();
    let renamed = service.rename_author(author.id(), "Mary Shelley").unwrap();

    assert_eq!(renamed.name(), "Mary Shelley");
}

#[test]
fn changing_phone_without_changing_name_succeeds() {
    let conn = open_db_in_memory().unwrap();
    let service = AuthorService::new(SqliteAuthorRepository::new(&conn));

    let author = service
        .register_author(&AuthorDraft::new("Mary Shelley", "5551234567"))
        .unwrap();
    service
        .change_phone_number(author.id(), "5550001111")
        .unwrap();

    let loaded = service.get_author(author.id()).unwrap().unwrap();
    assert_eq!(loaded.name(), "Mary Shelley");
    assert_eq!(loaded.phone_number(), "5550001111");
}

#[test]
fn renaming_to_taken_name_fails_and_leaves_store_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let service = AuthorService::new(SqliteAuthorRepository::new(&conn));

    service
        .register_author(&AuthorDraft::new("Mary Shelley", "5551234567"))
        .unwrap();
    let bram = service
        .register_author(&AuthorDraft::new("Bram Stoker", "5559876543"))
        .unwrap();

    let err = service.rename_author(bram.id(), "Mary Shelley").unwrap_err();
    assert_eq!(validation_of(&err), &ValidationError::DuplicateName);

    let loaded = service.get_author(bram.id()).unwrap().unwrap();
    assert_eq!(loaded.name(), "Bram Stoker");
}

#[test]
fn invalid_phone_update_leaves_store_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let service = AuthorService::new(SqliteAuthorRepository::new(&conn));

    let author = service
        .register_author(&AuthorDraft::new("Mary Shelley", "5551234567"))
        .unwrap();
    let err = service
        .change_phone_number(author.id(), "555123456x")
        .unwrap_err();
    assert_eq!(validation_of(&err), &ValidationError::InvalidPhone);

    let loaded = service.get_author(author.id()).unwrap().unwrap();
    assert_eq!(loaded.phone_number(), "5551234567");
}

#[test]
fn register_rejects_blank_name_without_writing() {
    let conn = open_db_in_memory().unwrap();
    let service = AuthorService::new(SqliteAuthorRepository::new(&conn));

    let err = service
        .register_author(&AuthorDraft::new("   ", "5551234567"))
        .unwrap_err();
    assert_eq!(validation_of(&err), &ValidationError::MissingName);
    assert!(service
        .list_authors(&AuthorListQuery::default())
        .unwrap()
        .is_empty());
}

#[test]
fn updates_on_missing_author_return_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = AuthorService::new(SqliteAuthorRepository::new(&conn));
    let missing = Uuid::new_v4();

    let err = service.rename_author(missing, "Anyone").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == missing));

    let err = service.delete_author(missing).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == missing));
}

#[test]
fn storage_unique_index_backstops_racing_writers() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAuthorRepository::new(&conn);

    // Both writers validate before either commits.
    let first = Author::new("Mary Shelley", "5551234567", &repo).unwrap();
    let second = Author::new("Mary Shelley", "5557654321", &repo).unwrap();

    repo.create_author(&first).unwrap();
    let err = repo.create_author(&second).unwrap_err();
    assert_eq!(validation_of(&err), &ValidationError::DuplicateName);
}

#[test]
fn name_lookup_is_exact_and_returns_at_most_one_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAuthorRepository::new(&conn);

    let author = Author::new("Mary Shelley", "5551234567", &repo).unwrap();
    repo.create_author(&author).unwrap();

    assert_eq!(
        repo.find_author_id_by_name("Mary Shelley").unwrap(),
        Some(author.id())
    );
    assert_eq!(repo.find_author_id_by_name("mary shelley").unwrap(), None);
    assert_eq!(repo.find_author_id_by_name("Mary Shelley ").unwrap(), None);

    let found = repo.find_author_by_name("Mary Shelley").unwrap().unwrap();
    assert_eq!(found, author);
}

#[test]
fn list_orders_by_name_and_paginates() {
    let conn = open_db_in_memory().unwrap();
    let service = AuthorService::new(SqliteAuthorRepository::new(&conn));

    for (name, phone) in [
        ("Charlie", "5550000003"),
        ("Alice", "5550000001"),
        ("Bob", "5550000002"),
    ] {
        service
            .register_author(&AuthorDraft::new(name, phone))
            .unwrap();
    }

    let names = |query: &AuthorListQuery| -> Vec<String> {
        service
            .list_authors(query)
            .unwrap()
            .iter()
            .map(|author| author.name().to_string())
            .collect()
    };

    assert_eq!(names(&AuthorListQuery::default()), ["Alice", "Bob", "Charlie"]);
    assert_eq!(
        names(&AuthorListQuery {
            limit: Some(1),
            offset: 1
        }),
        ["Bob"]
    );
    assert_eq!(
        names(&AuthorListQuery {
            limit: None,
            offset: 2
        }),
        ["Charlie"]
    );
}

#[test]
fn delete_removes_author_and_frees_the_name() {
    let conn = open_db_in_memory().unwrap();
    let service = AuthorService::new(SqliteAuthorRepository::new(&conn));

    let author = service
        .register_author(&AuthorDraft::new("Mary Shelley", "5551234567"))
        .unwrap();
    service.delete_author(author.id()).unwrap();

    assert!(service.get_author(author.id()).unwrap().is_none());
    service
        .register_author(&AuthorDraft::new("Mary Shelley", "5551234567"))
        .unwrap();
}

#[test]
fn invalid_persisted_id_is_reported_not_masked() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO authors (id, name, phone_number) VALUES (?1, ?2, ?3);",
        params!["not-a-uuid", "Broken Row", "5551234567"],
    )
    .unwrap();

    let repo = SqliteAuthorRepository::new(&conn);
    let err = repo.find_author_by_name("Broken Row").unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("authors.id")));
}

use red30_core::db::{create_pool, DbPool, PoolConfig};
use red30_core::{
    MutationOutcome, RepoError, SalesPerson, SalesPersonRepository, SalesPersonService,
    SqliteSalesPersonRepository,
};
use tempfile::TempDir;

fn sales_pool() -> (TempDir, DbPool) {
    let dir = tempfile::tempdir().unwrap();
    let pool = create_pool(dir.path().join("red30_test.db"), &PoolConfig::default()).unwrap();
    (dir, pool)
}

fn john_doe() -> SalesPerson {
    SalesPerson::new("John", "Doe", "john.doe@example.com", "CityA", "StateX")
}

#[test]
fn create_salesperson_returns_assigned_id() {
    let (_dir, pool) = sales_pool();
    let repo = SqliteSalesPersonRepository::try_new(pool).unwrap();

    let first_id = repo.create_salesperson(&john_doe()).unwrap();
    assert!(first_id >= 1);

    let second_id = repo
        .create_salesperson(&SalesPerson::new(
            "Jane",
            "Doe",
            "jane.doe@example.com",
            "CityA",
            "StateX",
        ))
        .unwrap();
    assert!(second_id > first_id);
}

#[test]
fn read_salesperson_roundtrip_preserves_all_fields() {
    let (_dir, pool) = sales_pool();
    let repo = SqliteSalesPersonRepository::try_new(pool).unwrap();

    let person = john_doe();
    repo.create_salesperson(&person).unwrap();

    let loaded = repo.read_salesperson("John", "Doe").unwrap().unwrap();
    assert_eq!(loaded, person);
}

#[test]
fn read_salesperson_without_match_returns_none() {
    let (_dir, pool) = sales_pool();
    let repo = SqliteSalesPersonRepository::try_new(pool).unwrap();

    assert!(repo.read_salesperson("John", "Doe").unwrap().is_none());
}

#[test]
fn name_match_is_exact() {
    let (_dir, pool) = sales_pool();
    let repo = SqliteSalesPersonRepository::try_new(pool).unwrap();

    repo.create_salesperson(&john_doe()).unwrap();

    assert!(repo.read_salesperson("john", "Doe").unwrap().is_none());
    assert!(repo.read_salesperson("John", "doe").unwrap().is_none());
    assert!(repo.read_salesperson("John", "Doe").unwrap().is_some());
}

#[test]
fn read_salespersons_returns_all_rows_in_insert_order() {
    let (_dir, pool) = sales_pool();
    let repo = SqliteSalesPersonRepository::try_new(pool).unwrap();

    repo.create_salesperson(&john_doe()).unwrap();
    repo.create_salesperson(&SalesPerson::new(
        "Jane",
        "Doe",
        "jane.doe@example.com",
        "CityA",
        "StateX",
    ))
    .unwrap();

    let roster = repo.read_salespersons().unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].first_name, "John");
    assert_eq!(roster[1].first_name, "Jane");
}

#[test]
fn update_salesperson_by_email_moves_city_and_state() {
    let (_dir, pool) = sales_pool();
    let repo = SqliteSalesPersonRepository::try_new(pool).unwrap();

    repo.create_salesperson(&john_doe()).unwrap();

    let outcome = repo
        .update_salesperson("john.doe@example.com", "CityB", "StateY")
        .unwrap();
    assert_eq!(outcome, MutationOutcome::Applied(1));

    let roster = repo.read_salespersons().unwrap();
    assert_eq!(roster[0].city, "CityB");
    assert_eq!(roster[0].state, "StateY");
}

#[test]
fn update_with_unknown_email_is_idempotent_not_found() {
    let (_dir, pool) = sales_pool();
    let repo = SqliteSalesPersonRepository::try_new(pool).unwrap();

    assert_eq!(
        repo.update_salesperson("nobody@example.com", "CityB", "StateY")
            .unwrap(),
        MutationOutcome::NotFound
    );
    assert_eq!(
        repo.update_salesperson("nobody@example.com", "CityB", "StateY")
            .unwrap(),
        MutationOutcome::NotFound
    );
}

#[test]
fn delete_salesperson_by_email() {
    let (_dir, pool) = sales_pool();
    let repo = SqliteSalesPersonRepository::try_new(pool).unwrap();

    repo.create_salesperson(&SalesPerson::new(
        "Jane",
        "Doe",
        "jane.doe@example.com",
        "CityA",
        "StateX",
    ))
    .unwrap();
    assert!(repo.read_salesperson("Jane", "Doe").unwrap().is_some());

    assert_eq!(
        repo.delete_salesperson("jane.doe@example.com").unwrap(),
        MutationOutcome::Applied(1)
    );
    assert!(repo.read_salesperson("Jane", "Doe").unwrap().is_none());

    assert_eq!(
        repo.delete_salesperson("jane.doe@example.com").unwrap(),
        MutationOutcome::NotFound
    );
}

#[test]
fn email_mutations_touch_every_matching_row() {
    let (_dir, pool) = sales_pool();
    let repo = SqliteSalesPersonRepository::try_new(pool).unwrap();

    // Email uniqueness is not enforced by the store.
    repo.create_salesperson(&john_doe()).unwrap();
    repo.create_salesperson(&SalesPerson::new(
        "Johnny",
        "Doe",
        "john.doe@example.com",
        "CityC",
        "StateZ",
    ))
    .unwrap();

    assert_eq!(
        repo.update_salesperson("john.doe@example.com", "CityB", "StateY")
            .unwrap(),
        MutationOutcome::Applied(2)
    );
    assert_eq!(
        repo.delete_salesperson("john.doe@example.com").unwrap(),
        MutationOutcome::Applied(2)
    );
}

#[test]
fn repository_rejects_database_missing_salesperson_table() {
    let (_dir, pool) = sales_pool();
    pool.get()
        .unwrap()
        .execute_batch("DROP TABLE SalesPerson;")
        .unwrap();

    let result = SqliteSalesPersonRepository::try_new(pool);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("SalesPerson"))
    ));
}

#[test]
fn service_wraps_repository_calls() {
    let (_dir, pool) = sales_pool();
    let repo = SqliteSalesPersonRepository::try_new(pool).unwrap();
    let service = SalesPersonService::new(repo);

    let id = service
        .create_salesperson("John", "Doe", "john.doe@example.com", "CityA", "StateX")
        .unwrap();
    assert!(id >= 1);

    let loaded = service.read_salesperson("John", "Doe").unwrap().unwrap();
    assert_eq!(loaded.email_address, "john.doe@example.com");

    assert_eq!(
        service
            .update_salesperson("john.doe@example.com", "CityB", "StateY")
            .unwrap(),
        MutationOutcome::Applied(1)
    );
    assert_eq!(service.read_salespersons().unwrap().len(), 1);
    assert_eq!(
        service.delete_salesperson("john.doe@example.com").unwrap(),
        MutationOutcome::Applied(1)
    );
}

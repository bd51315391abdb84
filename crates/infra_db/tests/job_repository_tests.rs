//! Integration tests for JobRepository against a real PostgreSQL instance
//!
//! These tests start a throwaway PostgreSQL container per test, seed the
//! companies the foreign key requires, and exercise the repository's live
//! paths: row mapping, constraint surfacing, filtered listing, partial
//! updates, and deletion.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_job::{JobFilter, JobPatch, NewJob};
use infra_db::JobRepository;
use test_utils::{create_isolated_test_database, JobFixtures, PatchFixtures, TestJobBuilder};

async fn repository_with_companies() -> (test_utils::TestDatabase, JobRepository) {
    let db = create_isolated_test_database()
        .await
        .expect("Failed to create test database");
    db.seed_company("acme", "Acme Corp")
        .await
        .expect("Failed to seed company");
    db.seed_company("startup", "Startup Inc")
        .await
        .expect("Failed to seed company");
    let repo = JobRepository::new(db.pool().clone());
    (db, repo)
}

// ============================================================================
// Create / Get / Update / Delete Round-Trip
// ============================================================================

#[tokio::test]
async fn test_job_lifecycle_round_trip() {
    let (_db, repo) = repository_with_companies().await;

    // Create returns the generated id plus every supplied field.
    let created = repo
        .create(
            TestJobBuilder::new()
                .with_title("Dev")
                .with_salary(80_000)
                .with_equity(Decimal::ZERO)
                .with_company_handle("acme")
                .build(),
        )
        .await
        .expect("create failed");

    assert!(created.id > 0);
    assert_eq!(created.title, "Dev");
    assert_eq!(created.salary, Some(80_000));
    assert_eq!(created.equity, Some(Decimal::ZERO));
    assert_eq!(created.company_handle, "acme");

    // Get returns the same record.
    let fetched = repo.get(created.id).await.expect("get failed");
    assert_eq!(fetched, created);

    // A partial update changes only the supplied field.
    let updated = repo
        .update_partial(created.id, &PatchFixtures::salary_bump())
        .await
        .expect("update failed");
    assert_eq!(updated.salary, Some(95_000));
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.equity, created.equity);
    assert_eq!(updated.company_handle, created.company_handle);

    let refetched = repo.get(created.id).await.expect("get after update failed");
    assert_eq!(refetched.salary, Some(95_000));

    // Delete returns the reporting fields; the row is gone afterwards.
    let deleted = repo.delete(created.id).await.expect("delete failed");
    assert_eq!(deleted.title, "Dev");
    assert_eq!(deleted.company_handle, "acme");

    let err = repo.get(created.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_update_touches_every_mutable_field() {
    let (_db, repo) = repository_with_companies().await;

    let created = repo
        .create(JobFixtures::engineer())
        .await
        .expect("create failed");

    let updated = repo
        .update_partial(created.id, &PatchFixtures::full())
        .await
        .expect("update failed");

    assert_eq!(updated.title, "Staff Engineer");
    assert_eq!(updated.salary, Some(180_000));
    assert_eq!(updated.equity, Some(dec!(0.02)));
    // Immutable columns survive any patch.
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.company_handle, created.company_handle);
}

// ============================================================================
// Filtered Listing
// ============================================================================

#[tokio::test]
async fn test_list_filters_match_row_subsets() {
    let (_db, repo) = repository_with_companies().await;

    let intern = repo.create(JobFixtures::intern()).await.expect("create failed");
    let engineer = repo
        .create(TestJobBuilder::new().with_salary(120_000).build())
        .await
        .expect("create failed");
    let founder = repo.create(JobFixtures::founder()).await.expect("create failed");

    // Empty criteria mean an unfiltered scan, ordered by id.
    let all = repo.list(&JobFilter::default()).await.expect("list failed");
    assert_eq!(
        all.iter().map(|job| job.id).collect::<Vec<_>>(),
        vec![intern.id, engineer.id, founder.id]
    );

    // Strict salary threshold: only rows with salary > 100_000.
    let high_paid = repo
        .list(&JobFilter::default().with_min_salary(100_000))
        .await
        .expect("list failed");
    assert_eq!(
        high_paid.iter().map(|job| job.id).collect::<Vec<_>>(),
        vec![engineer.id]
    );

    // Equity flag: only rows with equity > 0.
    let with_equity = repo
        .list(&JobFilter::default().with_has_equity(true))
        .await
        .expect("list failed");
    assert_eq!(
        with_equity.iter().map(|job| job.id).collect::<Vec<_>>(),
        vec![founder.id]
    );

    // Title match is case-insensitive and substring-based.
    let engineers = repo
        .list(&JobFilter::default().with_title_contains("ENGINEER"))
        .await
        .expect("list failed");
    assert_eq!(engineers.len(), 2);

    // ILIKE wildcards in the needle are bound as data, not treated as SQL.
    let none = repo
        .list(&JobFilter::default().with_title_contains("'; DROP TABLE jobs; --"))
        .await
        .expect("list failed");
    assert!(none.is_empty());

    let by_company = repo
        .find_by_company("startup")
        .await
        .expect("find_by_company failed");
    assert_eq!(
        by_company.iter().map(|job| job.id).collect::<Vec<_>>(),
        vec![founder.id]
    );
}

// ============================================================================
// Error Paths
// ============================================================================

#[tokio::test]
async fn test_error_paths_surface_taxonomy_variants() {
    let (_db, repo) = repository_with_companies().await;

    // Unknown company handle trips the foreign key on create.
    let err = repo
        .create(NewJob::new("Dev", "no-such-company"))
        .await
        .unwrap_err();
    assert!(err.is_constraint_violation());

    // Missing ids produce the caller-visible not-found message.
    let err = repo.get(999).await.unwrap_err();
    assert_eq!(err.to_string(), "No job: 999");

    let err = repo.delete(999).await.unwrap_err();
    assert!(err.is_not_found());

    let err = repo
        .update_partial(999, &PatchFixtures::salary_bump())
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    // An empty patch is rejected before any statement executes: the error is
    // Validation even though the id does not exist either.
    let err = repo.update_partial(999, &JobPatch::default()).await.unwrap_err();
    assert!(matches!(err, infra_db::RepositoryError::Validation(_)));
    assert!(err.to_string().contains("No data"));
}

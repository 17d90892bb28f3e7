use super::*;

/// Tests creating a dancer.
///
/// Verifies that the repository stores the supplied fields and that the store
/// assigns the identity.
///
/// Expected: Ok(Dancer) with a fresh identity
#[tokio::test]
async fn creates_dancer_with_assigned_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Dancer)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = DancerRepository::new(db);
    let dancer = repo
        .create(CreateDancerParam {
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            age: 12,
        })
        .await?;

    assert!(dancer.id > 0);
    assert_eq!(dancer.first_name, "Alice");
    assert_eq!(dancer.last_name, "Smith");
    assert_eq!(dancer.age, 12);

    let stored = repo.find_by_id(dancer.id).await?;
    assert_eq!(stored, Some(dancer));

    Ok(())
}

/// Tests that consecutive creates receive distinct identities.
///
/// Expected: two different ids
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Dancer)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = DancerRepository::new(db);
    let param = CreateDancerParam {
        first_name: "Bob".to_string(),
        last_name: "Jones".to_string(),
        age: 9,
    };

    let first = repo.create(param.clone()).await?;
    let second = repo.create(param).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

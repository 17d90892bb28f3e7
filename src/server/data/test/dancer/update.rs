use super::*;

/// Tests that an update merges supplied fields into the stored dancer.
///
/// Verifies that omitted fields keep their stored values.
///
/// Expected: Ok(Some(Dancer)) with only `age` changed
#[tokio::test]
async fn merges_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Dancer)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let created = factory::dancer::DancerFactory::new(db)
        .first_name("Alice")
        .last_name("Smith")
        .age(12)
        .build()
        .await?;

    let repo = DancerRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateDancerParam {
                age: Some(13),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.first_name, "Alice");
    assert_eq!(updated.last_name, "Smith");
    assert_eq!(updated.age, 13);

    let stored = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(stored, updated);

    Ok(())
}

/// Tests that an empty update returns the stored dancer unchanged.
///
/// Expected: Ok(Some(Dancer)) equal to the stored row
#[tokio::test]
async fn empty_update_returns_existing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Dancer)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let created = factory::create_dancer(db).await?;

    let repo = DancerRepository::new(db);
    let updated = repo
        .update(created.id, UpdateDancerParam::default())
        .await?
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.first_name, created.first_name);
    assert_eq!(updated.age, created.age);

    Ok(())
}

/// Tests updating a dancer that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_dancer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Dancer)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let result = DancerRepository::new(db)
        .update(
            42,
            UpdateDancerParam {
                first_name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

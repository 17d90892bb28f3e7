use super::*;

/// Tests finding an existing dancer by id.
///
/// Expected: Ok(Some(Dancer)) with matching fields
#[tokio::test]
async fn finds_existing_dancer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Dancer)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let created = factory::dancer::DancerFactory::new(db)
        .first_name("Clara")
        .last_name("Stahlbaum")
        .age(11)
        .build()
        .await?;

    let repo = DancerRepository::new(db);
    let dancer = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(dancer.id, created.id);
    assert_eq!(dancer.first_name, "Clara");
    assert_eq!(dancer.last_name, "Stahlbaum");
    assert_eq!(dancer.age, 11);

    Ok(())
}

/// Tests querying for a dancer that does not exist.
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

    let repo = DancerRepository::new(db);
    let result = repo.find_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}

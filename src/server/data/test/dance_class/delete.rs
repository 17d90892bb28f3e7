use super::*;

/// Tests deleting a class removes it together with its embedded dancers.
///
/// Expected: Ok(true), then the class can no longer be found
#[tokio::test]
async fn deletes_class() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DanceClass)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = DanceClassRepository::new(db);
    let created = repo.create(ballet_param()).await?;

    assert!(repo.delete(created.id).await?);
    assert!(repo.find_by_id(created.id).await?.is_none());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests deleting a class that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_class() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DanceClass)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    assert!(!DanceClassRepository::new(db).delete(5).await?);

    Ok(())
}

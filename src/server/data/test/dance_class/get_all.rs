use super::*;

/// Tests listing an empty collection.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DanceClass)
        .build()
        .await
        .unwrap();

    let classes = DanceClassRepository::new(&test.db).get_all().await?;

    assert!(classes.is_empty());

    Ok(())
}

/// Tests listing returns every class in creation order with its embedded dancers.
///
/// Expected: Ok(vec) ordered by id
#[tokio::test]
async fn returns_all_classes_ordered_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DanceClass)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = DanceClassRepository::new(db);
    let ballet = repo.create(ballet_param()).await?;
    let tap = factory::dance_class::DanceClassFactory::new(db)
        .name("Tap")
        .build()
        .await?;

    let classes = repo.get_all().await?;
    let ids: Vec<i32> = classes.iter().map(|c| c.id).collect();

    assert_eq!(ids, vec![ballet.id, tap.id]);
    assert_eq!(classes[0].dancers.len(), 1);
    assert!(classes[1].dancers.is_empty());

    Ok(())
}

/// Tests that one malformed stored class fails the whole listing.
///
/// Expected: Err(AppError::Internal(MalformedDocument))
#[tokio::test]
async fn malformed_class_fails_listing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DanceClass)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    factory::create_dance_class(db).await?;
    factory::dance_class::DanceClassFactory::new(db)
        .raw_dancers(serde_json::json!(["not a dancer"]))
        .build()
        .await?;

    let result = DanceClassRepository::new(db).get_all().await;

    assert!(matches!(
        result,
        Err(AppError::Internal(InternalError::MalformedDocument { .. }))
    ));

    Ok(())
}

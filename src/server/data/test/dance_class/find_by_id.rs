use super::*;

/// Tests reading a class seeded directly into the table.
///
/// Expected: Ok(Some(DanceClass)) with decoded dancers
#[tokio::test]
async fn finds_existing_class() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DanceClass)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let seeded = factory::dance_class::DanceClassFactory::new(db)
        .name("Tap")
        .days_of_week(&["Friday"])
        .dancer("Bob", "Jones", 9)
        .build()
        .await?;

    let class = DanceClassRepository::new(db)
        .find_by_id(seeded.id)
        .await?
        .unwrap();

    assert_eq!(class.name, "Tap");
    assert_eq!(class.days_of_week, vec!["Friday"]);
    assert_eq!(
        class.dancers,
        vec![EnrolledDancer {
            first_name: "Bob".to_string(),
            last_name: "Jones".to_string(),
            age: 9,
        }]
    );

    Ok(())
}

/// Tests querying for a class that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_class() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DanceClass)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let result = DanceClassRepository::new(db).find_by_id(7).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that a stored class with undecodable dancers surfaces as an internal error.
///
/// Expected: Err(AppError::Internal(MalformedDocument)) naming the dancers column
#[tokio::test]
async fn malformed_dancers_column_is_internal_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DanceClass)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let seeded = factory::dance_class::DanceClassFactory::new(db)
        .raw_dancers(serde_json::json!([{ "firstName": "Alice" }]))
        .build()
        .await?;

    let result = DanceClassRepository::new(db).find_by_id(seeded.id).await;

    match result {
        Err(AppError::Internal(InternalError::MalformedDocument { id, field, .. })) => {
            assert_eq!(id, seeded.id);
            assert_eq!(field, "dancers");
        }
        other => panic!("Expected MalformedDocument error, got: {:?}", other),
    }

    Ok(())
}

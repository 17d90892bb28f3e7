use super::*;

/// Tests creating a dance class with embedded dancers.
///
/// Verifies that the days of the week and the embedded dancers survive the trip
/// through their JSON columns unchanged.
///
/// Expected: Ok(DanceClass) equal to the stored document
#[tokio::test]
async fn creates_class_with_embedded_dancers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DanceClass)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = DanceClassRepository::new(db);
    let class = repo.create(ballet_param()).await?;

    assert!(class.id > 0);
    assert_eq!(class.days_of_week, vec!["Monday", "Wednesday"]);
    assert_eq!(class.dancers.len(), 1);
    assert_eq!(class.dancers[0].first_name, "Alice");
    assert!(class.teaching_assistant.is_none());

    let stored = repo.find_by_id(class.id).await?;
    assert_eq!(stored, Some(class));

    Ok(())
}

/// Tests creating a dance class with nobody enrolled.
///
/// Expected: Ok(DanceClass) with an empty dancers list
#[tokio::test]
async fn creates_class_without_dancers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DanceClass)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let class = DanceClassRepository::new(db)
        .create(CreateDanceClassParam {
            dancers: vec![],
            teaching_assistant: Some("Mr Brown".to_string()),
            ..ballet_param()
        })
        .await?;

    assert!(class.dancers.is_empty());
    assert_eq!(class.teaching_assistant.as_deref(), Some("Mr Brown"));

    Ok(())
}

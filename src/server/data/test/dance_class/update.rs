use super::*;

/// Tests that an update keeps omitted fields and replaces supplied ones.
///
/// Expected: Ok(Some(DanceClass)) with new teacher and original schedule
#[tokio::test]
async fn merges_supplied_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DanceClass)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = DanceClassRepository::new(db);
    let created = repo.create(ballet_param()).await?;

    let updated = repo
        .update(
            created.id,
            UpdateDanceClassParam {
                teacher: Some("Mr Brown".to_string()),
                class_length: Some(90),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.teacher, "Mr Brown");
    assert_eq!(updated.class_length, 90);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.days_of_week, created.days_of_week);
    assert_eq!(updated.dancers, created.dancers);

    Ok(())
}

/// Tests that a supplied dancers list replaces the embedded dancers.
///
/// Expected: only the new dancer remains enrolled
#[tokio::test]
async fn replaces_embedded_dancers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DanceClass)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = DanceClassRepository::new(db);
    let created = repo.create(ballet_param()).await?;

    let newcomer = EnrolledDancer {
        first_name: "Clara".to_string(),
        last_name: "Stahlbaum".to_string(),
        age: 11,
    };
    let updated = repo
        .update(
            created.id,
            UpdateDanceClassParam {
                dancers: Some(vec![newcomer.clone()]),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.dancers, vec![newcomer]);

    Ok(())
}

/// Tests updating a class that does not exist.
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

    let result = DanceClassRepository::new(db)
        .update(
            404,
            UpdateDanceClassParam {
                name: Some("Jazz".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

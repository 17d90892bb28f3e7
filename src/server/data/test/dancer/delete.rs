use super::*;

/// Tests deleting an existing dancer.
///
/// Expected: Ok(true) and the dancer is gone afterwards
#[tokio::test]
async fn deletes_existing_dancer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Dancer)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let created = factory::create_dancer(db).await?;

    let repo = DancerRepository::new(db);
    assert!(repo.delete(created.id).await?);
    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests that deleting twice reports the second attempt as missing.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn second_delete_reports_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Dancer)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let created = factory::create_dancer(db).await?;

    let repo = DancerRepository::new(db);
    assert!(repo.delete(created.id).await?);
    assert!(!repo.delete(created.id).await?);

    Ok(())
}

/// Tests deleting one dancer leaves the others untouched.
///
/// Expected: the remaining dancer is still listed
#[tokio::test]
async fn leaves_other_dancers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Dancer)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let doomed = factory::create_dancer(db).await?;
    let kept = factory::create_dancer(db).await?;

    let repo = DancerRepository::new(db);
    repo.delete(doomed.id).await?;

    let remaining: Vec<i32> = repo.get_all().await?.iter().map(|d| d.id).collect();
    assert_eq!(remaining, vec![kept.id]);

    Ok(())
}

use super::*;

/// Tests listing an empty collection.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Dancer)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let dancers = DancerRepository::new(db).get_all().await?;

    assert!(dancers.is_empty());

    Ok(())
}

/// Tests listing returns every dancer in creation order.
///
/// Expected: Ok(vec) ordered by id
#[tokio::test]
async fn returns_all_dancers_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Dancer)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let first = factory::create_dancer(db).await?;
    let second = factory::create_dancer(db).await?;
    let third = factory::create_dancer(db).await?;

    let dancers = DancerRepository::new(db).get_all().await?;
    let ids: Vec<i32> = dancers.iter().map(|d| d.id).collect();

    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

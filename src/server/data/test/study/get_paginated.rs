use super::*;

async fn seed(db: &sea_orm::DatabaseConnection, count: usize) -> Result<(), DbErr> {
    let host = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    for _ in 0..count {
        factory::create_study(db, host.id, category.code).await?;
    }
    Ok(())
}

/// Tests page sizes and page counts against 31 studies.
///
/// Expected: limit 5 returns 5 items, limit 9 yields 4 pages, limit 100 yields 1 page
#[tokio::test]
async fn computes_pages_from_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db, 31).await?;

    let repo = StudyRepository::new(db);

    let five = repo.get_paginated(page(StudyFilter::default(), 1, 5)).await?;
    assert_eq!(five.studies.len(), 5);
    assert_eq!(five.total, 31);

    let default = repo.get_paginated(page(StudyFilter::default(), 1, 12)).await?;
    assert_eq!(default.studies.len(), 12);

    let nine = repo.get_paginated(page(StudyFilter::default(), 1, 9)).await?;
    assert_eq!(nine.pages, 4);

    let last = repo.get_paginated(page(StudyFilter::default(), 4, 9)).await?;
    assert_eq!(last.studies.len(), 4);

    let hundred = repo.get_paginated(page(StudyFilter::default(), 1, 100)).await?;
    assert_eq!(hundred.pages, 1);
    assert_eq!(hundred.studies.len(), 31);

    Ok(())
}

/// Tests that pages do not overlap.
///
/// Expected: distinct ids across consecutive pages
#[tokio::test]
async fn pages_do_not_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db, 10).await?;

    let repo = StudyRepository::new(db);
    let first = repo.get_paginated(page(StudyFilter::default(), 1, 5)).await?;
    let second = repo.get_paginated(page(StudyFilter::default(), 2, 5)).await?;

    for study in &second.studies {
        assert!(first.studies.iter().all(|other| other.id != study.id));
    }

    Ok(())
}

/// Tests weekday and location filters matching any requested tag.
///
/// Expected: only studies sharing a tag are returned
#[tokio::test]
async fn filters_by_any_weekday_and_location() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let monday = factory::study::StudyFactory::new(db, host.id, category.code)
        .weekday("mon")
        .location("cafe")
        .build()
        .await?;
    let friday = factory::study::StudyFactory::new(db, host.id, category.code)
        .weekday("fri,sat")
        .location("library")
        .build()
        .await?;
    factory::study::StudyFactory::new(db, host.id, category.code)
        .weekday("sun")
        .location("study_room")
        .build()
        .await?;

    let repo = StudyRepository::new(db);
    let by_day = repo
        .get_paginated(page(
            StudyFilter {
                weekday: vec![Weekday::Mon, Weekday::Sat],
                ..Default::default()
            },
            1,
            12,
        ))
        .await?;
    let mut ids: Vec<Uuid> = by_day.studies.iter().map(|study| study.id).collect();
    ids.sort();
    let mut expected = vec![monday.id, friday.id];
    expected.sort();
    assert_eq!(ids, expected);

    let by_place = repo
        .get_paginated(page(
            StudyFilter {
                location: vec![Location::Library],
                ..Default::default()
            },
            1,
            12,
        ))
        .await?;
    assert_eq!(by_place.total, 1);
    assert_eq!(by_place.studies[0].id, friday.id);

    Ok(())
}

/// Tests category, frequency and closed-hiding filters.
///
/// Expected: closed and past-due studies are hidden, other filters narrow results
#[tokio::test]
async fn filters_category_frequency_and_closed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let other_category = factory::create_category(db).await?;

    let open = factory::study::StudyFactory::new(db, host.id, category.code)
        .frequency(Frequency::More)
        .build()
        .await?;
    factory::study::StudyFactory::new(db, host.id, category.code)
        .is_open(false)
        .build()
        .await?;
    factory::study::StudyFactory::new(db, host.id, category.code)
        .due_date(Utc::now() - Duration::days(1))
        .build()
        .await?;
    factory::create_study(db, host.id, other_category.code).await?;

    let repo = StudyRepository::new(db);

    let by_category = repo
        .get_paginated(page(
            StudyFilter {
                category_code: Some(category.code),
                ..Default::default()
            },
            1,
            12,
        ))
        .await?;
    assert_eq!(by_category.total, 3);

    let visible = repo
        .get_paginated(page(
            StudyFilter {
                category_code: Some(category.code),
                hide_closed: true,
                ..Default::default()
            },
            1,
            12,
        ))
        .await?;
    assert_eq!(visible.total, 1);
    assert_eq!(visible.studies[0].id, open.id);

    let by_frequency = repo
        .get_paginated(page(
            StudyFilter {
                frequency: Some(Frequency::More),
                ..Default::default()
            },
            1,
            12,
        ))
        .await?;
    assert_eq!(by_frequency.total, 1);

    Ok(())
}

/// Tests ordering by creation time and by views.
///
/// Expected: newest first by default, most viewed first for `views`
#[tokio::test]
async fn orders_results() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let older = factory::study::StudyFactory::new(db, host.id, category.code)
        .created_at(Utc::now() - Duration::days(2))
        .views(50)
        .build()
        .await?;
    let newer = factory::study::StudyFactory::new(db, host.id, category.code)
        .created_at(Utc::now())
        .views(1)
        .build()
        .await?;

    let repo = StudyRepository::new(db);

    let latest = repo.get_paginated(page(StudyFilter::default(), 1, 12)).await?;
    assert_eq!(latest.studies[0].id, newer.id);

    let by_views = repo
        .get_paginated(page(
            StudyFilter {
                order: StudyOrder::Views,
                ..Default::default()
            },
            1,
            12,
        ))
        .await?;
    assert_eq!(by_views.studies[0].id, older.id);

    Ok(())
}

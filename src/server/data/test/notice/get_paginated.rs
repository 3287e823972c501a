use super::*;

/// Tests that notices are listed newest first with page counts.
///
/// Expected: newest notice first, 2 pages of 2 for 3 notices
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_notice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    factory::notice::NoticeFactory::new(db, admin.id)
        .created_at(Utc::now() - Duration::days(2))
        .build()
        .await?;
    factory::notice::NoticeFactory::new(db, admin.id)
        .created_at(Utc::now() - Duration::days(1))
        .build()
        .await?;
    let newest = factory::notice::NoticeFactory::new(db, admin.id)
        .title("Newest")
        .created_at(Utc::now())
        .build()
        .await?;

    let repo = NoticeRepository::new(db);
    let page = repo.get_paginated(1, 2).await?;

    assert_eq!(page.total, 3);
    assert_eq!(page.pages, 2);
    assert_eq!(page.notices.len(), 2);
    assert_eq!(page.notices[0].id, newest.id);

    let second = repo.get_paginated(2, 2).await?;
    assert_eq!(second.notices.len(), 1);

    Ok(())
}

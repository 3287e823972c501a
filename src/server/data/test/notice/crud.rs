use super::*;

/// Tests the notice lifecycle.
///
/// Expected: created, viewed, updated and deleted
#[tokio::test]
async fn creates_updates_and_deletes_notice() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_notice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;

    let repo = NoticeRepository::new(db);
    let notice = repo
        .create(CreateNoticeParams {
            host_id: admin.id,
            title: "Maintenance".to_string(),
            about: "Down on Sunday".to_string(),
        })
        .await?;
    assert_eq!(notice.views, 0);

    assert_eq!(repo.increment_views(notice.id).await?, 1);

    let updated = repo
        .update(
            notice.id,
            UpdateNoticeParams {
                title: Some("Maintenance moved".to_string()),
                about: None,
            },
        )
        .await?
        .unwrap();
    assert_eq!(updated.title, "Maintenance moved");
    assert_eq!(updated.about, "Down on Sunday");
    assert_eq!(updated.views, 1);

    assert_eq!(repo.delete(notice.id).await?, 1);
    assert!(repo.find_by_id(notice.id).await?.is_none());

    Ok(())
}

/// Tests updating a missing notice.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_returns_none_for_unknown_notice() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_notice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NoticeRepository::new(db);
    let result = repo
        .update(
            Uuid::new_v4(),
            UpdateNoticeParams {
                title: Some("x".to_string()),
                about: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

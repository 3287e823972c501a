use super::*;

/// Tests tombstoning a comment.
///
/// Expected: placeholder content, no author, flagged deleted
#[tokio::test]
async fn tombstone_anonymizes_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, study) = factory::helpers::create_study_with_host(db).await?;
    let comment = factory::create_comment(db, study.id, host.id).await?;

    let repo = CommentRepository::new(db);
    assert_eq!(repo.tombstone(comment.id).await?, 1);

    let tombstone = repo.find_in_study(study.id, comment.id).await?.unwrap();
    assert_eq!(tombstone.content, DELETED_COMMENT_CONTENT);
    assert_eq!(tombstone.user_id, None);
    assert!(tombstone.is_deleted);

    Ok(())
}

/// Tests hard deleting a comment.
///
/// Expected: Ok(1) then the comment is gone
#[tokio::test]
async fn delete_removes_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, study) = factory::helpers::create_study_with_host(db).await?;
    let comment = factory::create_comment(db, study.id, host.id).await?;

    let repo = CommentRepository::new(db);
    assert_eq!(repo.delete(comment.id).await?, 1);
    assert!(repo.find_in_study(study.id, comment.id).await?.is_none());
    assert_eq!(repo.delete(comment.id).await?, 0);

    Ok(())
}

/// Tests editing content.
///
/// Expected: new content stored
#[tokio::test]
async fn updates_content() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, study) = factory::helpers::create_study_with_host(db).await?;
    let comment = factory::create_comment(db, study.id, host.id).await?;

    let repo = CommentRepository::new(db);
    assert_eq!(repo.update_content(comment.id, "edited").await?, 1);
    assert_eq!(
        repo.find_in_study(study.id, comment.id).await?.unwrap().content,
        "edited"
    );

    Ok(())
}

use super::*;

/// Tests creating a comment and a reply to it.
///
/// Expected: both listed under the study, oldest first
#[tokio::test]
async fn creates_comment_and_reply() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, study) = factory::helpers::create_study_with_host(db).await?;

    let repo = CommentRepository::new(db);
    let question = repo
        .create(CreateCommentParams {
            study_id: study.id,
            user_id: host.id,
            content: "When do we start?".to_string(),
            parent_id: None,
        })
        .await?;
    let reply = repo
        .create(CreateCommentParams {
            study_id: study.id,
            user_id: host.id,
            content: "Next Monday".to_string(),
            parent_id: Some(question.id),
        })
        .await?;

    assert_eq!(reply.parent_id, Some(question.id));
    assert!(question.is_author(host.id));

    let comments = repo.get_by_study(study.id).await?;
    assert_eq!(comments.len(), 2);
    assert_eq!(repo.count_replies(question.id).await?, 1);
    assert_eq!(repo.count_replies(reply.id).await?, 0);

    Ok(())
}

/// Tests that comments are only found on their own study.
///
/// Expected: Ok(None) when looked up under another study
#[tokio::test]
async fn find_is_scoped_to_study() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, study) = factory::helpers::create_study_with_host(db).await?;
    let (_other_host, other_study) = factory::helpers::create_study_with_host(db).await?;
    let comment = factory::create_comment(db, study.id, host.id).await?;

    let repo = CommentRepository::new(db);
    assert!(repo.find_in_study(study.id, comment.id).await?.is_some());
    assert!(repo.find_in_study(other_study.id, comment.id).await?.is_none());
    assert!(repo.find_in_study(study.id, Uuid::new_v4()).await?.is_none());

    Ok(())
}

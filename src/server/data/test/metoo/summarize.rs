use super::*;

/// Tests flag counts and the viewer's own flags.
///
/// Expected: per-comment counts and only the viewer's flagged comments
#[tokio::test]
async fn counts_flags_and_viewer_flags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, study) = factory::helpers::create_study_with_host(db).await?;
    let first = factory::create_comment(db, study.id, host.id).await?;
    let second = factory::create_comment(db, study.id, host.id).await?;
    let viewer = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = MetooRepository::new(db);
    repo.create(first.id, viewer.id).await?;
    repo.create(first.id, other.id).await?;
    repo.create(second.id, other.id).await?;

    let (counts, flagged) = repo
        .summarize(&[first.id, second.id], Some(viewer.id))
        .await?;

    assert_eq!(counts.get(&first.id), Some(&2));
    assert_eq!(counts.get(&second.id), Some(&1));
    assert!(flagged.contains(&first.id));
    assert!(!flagged.contains(&second.id));

    let (_, anonymous) = repo.summarize(&[first.id], None).await?;
    assert!(anonymous.is_empty());

    Ok(())
}

/// Tests creating and deleting a flag.
///
/// Expected: exists after create, gone after delete
#[tokio::test]
async fn creates_and_deletes_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, study) = factory::helpers::create_study_with_host(db).await?;
    let comment = factory::create_comment(db, study.id, host.id).await?;
    let user = factory::create_user(db).await?;

    let repo = MetooRepository::new(db);
    assert!(!repo.exists(comment.id, user.id).await?);
    repo.create(comment.id, user.id).await?;
    assert!(repo.exists(comment.id, user.id).await?);
    assert!(repo.create(comment.id, user.id).await.is_err());
    assert_eq!(repo.delete(comment.id, user.id).await?, 1);
    assert!(!repo.exists(comment.id, user.id).await?);

    Ok(())
}

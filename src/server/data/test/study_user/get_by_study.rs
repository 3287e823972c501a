use super::*;

/// Tests listing all requests versus accepted members only.
///
/// Expected: two requests in total, one accepted
#[tokio::test]
async fn filters_accepted_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, study) = factory::helpers::create_study_with_host(db).await?;
    let (member, _) = factory::helpers::create_applicant(db, study.id, true).await?;
    factory::helpers::create_applicant(db, study.id, false).await?;

    let repo = StudyUserRepository::new(db);
    assert_eq!(repo.get_by_study(study.id, false).await?.len(), 2);

    let accepted = repo.get_by_study(study.id, true).await?;
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].user_id, member.id);

    Ok(())
}

use crate::server::{
    error::AppError,
    model::notice::{CreateNoticeParams, UpdateNoticeParams},
    service::notice::NoticeService,
};
use test_utils::{builder::TestBuilder, factory};

/// Tests notice validation and view counting.
///
/// Expected: blank notices rejected, views counted on each read
#[tokio::test]
async fn creates_and_views_notice() -> Result<(), AppError> {
    let test = TestBuilder::new().with_notice_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    let service = NoticeService::new(db);

    assert!(matches!(
        service
            .create(CreateNoticeParams {
                host_id: admin.id,
                title: " ".to_string(),
                about: "Body".to_string(),
            })
            .await,
        Err(AppError::BadRequest(_))
    ));

    let notice = service
        .create(CreateNoticeParams {
            host_id: admin.id,
            title: "Welcome".to_string(),
            about: "Body".to_string(),
        })
        .await?;

    service.view(notice.id).await?;
    let viewed = service.view(notice.id).await?.unwrap();
    assert_eq!(viewed.views, 2);

    assert!(matches!(
        service.update(notice.id, UpdateNoticeParams::default()).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service
            .update(
                notice.id,
                UpdateNoticeParams {
                    title: Some("".to_string()),
                    about: None,
                }
            )
            .await,
        Err(AppError::BadRequest(_))
    ));

    assert!(service.delete(notice.id).await?);
    assert!(!service.delete(notice.id).await?);

    Ok(())
}

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::notification::CreateNotificationParams,
    service::notification::NotificationService,
};
use entity::notification::NotificationKind;
use test_utils::{builder::TestBuilder, factory};

/// Tests a user only sees and marks their own notifications.
///
/// Expected: own notification marked read, someone else's reported NotFound
#[tokio::test]
async fn marks_only_own_notifications() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, study) = factory::helpers::create_study_with_host(db).await?;
    let other = factory::create_user(db).await?;

    let notification = NotificationRepository::new(db)
        .create(CreateNotificationParams::for_study(
            host.id,
            study.id,
            &study.title,
            NotificationKind::NewApply,
        ))
        .await?;

    let service = NotificationService::new(db);
    assert!(service.list(other.id).await?.is_empty());

    assert!(matches!(
        service.mark_read(notification.id, other.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(!service.list(host.id).await?[0].is_read);

    service.mark_read(notification.id, host.id).await?;

    let listed = service.list(host.id).await?;
    assert_eq!(listed.len(), 1);
    assert!(listed[0].is_read);

    Ok(())
}

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::server::{
    controller::{bookmark, comment, metoo, notice, notification, profile, study, study_user, user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(study_routes())
        .merge(notice_routes())
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/user",
            post(user::signup)
                .get(user::get_user)
                .delete(user::delete_user),
        )
        .route("/api/user/login", post(user::login))
        .route("/api/user/logout", patch(user::logout))
        .route("/api/user/password", patch(user::request_password_reset))
        .route("/api/user/password/{token}", patch(user::reset_password))
        .route("/api/user/{id}/role", patch(user::verify_email))
        .route("/api/user/study/applied", get(user::get_applied_studies))
        .route(
            "/api/user/notification",
            get(notification::get_notifications),
        )
        .route(
            "/api/user/notification/{id}",
            patch(notification::read_notification),
        )
        .route(
            "/api/user/profile/duplicate",
            get(profile::check_user_name),
        )
        .route(
            "/api/user/profile/{id}",
            post(profile::create_profile)
                .get(profile::get_profile)
                .patch(profile::update_profile),
        )
}

fn study_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/study",
            post(study::create_study).get(study::get_studies),
        )
        .route(
            "/api/study/{studyid}",
            get(study::get_study)
                .patch(study::update_study)
                .delete(study::delete_study),
        )
        .route(
            "/api/study/{studyid}/bookmark",
            post(bookmark::add_bookmark).delete(bookmark::remove_bookmark),
        )
        .route(
            "/api/study/{studyid}/comment",
            get(comment::get_comments).post(comment::create_comment),
        )
        .route(
            "/api/study/{studyid}/comment/{commentid}",
            patch(comment::update_comment).delete(comment::delete_comment),
        )
        .route(
            "/api/study/{studyid}/comment/{commentid}/metoo",
            post(metoo::add_metoo).delete(metoo::remove_metoo),
        )
        .route(
            "/api/study/user/{studyid}",
            get(study_user::get_study_users)
                .post(study_user::join_study)
                .patch(study_user::update_temp_bio)
                .delete(study_user::withdraw),
        )
        .route(
            "/api/study/user/{studyid}/accept",
            patch(study_user::decide),
        )
}

fn notice_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/notice",
            get(notice::get_notices).post(notice::create_notice),
        )
        .route(
            "/api/notice/{id}",
            get(notice::get_notice)
                .patch(notice::update_notice)
                .delete(notice::delete_notice),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    /// Route registration panics on conflicting paths, so building proves the table is sound.
    #[tokio::test]
    async fn router_builds() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let _app: Router = router().with_state(AppState::for_test(db.clone()));
    }
}

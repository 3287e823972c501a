pub use super::bookmark::Entity as Bookmark;
pub use super::category::Entity as Category;
pub use super::comment::Entity as Comment;
pub use super::metoo::Entity as Metoo;
pub use super::notice::Entity as Notice;
pub use super::notification::Entity as Notification;
pub use super::study::Entity as Study;
pub use super::study_user::Entity as StudyUser;
pub use super::user::Entity as User;
pub use super::user_profile::Entity as UserProfile;

use crate::server::service::{mail::Mailer, token::TokenKeys};
use url::Url;

mod bookmark;
mod notice;
mod notification;
mod study;

fn keys() -> TokenKeys {
    TokenKeys::new("test-secret")
}

fn mailer() -> Mailer {
    Mailer::disabled(Url::parse("http://localhost:3000/").unwrap())
}

use crate::gate::{views, GateState};
use axum::{
    extract::Extension,
    response::{Html, IntoResponse},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Form payload for the gate. The field is optional so an empty submit is a
/// mismatch, not a deserialization error.
#[derive(Deserialize, Debug)]
pub struct Credentials {
    password: Option<String>,
}

// axum handler for the initial page
pub async fn page() -> impl IntoResponse {
    Html(views::login_page())
}

// axum handler for the password check. A missing or undecodable body reads
// as an absent field, which never matches. Every outcome is a 200.
#[instrument(skip_all)]
pub async fn submit(
    state: Extension<Arc<GateState>>,
    payload: Option<Form<Credentials>>,
) -> impl IntoResponse {
    let candidate = payload
        .as_ref()
        .and_then(|Form(credentials)| credentials.password.as_deref());

    if state.secret_matches(candidate) {
        debug!("password accepted");

        Html(views::welcome_page())
    } else {
        debug!("password rejected");

        Html(views::denied_page())
    }
}

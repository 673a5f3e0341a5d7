//! HTTP API Client
//!
//! Functions for communicating with the SplitGroup REST API. Every request
//! carries the stored bearer token when one exists. An unauthorized response
//! wipes the persisted session and, when a session was active, sends the
//! browser back to the login page.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::api::error::{ApiError, ErrorBody};
use crate::model::{Expense, Group, User};
use crate::validate::{ExpenseDraft, GroupDraft};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

const API_URL_KEY: &str = "splitgroup_api_url";
const TOKEN_KEY: &str = "splitgroup_token";
/// Serialized demo-account record, only written when the demo bypass is used
pub const DEMO_USER_KEY: &str = "splitgroup_demo_user";

pub(crate) fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Get the API base URL from local storage or use the default
pub fn get_api_base() -> String {
    local_storage()
        .and_then(|s| s.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(API_URL_KEY, url);
    }
}

pub fn stored_token() -> Option<String> {
    local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
}

pub fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Remove everything session-related from local storage: the token and the
/// demo-account record.
pub fn clear_session_storage() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(DEMO_USER_KEY);
    }
}

/// Hard navigation back to the login page, dropping all in-memory state
fn force_login_redirect() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

/// Attach the stored bearer token, if any
fn authorize(request: RequestBuilder) -> RequestBuilder {
    match stored_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

/// Turn a response into the expected value or an `ApiError`.
///
/// On 401 the persisted session is cleared; if a token was present (an
/// expired session rather than a failed sign-in attempt) the browser is
/// redirected to the login page.
async fn handle<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();

    if response.ok() {
        return response.json::<T>().await.map_err(ApiError::decode);
    }

    let server_message = response.json::<ErrorBody>().await.ok().map(|b| b.message);

    if status == 401 {
        let had_session = stored_token().is_some();
        clear_session_storage();
        if had_session {
            force_login_redirect();
        }
    }

    Err(ApiError::from_status(status, server_message))
}

// ============ Auth ============

#[derive(Debug, serde::Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Fetch the account behind the stored token
pub async fn fetch_current_user() -> Result<User, ApiError> {
    let response = authorize(Request::get(&format!("{}/users/me", get_api_base())))
        .send()
        .await
        .map_err(ApiError::network)?;

    handle(response).await
}

pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        email: String,
        password: String,
    }

    let response = Request::post(&format!("{}/users/login", get_api_base()))
        .json(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(ApiError::decode)?
        .send()
        .await
        .map_err(ApiError::network)?;

    handle(response).await
}

pub async fn register(name: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[derive(serde::Serialize)]
    struct RegisterRequest {
        name: String,
        email: String,
        password: String,
    }

    let response = Request::post(&format!("{}/users/register", get_api_base()))
        .json(&RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(ApiError::decode)?
        .send()
        .await
        .map_err(ApiError::network)?;

    handle(response).await
}

// ============ Groups ============

pub async fn fetch_groups() -> Result<Vec<Group>, ApiError> {
    let response = authorize(Request::get(&format!("{}/groups", get_api_base())))
        .send()
        .await
        .map_err(ApiError::network)?;

    handle(response).await
}

pub async fn fetch_group(group_id: &str) -> Result<Group, ApiError> {
    let response = authorize(Request::get(&format!(
        "{}/groups/{}",
        get_api_base(),
        group_id
    )))
    .send()
    .await
    .map_err(ApiError::network)?;

    handle(response).await
}

pub async fn create_group(draft: &GroupDraft) -> Result<Group, ApiError> {
    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct CreateGroupRequest<'a> {
        name: &'a str,
        member_emails: &'a [String],
    }

    let response = authorize(Request::post(&format!("{}/groups", get_api_base())))
        .json(&CreateGroupRequest {
            name: &draft.name,
            member_emails: &draft.member_emails,
        })
        .map_err(ApiError::decode)?
        .send()
        .await
        .map_err(ApiError::network)?;

    handle(response).await
}

// ============ Expenses ============

pub async fn fetch_expenses(group_id: &str) -> Result<Vec<Expense>, ApiError> {
    let response = authorize(Request::get(&format!(
        "{}/expenses?groupId={}",
        get_api_base(),
        group_id
    )))
    .send()
    .await
    .map_err(ApiError::network)?;

    handle(response).await
}

pub async fn create_expense(group_id: &str, draft: &ExpenseDraft) -> Result<Expense, ApiError> {
    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct CreateExpenseRequest<'a> {
        title: &'a str,
        amount: f64,
        paid_by: &'a str,
        split_among: &'a [String],
        group_id: &'a str,
    }

    let response = authorize(Request::post(&format!("{}/expenses", get_api_base())))
        .json(&CreateExpenseRequest {
            title: &draft.title,
            amount: draft.amount,
            paid_by: &draft.paid_by,
            split_among: &draft.split_among,
            group_id,
        })
        .map_err(ApiError::decode)?
        .send()
        .await
        .map_err(ApiError::network)?;

    handle(response).await
}

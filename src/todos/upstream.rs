use std::time::Duration;

use tracing::{instrument, warn};

/// Outcome of probing the users service for a referenced user id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCheck {
    Found,
    /// The users service answered and explicitly reported the id unknown.
    Absent,
    /// The probe itself failed (timeout, refused connection, DNS). Treated
    /// as "do not block the write": the todos store stays available even
    /// when the users store is degraded.
    Inconclusive,
}

#[derive(Clone)]
pub struct UserDirectory {
    http: reqwest::Client,
    base_url: String,
}

impl UserDirectory {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Exactly one attempt, no retry, no caching of past results.
    #[instrument(skip(self))]
    pub async fn check(&self, user_id: &str) -> UserCheck {
        let url = format!("{}/users/{}", self.base_url, user_id);
        match self.http.get(&url).send().await {
            Ok(resp) if resp.status() == reqwest::StatusCode::NOT_FOUND => UserCheck::Absent,
            Ok(_) => UserCheck::Found,
            Err(e) => {
                warn!(error = %e, "could not verify user existence, proceeding anyway");
                UserCheck::Inconclusive
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};

    /// Serves a stub users route answering every lookup with `status`.
    async fn serve_fixed_status(status: StatusCode) -> String {
        let app = Router::new().route("/users/:id", get(move || async move { status }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn explicit_404_is_a_confirmed_absence() {
        let base = serve_fixed_status(StatusCode::NOT_FOUND).await;
        let dir = UserDirectory::new(base, Duration::from_secs(2)).unwrap();
        assert_eq!(dir.check("u1").await, UserCheck::Absent);
    }

    #[tokio::test]
    async fn upstream_server_error_still_counts_as_found() {
        // Only an explicit 404 may block the write; a degraded users
        // service answering 500 must not.
        let base = serve_fixed_status(StatusCode::INTERNAL_SERVER_ERROR).await;
        let dir = UserDirectory::new(base, Duration::from_secs(2)).unwrap();
        assert_eq!(dir.check("u1").await, UserCheck::Found);
    }

    #[tokio::test]
    async fn unreachable_service_is_inconclusive() {
        // Nothing listens on the discard port; connection is refused.
        let dir = UserDirectory::new("http://127.0.0.1:9", Duration::from_millis(500))
            .expect("client should build");
        assert_eq!(dir.check("any-user").await, UserCheck::Inconclusive);
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let dir = UserDirectory::new("http://users:80/", Duration::from_secs(5)).unwrap();
        assert_eq!(dir.base_url, "http://users:80");
    }
}

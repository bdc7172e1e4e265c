#[cfg(test)]
mod tests {
    use gtd::api::{RemoteConfig, RemoteTask, RemoteTasks, TaskApi};
    use gtd::libs::task::Task;
    use reqwest::Client;
    use test_context::{test_context, AsyncTestContext};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Request line and body captured by the test server.
    type Captured = oneshot::Receiver<(String, String)>;

    struct ApiTestContext {
        client: Client,
    }

    impl AsyncTestContext for ApiTestContext {
        async fn setup() -> Self {
            ApiTestContext {
                client: Client::builder().no_proxy().build().unwrap(),
            }
        }
    }

    impl ApiTestContext {
        fn remote(&self, api_url: &str, limit: u32) -> RemoteTasks {
            let config = RemoteConfig {
                api_url: api_url.to_string(),
                limit,
            };
            RemoteTasks::with_client(self.client.clone(), &config)
        }
    }

    fn header_end(buf: &[u8]) -> Option<usize> {
        buf.windows(4).position(|w| w == b"\r\n\r\n").map(|pos| pos + 4)
    }

    /// Serves exactly one HTTP request with the given status line and JSON body.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, Captured) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];

            let head_len = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                buf.extend_from_slice(&chunk[..n]);
                if let Some(end) = header_end(&buf) {
                    break end;
                }
                if n == 0 {
                    break buf.len();
                }
            };

            let head = String::from_utf8_lossy(&buf[..head_len]).to_string();
            let content_length = head
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);

            while buf.len() < head_len + content_length {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;

            let request_line = head.lines().next().unwrap_or_default().to_string();
            let request_body = String::from_utf8_lossy(&buf[head_len..]).to_string();
            let _ = tx.send((request_line, request_body));
        });

        (format!("http://{}", addr), rx)
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_list_uses_limit(ctx: &mut ApiTestContext) {
        let body = r#"[{"userId":1,"id":1,"title":"delectus aut autem","completed":false},{"userId":1,"id":2,"title":"quis ut nam","completed":true}]"#;
        let (url, captured) = serve_once("200 OK", body).await;

        let tasks = ctx.remote(&url, 10).list().await.unwrap();

        let (request_line, _) = captured.await.unwrap();
        assert_eq!(request_line, "GET /todos?_limit=10 HTTP/1.1");
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].user_id, Some(1));
        assert_eq!(tasks[1].id, Some(2));
        assert_eq!(tasks[1].title, "quis ut nam");
        assert!(tasks[1].completed);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_trailing_slash_in_base_url(ctx: &mut ApiTestContext) {
        let (url, captured) = serve_once("200 OK", "[]").await;

        let tasks = ctx.remote(&format!("{}/", url), 3).list().await.unwrap();

        let (request_line, _) = captured.await.unwrap();
        assert_eq!(request_line, "GET /todos?_limit=3 HTTP/1.1");
        assert!(tasks.is_empty());
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_create_posts_task_json(ctx: &mut ApiTestContext) {
        let (url, captured) = serve_once("201 Created", r#"{"id":201,"title":"Buy milk","completed":false}"#).await;

        let created = ctx.remote(&url, 10).create(&RemoteTask::new("Buy milk", false)).await.unwrap();

        let (request_line, request_body) = captured.await.unwrap();
        assert_eq!(request_line, "POST /todos HTTP/1.1");
        let sent: serde_json::Value = serde_json::from_str(&request_body).unwrap();
        assert_eq!(sent, serde_json::json!({"title": "Buy milk", "completed": false}));
        assert_eq!(created.id, Some(201));
        assert_eq!(created.user_id, None);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_update_puts_by_id(ctx: &mut ApiTestContext) {
        let (url, captured) = serve_once("200 OK", r#"{"id":3,"title":"Do laundry","completed":true}"#).await;

        let mut task = Task::new(3, "Do laundry");
        task.completed = true;
        let updated = ctx.remote(&url, 10).update(3, &RemoteTask::from(&task)).await.unwrap();

        let (request_line, request_body) = captured.await.unwrap();
        assert_eq!(request_line, "PUT /todos/3 HTTP/1.1");
        let sent: serde_json::Value = serde_json::from_str(&request_body).unwrap();
        assert_eq!(sent, serde_json::json!({"id": 3, "title": "Do laundry", "completed": true}));
        assert!(updated.completed);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_delete_by_id(ctx: &mut ApiTestContext) {
        let (url, captured) = serve_once("200 OK", "{}").await;

        ctx.remote(&url, 10).delete(7).await.unwrap();

        let (request_line, _) = captured.await.unwrap();
        assert_eq!(request_line, "DELETE /todos/7 HTTP/1.1");
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_error_status_is_an_error(ctx: &mut ApiTestContext) {
        let (url, _captured) = serve_once("404 Not Found", "{}").await;

        let result = ctx.remote(&url, 10).delete(9999).await;
        assert!(result.is_err());
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_unreachable_server_is_an_error(ctx: &mut ApiTestContext) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = ctx.remote(&format!("http://{}", addr), 10).list().await;
        assert!(result.is_err());
    }
}

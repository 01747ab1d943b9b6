use axum_test::{TestServer, TestWebSocket};
use serde_json::{Value, json};

/// Socket client speaking the `{event, ackId, data}` protocol.
pub struct WsTestClient {
    ws: TestWebSocket,
    next_ack: u64,
}

impl WsTestClient {
    pub async fn connect(server: &TestServer, token: &str) -> Self {
        let ws = server
            .get_websocket("/ws")
            .add_header("Authorization", format!("Bearer {}", token))
            .await
            .into_websocket()
            .await;

        Self { ws, next_ack: 0 }
    }

    pub async fn connect_with_query_token(server: &TestServer, token: &str) -> Self {
        let ws = server
            .get_websocket("/ws")
            .add_query_param("token", token)
            .await
            .into_websocket()
            .await;

        Self { ws, next_ack: 0 }
    }

    /// Sends one event and waits for its reply.
    pub async fn request(&mut self, event: &str, data: Value) -> Value {
        self.next_ack += 1;
        let ack_id = format!("ack-{}", self.next_ack);
        self.send_text(json!({ "event": event, "ackId": ack_id, "data": data }))
            .await;

        let reply = self.receive_json().await;
        assert_eq!(reply["ackId"], json!(ack_id), "reply paired with another request");
        reply
    }

    pub async fn send_text(&mut self, text: impl std::fmt::Display) {
        self.ws.send_text(text).await;
    }

    pub async fn receive_json(&mut self) -> Value {
        self.ws.receive_json::<Value>().await
    }

    pub async fn close(self) {
        self.ws.close().await;
    }
}

use crate::handlers::dispatcher::dispatch;
use crate::handlers::error_boundary::with_error_boundary;
use crate::{
    ClientEvent, ConnectionConfig, ConnectionId, EventReply, HandlerContext, Metrics,
    Result as WsErrorResult, ShutdownGuard, WsError, create_event_span,
};

use wb_auth::ConnectionRateLimiter;
use wb_service::Services;

use std::panic::Location;

use axum::extract::ws::{Message, WebSocket};
use error_location::ErrorLocation;
use futures::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::Instrument;
use uuid::Uuid;

/// One authenticated socket. Each request frame is handled in its own task
/// and answered with exactly one reply to this socket only.
pub struct WebSocketConnection {
    connection_id: ConnectionId,
    user_id: Uuid,
    config: ConnectionConfig,
    metrics: Metrics,
    rate_limiter: ConnectionRateLimiter,
    services: Services,
}

impl WebSocketConnection {
    pub fn new(
        connection_id: ConnectionId,
        user_id: Uuid,
        config: ConnectionConfig,
        metrics: Metrics,
        rate_limiter: ConnectionRateLimiter,
        services: Services,
    ) -> Self {
        Self {
            connection_id,
            user_id,
            config,
            metrics,
            rate_limiter,
            services,
        }
    }

    pub async fn handle(
        self,
        socket: WebSocket,
        mut shutdown_guard: ShutdownGuard,
    ) -> WsErrorResult<()> {
        log::info!(
            "WebSocket connection {} established for user {}",
            self.connection_id,
            self.user_id
        );
        self.metrics.connection_established();

        let (mut ws_sender, mut ws_receiver) = socket.split();

        // Bounded so a slow client applies backpressure instead of growing memory
        let (tx, mut rx) = mpsc::channel::<Message>(self.config.send_buffer_size);

        let send_task = tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                if ws_sender.send(msg).await.is_err() {
                    break;
                }
            }
        });

        let result = loop {
            tokio::select! {
                msg = ws_receiver.next() => {
                    match msg {
                        Some(Ok(msg)) => {
                            if let Err(e) = self.handle_client_message(msg, &tx).await {
                                log::error!(
                                    "Error handling message from connection {}: {}",
                                    self.connection_id,
                                    e
                                );
                                self.metrics.error_occurred("message_handling");
                                break Err(e);
                            }
                        }
                        Some(Err(e)) => {
                            log::error!(
                                "WebSocket error on connection {}: {}",
                                self.connection_id,
                                e
                            );
                            break Err(WsError::ConnectionClosed {
                                reason: format!("WebSocket error: {}", e),
                                location: ErrorLocation::from(Location::caller()),
                            });
                        }
                        None => {
                            log::info!("Connection {} closed by client", self.connection_id);
                            break Ok(());
                        }
                    }
                }

                _ = shutdown_guard.wait() => {
                    log::info!("Shutting down connection {} gracefully", self.connection_id);
                    break Ok(());
                }
            }
        };

        // In-flight event tasks hold their own senders and finish first
        drop(tx);
        let _ = send_task.await;

        self.metrics
            .connection_closed(if result.is_ok() { "normal" } else { "error" });
        log::info!("WebSocket connection {} closed", self.connection_id);

        result
    }

    async fn handle_client_message(
        &self,
        msg: Message,
        tx: &mpsc::Sender<Message>,
    ) -> WsErrorResult<()> {
        match msg {
            Message::Text(text) => self.handle_text_message(text.as_str(), tx).await,
            Message::Binary(data) => {
                log::debug!(
                    "Rejected binary frame ({} bytes) from connection {}",
                    data.len(),
                    self.connection_id
                );
                let error = WsError::invalid_message("Binary frames are not supported");
                send_reply(tx, &EventReply::from_error(Value::Null, "", &error)).await
            }
            Message::Ping(data) => tx.send(Message::Pong(data)).await.map_err(|_| {
                WsError::SendBufferFull {
                    location: ErrorLocation::from(Location::caller()),
                }
            }),
            Message::Pong(_) => Ok(()),
            Message::Close(_) => {
                log::info!("Received close frame from connection {}", self.connection_id);
                Ok(())
            }
        }
    }

    async fn handle_text_message(
        &self,
        text: &str,
        tx: &mpsc::Sender<Message>,
    ) -> WsErrorResult<()> {
        let event = match ClientEvent::parse(text) {
            Ok(event) => event,
            Err(e) => {
                log::warn!("Connection {}: {}", self.connection_id, e);
                self.metrics.error_occurred("invalid_message");
                return send_reply(tx, &EventReply::from_error(Value::Null, "", &e)).await;
            }
        };

        if self.rate_limiter.check().is_err() {
            log::warn!(
                "Rate limit exceeded for connection {} (user {})",
                self.connection_id,
                self.user_id
            );
            self.metrics.error_occurred("rate_limited");
            let error = WsError::RateLimited {
                location: ErrorLocation::from(Location::caller()),
            };
            return send_reply(
                tx,
                &EventReply::from_error(event.ack_id, event.event, &error),
            )
            .await;
        }

        self.metrics.event_received(&event.event);

        let ctx = HandlerContext::new(
            self.user_id,
            self.services.clone(),
            self.connection_id,
            &event.ack_label(),
        );
        let span = create_event_span(
            &ctx.request_ctx.correlation_id,
            &self.user_id.to_string(),
            &event.event,
        );
        let tx = tx.clone();
        let metrics = self.metrics.clone();

        tokio::spawn(
            async move {
                let request_ctx = ctx.request_ctx.clone();
                let ack_id = event.ack_id.clone();
                let name = event.event.clone();

                let reply =
                    with_error_boundary(&request_ctx, ack_id, &name, move || dispatch(event, ctx))
                        .await;

                metrics.event_latency(request_ctx.started_at.elapsed());
                metrics.reply_sent(reply.status.as_str());

                if let Err(e) = send_reply(&tx, &reply).await {
                    log::warn!("{} Reply dropped: {}", request_ctx.log_prefix(), e);
                }
            }
            .instrument(span),
        );

        Ok(())
    }
}

async fn send_reply(tx: &mpsc::Sender<Message>, reply: &EventReply) -> WsErrorResult<()> {
    let text = serde_json::to_string(reply)?;
    tx.send(Message::Text(text.into()))
        .await
        .map_err(|_| WsError::SendBufferFull {
            location: ErrorLocation::from(Location::caller()),
        })
}

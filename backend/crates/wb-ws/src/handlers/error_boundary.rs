use crate::handlers::error_codes::INTERNAL_ERROR;
use crate::{EventReply, RequestContext};

use wb_service::GENERIC_FAILURE_MESSAGE;

use log::error;
use serde_json::Value;

/// Runs a handler in its own task so a panic becomes an error reply instead
/// of tearing down the connection.
pub async fn with_error_boundary<F, Fut>(
    ctx: &RequestContext,
    ack_id: Value,
    event: &str,
    handler: F,
) -> EventReply
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = EventReply> + Send + 'static,
{
    let result = tokio::spawn(async move { handler().await }).await;

    match result {
        Ok(reply) => reply,
        Err(join_error) => {
            let panic_msg = if join_error.is_panic() {
                match join_error.into_panic().downcast::<String>() {
                    Ok(msg) => *msg,
                    Err(any) => match any.downcast::<&str>() {
                        Ok(msg) => msg.to_string(),
                        Err(_) => "Unknown panic".to_string(),
                    },
                }
            } else {
                "Task cancelled".to_string()
            };

            error!(
                "{} Handler {} panicked: {}",
                ctx.log_prefix(),
                event,
                panic_msg
            );

            EventReply::error(ack_id, event, INTERNAL_ERROR, GENERIC_FAILURE_MESSAGE)
        }
    }
}

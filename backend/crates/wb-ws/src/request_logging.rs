//! Per-event log lines keyed by the request prefix (`[req=N user=...]`).

/// Logs an incoming event before it is routed.
#[macro_export]
macro_rules! log_event_received {
    ($ctx:expr, $event:expr) => {
        log::debug!("{} {} received", $ctx.log_prefix(), $event);
    };
}

/// Logs how an event settled: the outcome status (`ok`, `noop`,
/// `forbidden`) or the error code sent back, with the time taken.
#[macro_export]
macro_rules! log_event_settled {
    ($ctx:expr, $event:expr, $result:expr) => {
        match &$result {
            Ok(outcome) => log::info!(
                "{} {} {} in {}ms",
                $ctx.log_prefix(),
                $event,
                outcome.status(),
                $ctx.elapsed_ms()
            ),
            Err(e) => log::warn!(
                "{} {} failed with {}: {} in {}ms",
                $ctx.log_prefix(),
                $event,
                e.error_code(),
                e,
                $ctx.elapsed_ms()
            ),
        }
    };
}

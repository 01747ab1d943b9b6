/// Per-connection socket settings
#[derive(Debug, Clone, Copy)]
pub struct ConnectionConfig {
    /// Outbound replies buffered before the client counts as too slow
    pub send_buffer_size: usize,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            send_buffer_size: 100,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConnectionLimits {
    /// Maximum concurrent sockets across all users
    pub max_total: usize,
}

impl Default for ConnectionLimits {
    fn default() -> Self {
        Self { max_total: 1000 }
    }
}

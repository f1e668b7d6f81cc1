//! Ticket link formatting

/// Turns ticket ids into issue tracker links
#[derive(Debug, Clone)]
pub struct TicketLinker {
    base_url: String,
}

impl TicketLinker {
    /// Create a linker prefixing ids with `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Link for a single ticket
    pub fn link(&self, ticket: &str) -> String {
        format!("{}{}", self.base_url, ticket)
    }

    /// Links for a list of tickets, in order
    pub fn links(&self, tickets: &[String]) -> Vec<String> {
        tickets.iter().map(|t| self.link(t)).collect()
    }
}

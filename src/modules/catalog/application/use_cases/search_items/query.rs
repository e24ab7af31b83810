/// Query for free-text catalog search
#[derive(Debug, Clone)]
pub struct SearchItemsQuery {
    pub search_term: String,
}

impl SearchItemsQuery {
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
        }
    }
}

use crate::extract::extract;
use crate::search::ImageSearch;
use serde::Serialize;

pub const IDLE_MESSAGE: &str = "Digite um termo e clique no botão 'Buscar' para começar.";
pub const BLANK_QUERY_MESSAGE: &str = "Por favor, digite algo para buscar.";
pub const EMPTY_MESSAGE: &str = "Nenhuma imagem encontrada. Tente outra busca.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Searching,
    BlankQuery,
    Results(Vec<String>),
    Empty,
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// One user interaction: a query and where its search ended up.
#[derive(Debug, Clone)]
pub struct SearchSession {
    query: String,
    state: SearchState,
}

impl SearchSession {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            state: SearchState::Idle,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_blank(&self) -> bool {
        self.query.trim().is_empty()
    }

    /// Run the search once. Blank queries never reach the network.
    pub async fn run(&mut self, search: &ImageSearch) -> &SearchState {
        if self.is_blank() {
            self.state = SearchState::BlankQuery;
            return &self.state;
        }

        self.state = SearchState::Searching;
        self.state = match search.fetch(&self.query).await {
            Ok(body) => {
                let images = extract(&body);
                if images.is_empty() {
                    SearchState::Empty
                } else {
                    SearchState::Results(images)
                }
            }
            Err(e) => SearchState::Error(e.cause_chain()),
        };
        &self.state
    }

    /// Images of a successful search; empty in every other state.
    pub fn images(&self) -> &[String] {
        match &self.state {
            SearchState::Results(images) => images,
            _ => &[],
        }
    }

    pub fn outcome(&self) -> Notice {
        match &self.state {
            SearchState::Idle => Notice::new(NoticeLevel::Info, IDLE_MESSAGE),
            SearchState::Searching => Notice::new(NoticeLevel::Info, "Buscando imagens..."),
            SearchState::BlankQuery => Notice::new(NoticeLevel::Warning, BLANK_QUERY_MESSAGE),
            SearchState::Results(images) => Notice::new(
                NoticeLevel::Success,
                format!("Encontradas {} imagens para: {}", images.len(), self.query),
            ),
            SearchState::Empty => Notice::new(NoticeLevel::Warning, EMPTY_MESSAGE),
            SearchState::Error(cause) => Notice::new(
                NoticeLevel::Error,
                format!("Erro ao buscar imagens: {}", cause),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_query_never_fetches() {
        // Nothing listens on port 9; a fetch attempt would end in Error instead.
        let search = ImageSearch::new("http://127.0.0.1:9/search".to_string());
        for query in ["", "   ", "\t\n"] {
            let mut session = SearchSession::new(query);
            assert_eq!(session.run(&search).await, &SearchState::BlankQuery);
            assert_eq!(
                session.outcome(),
                Notice::new(NoticeLevel::Warning, BLANK_QUERY_MESSAGE)
            );
            assert!(session.images().is_empty());
        }
    }

    #[test]
    fn new_session_is_idle() {
        let session = SearchSession::new("paisagens");
        assert_eq!(session.state(), &SearchState::Idle);
        assert_eq!(session.outcome().level, NoticeLevel::Info);
    }

    #[test]
    fn results_notice_reports_count_and_query() {
        let session = SearchSession {
            query: "moda".to_string(),
            state: SearchState::Results(vec!["http://a.com/x.png".to_string()]),
        };
        assert_eq!(
            session.outcome(),
            Notice::new(NoticeLevel::Success, "Encontradas 1 imagens para: moda")
        );
    }

    #[test]
    fn error_notice_carries_cause() {
        let session = SearchSession {
            query: "moda".to_string(),
            state: SearchState::Error("boom".to_string()),
        };
        let notice = session.outcome();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Erro ao buscar imagens: boom");
        assert!(session.images().is_empty());
    }
}

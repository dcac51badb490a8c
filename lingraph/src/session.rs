//! Per-user query composition sessions
//!
//! A session owns the chain being assembled and one query history per
//! composition mode. Sessions are isolated: nothing here is shared across
//! sessions except the read-only registry and catalog handles passed in.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use lingraph_kg::render::{author_query, chain_query, fanout_query, path_query};
use lingraph_kg::{
    AuthorTemplate, EntrySuperType, HistorySet, QueryMode, SchemaRegistry, Token,
};

/// One interactive composition session
#[derive(Debug, Clone)]
pub struct QuerySession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    chain: Vec<Token>,
    histories: HistorySet,
}

impl QuerySession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            chain: Vec::new(),
            histories: HistorySet::new(),
        }
    }

    /// The chain assembled so far
    pub fn chain(&self) -> &[Token] {
        &self.chain
    }

    /// Classify a raw label and append it to the chain
    pub fn push_raw(&mut self, registry: &SchemaRegistry, raw: &str) -> Token {
        let token = registry.classify(raw);
        self.chain.push(token.clone());
        token
    }

    /// Remove the most recently appended token
    pub fn pop_token(&mut self) -> Option<Token> {
        self.chain.pop()
    }

    pub fn clear_chain(&mut self) {
        self.chain.clear();
    }

    /// The per-mode histories
    pub fn histories(&self) -> &HistorySet {
        &self.histories
    }

    /// Render the current chain and retain it in the chain history
    pub fn compose_chain(&mut self) -> String {
        let query = chain_query(&self.chain);
        self.histories.prepend(QueryMode::Chain, query.clone());
        query
    }

    /// Render a fan-out query and retain it in the fan-out history
    pub fn compose_fanout(
        &mut self,
        key_names: &[String],
        target: EntrySuperType,
        length: u32,
    ) -> String {
        let query = fanout_query(key_names, target, length);
        self.histories.prepend(QueryMode::FanOut, query.clone());
        query
    }

    /// Render an author template and retain it in the author history
    pub fn compose_author(&mut self, template: AuthorTemplate, author_id: &str) -> String {
        let query = author_query(template, author_id);
        self.histories.prepend(QueryMode::Author, query.clone());
        query
    }

    /// Render a path search and retain it in the path history
    pub fn compose_path(&mut self, from: &Token, to: &Token, length: u32) -> String {
        let query = path_query(from, to, length);
        self.histories.prepend(QueryMode::Path, query.clone());
        query
    }

    /// The editable union view of a mode's history
    pub fn query_text(&self, mode: QueryMode) -> String {
        self.histories.joined_with_union(mode)
    }

    /// Drop the queries retained for a mode
    pub fn clear_history(&mut self, mode: QueryMode) {
        self.histories.clear(mode);
    }
}

impl Default for QuerySession {
    fn default() -> Self {
        Self::new()
    }
}

/// Session store keyed by session id
///
/// Instantiated once per server; each session inside is owned by exactly
/// one interaction at a time.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<Uuid, QuerySession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session and return its id
    pub fn create(&mut self) -> Uuid {
        let session = QuerySession::new();
        let id = session.id;
        self.sessions.insert(id, session);
        id
    }

    pub fn get(&self, id: &Uuid) -> Option<&QuerySession> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut QuerySession> {
        self.sessions.get_mut(id)
    }

    /// Remove a session, returning whether it existed
    pub fn remove(&mut self, id: &Uuid) -> bool {
        self.sessions.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

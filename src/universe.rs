// src/universe.rs

// The author universe: metadata map + influence graph, kept in sync.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::{
    config::options::UniverseOptions,
    core::net::Fetch,
    error::Result,
    graph::InfluenceGraph,
    model::{AuthorLink, AuthorMap, AuthorName, AuthorRecord},
    progress::Progress,
    specs::{profile::{self, Profile}, search},
    store,
};

/// How `load_or_seed` got its data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Startup {
    /// Prior session found on disk.
    Restored { authors: usize },
    /// Nothing usable on disk; default authors were added.
    Seeded { authors: Vec<AuthorName> },
}

/// Owns the metadata map and the graph built from it.
///
/// Invariant: every graph node has a record, and an edge A → B exists
/// exactly when `authors[A].influences` lists B.
pub struct Universe {
    options: UniverseOptions,
    fetch: Box<dyn Fetch>,
    authors: AuthorMap,
    graph: InfluenceGraph,
}

impl Universe {
    pub fn new(options: UniverseOptions, fetch: Box<dyn Fetch>) -> Self {
        Self { options, fetch, authors: AuthorMap::new(), graph: InfluenceGraph::new() }
    }

    pub fn options(&self) -> &UniverseOptions {
        &self.options
    }

    pub fn authors(&self) -> &AuthorMap {
        &self.authors
    }

    pub fn record(&self, name: &str) -> Option<&AuthorRecord> {
        self.authors.get(name)
    }

    pub fn graph(&self) -> &InfluenceGraph {
        &self.graph
    }

    /// Resolve, scrape and merge one author. `Ok(None)` when the site knows
    /// no such author; the map is untouched in that case.
    ///
    /// A query that is already a key of the map reuses the stored url and
    /// skips the search. The profile is fetched before anything is written,
    /// so a failed fetch leaves the map and graph as they were.
    pub fn add_author(&mut self, query: &str) -> Result<Option<AuthorName>> {
        let author = match self.authors.get(query).filter(|r| !r.url.is_empty()) {
            Some(rec) => {
                debug!(query, "known author, skipping search");
                AuthorLink::new(query, rec.url.clone())
            }
            None => match search::resolve(self.fetch.as_ref(), &self.options.search_endpoint(), query)? {
                Some(found) => found,
                None => return Ok(None),
            },
        };

        let profile = profile::fetch_profile(self.fetch.as_ref(), &author.url)?;
        info!(
            name = %author.name,
            influences = profile.influences.len(),
            website = profile.details.website.is_some(),
            genres = ?profile.details.genres.as_ref().map(Vec::len),
            "author scraped"
        );
        self.merge(&author, profile);
        Ok(Some(author.name))
    }

    /// Commit one scraped profile. Details and the influence list are
    /// replaced, not merged: the site's current state wins.
    fn merge(&mut self, author: &AuthorLink, profile: Profile) {
        let Profile { details, influences } = profile;
        let names: Vec<AuthorName> = influences.iter().map(|i| i.name.clone()).collect();

        let record = self.authors.entry(author.name.clone()).or_default();
        record.url = author.url.clone();
        record.website = details.website;
        record.genres = details.genres;
        let previous = std::mem::replace(&mut record.influences, names);

        for link in &influences {
            let rec = self.authors.entry(link.name.clone()).or_default();
            if rec.url.is_empty() {
                rec.url = link.url.clone();
            }
        }

        self.graph.add_node(&author.name);
        let current: HashSet<&str> = influences.iter().map(|i| i.name.as_str()).collect();
        for stale in previous.iter().filter(|p| !current.contains(p.as_str())) {
            self.graph.remove_edge(&author.name, stale);
        }
        for link in &influences {
            self.graph.add_edge(&author.name, &link.name);
        }
    }

    /// Rebuild the graph from the map alone. Influence names without a
    /// record of their own get an empty one so every node has metadata.
    pub fn rebuild_graph_from_metadata(&mut self) {
        self.graph.clear();

        let dangling: Vec<AuthorName> = self
            .authors
            .values()
            .flat_map(|r| r.influences.iter())
            .filter(|n| !self.authors.contains_key(n.as_str()))
            .cloned()
            .collect();
        for name in dangling {
            warn!(name = %name, "influence without a record");
            self.authors.entry(name).or_default();
        }

        for (name, record) in &self.authors {
            self.graph.add_node(name);
            for influence in &record.influences {
                self.graph.add_edge(name, influence);
            }
        }
        debug!(nodes = self.graph.node_count(), edges = self.graph.edge_count(), "graph rebuilt");
    }

    /// Replace the whole map (e.g. from the store) and rebuild the graph.
    pub fn restore(&mut self, authors: AuthorMap) {
        self.authors = authors;
        self.rebuild_graph_from_metadata();
    }

    /// Add each name in order. Failures are reported and skipped.
    /// Returns the names that resolved.
    pub fn create_universe<S: AsRef<str>>(
        &mut self,
        names: &[S],
        mut progress: Option<&mut dyn Progress>,
    ) -> Vec<AuthorName> {
        if let Some(p) = progress.as_deref_mut() {
            p.begin(names.len());
        }

        let mut added = Vec::with_capacity(names.len());
        for query in names {
            let query = query.as_ref();
            match self.add_author(query) {
                Ok(Some(name)) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(query, &name);
                    }
                    added.push(name);
                }
                Ok(None) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(query, "not found");
                    }
                }
                Err(e) => {
                    warn!(query, error = %e, "could not add author");
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(query, &e.to_string());
                    }
                }
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        added
    }

    /// Forget everything, reseed with the default authors and save.
    pub fn reset_session(&mut self, mut progress: Option<&mut dyn Progress>) -> Result<Vec<AuthorName>> {
        info!("resetting session");
        self.authors.clear();
        self.graph.clear();

        if let Some(p) = progress.as_deref_mut() {
            p.log("Starting a new session");
        }
        let seeds = self.options.default_authors().to_vec();
        let added = self.create_universe(&seeds, progress);
        self.persist()?;
        Ok(added)
    }

    /// Load the previous session, or seed with the default authors when
    /// there is none or it cannot be read.
    pub fn load_or_seed(&mut self, mut progress: Option<&mut dyn Progress>) -> Startup {
        match store::load(self.options.store_path()) {
            Ok(Some(authors)) => {
                let n = authors.len();
                self.restore(authors);
                return Startup::Restored { authors: n };
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "author store unusable, starting fresh");
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Could not read saved authors ({e}); starting fresh"));
                }
            }
        }

        self.authors.clear();
        self.graph.clear();
        let seeds = self.options.default_authors().to_vec();
        Startup::Seeded { authors: self.create_universe(&seeds, progress) }
    }

    pub fn persist(&self) -> Result<()> {
        store::save(self.options.store_path(), &self.authors)
    }

    /// Check the map/graph invariant.
    pub fn is_consistent(&self) -> bool {
        let nodes_have_records = self.graph.nodes().all(|n| self.authors.contains_key(n));
        let records_have_nodes = self.authors.keys().all(|n| self.graph.contains_node(n));
        let edges_listed = self
            .graph
            .edges()
            .all(|(a, b)| self.authors.get(a).is_some_and(|r| r.influences.iter().any(|i| i == b)));
        let listed_edges = self
            .authors
            .iter()
            .all(|(a, r)| r.influences.iter().all(|b| self.graph.contains_edge(a, b)));
        nodes_have_records && records_have_nodes && edges_listed && listed_edges
    }
}

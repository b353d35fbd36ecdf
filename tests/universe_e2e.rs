// tests/universe_e2e.rs
mod common;

use author_graph::Universe;
use author_graph::progress::Progress;
use author_graph::universe::Startup;
use common::*;

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<String>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, _query: &str, name: &str) { self.done.push(name.to_string()); }
    fn item_failed(&mut self, query: &str, _reason: &str) { self.failed.push(query.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn add_author_resolves_scrapes_and_merges() {
    let dir = tempfile::tempdir().unwrap();
    let site = seeded_site();
    let murakami = profile_url("3354.Haruki_Murakami");
    site.put_search("haruki murakami", &[("Haruki Murakami", murakami.as_str())]);
    let mut u = universe(&site, &dir.path().join("a.json"));

    let name = u.add_author("haruki murakami").unwrap();
    assert_eq!(name.as_deref(), Some("Haruki Murakami"));

    let rec = u.record("Haruki Murakami").unwrap();
    assert_eq!(rec.url, murakami);
    assert_eq!(rec.website.as_deref(), Some("http://www.harukimurakami.com/"));
    assert_eq!(rec.genres, Some(vec!["Fiction".to_string(), "Magical Realism".to_string()]));
    assert_eq!(rec.influences, vec!["Franz Kafka".to_string(), "Raymond Chandler".to_string()]);

    // influences get bare records
    let kafka = u.record("Franz Kafka").unwrap();
    assert_eq!(kafka.url, profile_url("5223.Franz_Kafka"));
    assert_eq!(kafka.website, None);
    assert_eq!(kafka.genres, None);

    assert_eq!(u.graph().node_count(), 3);
    assert!(u.graph().contains_edge("Haruki Murakami", "Franz Kafka"));
    assert!(u.graph().contains_edge("Haruki Murakami", "Raymond Chandler"));
    assert!(u.is_consistent());
}

#[test]
fn adding_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let site = seeded_site();
    let mut u = universe(&site, &dir.path().join("a.json"));

    u.add_author("Haruki Murakami").unwrap();
    let map_once = u.authors().clone();
    let graph_once = u.graph().clone();

    u.add_author("Haruki Murakami").unwrap();
    assert_eq!(u.authors(), &map_once);
    assert_eq!(u.graph(), &graph_once);
    assert_eq!(u.graph().edge_count(), 2);
}

#[test]
fn known_name_skips_the_search() {
    let dir = tempfile::tempdir().unwrap();
    let site = seeded_site();
    let mut u = universe(&site, &dir.path().join("a.json"));

    u.add_author("Haruki Murakami").unwrap();
    site.clear_hits();

    u.add_author("Haruki Murakami").unwrap();
    assert_eq!(site.hits(), vec![profile_url("3354.Haruki_Murakami")]);
}

#[test]
fn unknown_author_leaves_everything_alone() {
    let dir = tempfile::tempdir().unwrap();
    let site = seeded_site();
    site.put_search("Xyzzy12345NotAnAuthor", &[]);
    let mut u = universe(&site, &dir.path().join("a.json"));
    u.add_author("Bram Stoker").unwrap();
    let before = u.authors().clone();

    assert_eq!(u.add_author("Xyzzy12345NotAnAuthor").unwrap(), None);
    assert_eq!(u.authors(), &before);
    assert_eq!(u.graph().node_count(), 1);
}

#[test]
fn profile_fetch_failure_commits_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let site = seeded_site();
    site.remove(&profile_url("123715.Agatha_Christie"));
    let mut u = universe(&site, &dir.path().join("a.json"));

    let err = u.add_author("Agatha Christie").unwrap_err();
    assert!(err.is_fetch());
    assert!(u.authors().is_empty());
    assert_eq!(u.graph().node_count(), 0);
}

#[test]
fn search_fetch_failure_propagates() {
    let dir = tempfile::tempdir().unwrap();
    let site = PageMap::new();
    let mut u = universe(&site, &dir.path().join("a.json"));
    assert!(u.add_author("Anyone").unwrap_err().is_fetch());
}

#[test]
fn refresh_follows_the_site() {
    let dir = tempfile::tempdir().unwrap();
    let site = seeded_site();
    let mut u = universe(&site, &dir.path().join("a.json"));
    u.add_author("Haruki Murakami").unwrap();

    let murakami = profile_url("3354.Haruki_Murakami");
    let kafka = profile_url("5223.Franz_Kafka");
    site.put(&murakami, profile_page(None, Some(&[] as &[&str]), Some(&[("Franz Kafka", kafka.as_str())][..])));
    u.add_author("Haruki Murakami").unwrap();

    let rec = u.record("Haruki Murakami").unwrap();
    assert_eq!(rec.website, None);
    assert_eq!(rec.genres, Some(vec![]));
    assert_eq!(rec.influences, vec!["Franz Kafka".to_string()]);
    assert!(!u.graph().contains_edge("Haruki Murakami", "Raymond Chandler"));
    assert!(u.graph().contains_node("Raymond Chandler"));
    assert!(u.is_consistent());
}

#[test]
fn rebuild_matches_replayed_graph() {
    let dir = tempfile::tempdir().unwrap();
    let site = seeded_site();
    let mut live = universe(&site, &dir.path().join("a.json"));
    live.add_author("Haruki Murakami").unwrap();
    live.add_author("Agatha Christie").unwrap();

    let mut rebuilt = universe(&site, &dir.path().join("b.json"));
    rebuilt.restore(live.authors().clone());
    assert_eq!(rebuilt.graph(), live.graph());

    for (name, rec) in rebuilt.authors() {
        assert!(rebuilt.graph().contains_node(name));
        for inf in &rec.influences {
            assert!(rebuilt.graph().contains_edge(name, inf));
        }
    }
}

#[test]
fn reset_seeds_default_authors() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("myauthors.json");
    let site = seeded_site();
    let mut u = universe(&site, &store);
    u.add_author("Haruki Murakami").unwrap();

    let mut rec = Recorder::default();
    let added = u.reset_session(Some(&mut rec)).unwrap();

    assert_eq!(added, vec!["Haruki Murakami", "Charlotte Bronte", "Agatha Christie", "Bram Stoker"]);
    assert_eq!(rec.total, 4);
    assert_eq!(rec.done.len(), 4);
    assert!(rec.finished);

    assert!(u.graph().node_count() >= 4);
    for seed in ["Haruki Murakami", "Charlotte Bronte", "Agatha Christie", "Bram Stoker"] {
        assert!(!u.record(seed).unwrap().url.is_empty(), "{seed} has no url");
        assert!(u.graph().contains_node(seed));
    }
    assert!(u.is_consistent());
    assert!(store.exists());
}

#[test]
fn seeding_skips_failures() {
    let dir = tempfile::tempdir().unwrap();
    let site = seeded_site();
    site.remove(&profile_url("6988.Bram_Stoker"));
    let mut u = Universe::new(
        options(&dir.path().join("a.json")).with_default_authors(["Bram Stoker", "Nobody Atall", "Agatha Christie"]),
        Box::new(site.clone()),
    );
    site.put_search("Nobody Atall", &[]);

    let seeds = u.options().default_authors().to_vec();
    let mut rec = Recorder::default();
    let added = u.create_universe(&seeds, Some(&mut rec));
    assert_eq!(added, vec!["Agatha Christie"]);
    assert_eq!(rec.failed, vec!["Bram Stoker", "Nobody Atall"]);
}

#[test]
fn startup_seeds_without_a_store_and_restores_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("myauthors.json");
    let site = seeded_site();

    let mut first = universe(&site, &store);
    match first.load_or_seed(None) {
        Startup::Seeded { authors } => assert_eq!(authors.len(), 4),
        other => panic!("expected seeding, got {other:?}"),
    }
    first.persist().unwrap();

    site.clear_hits();
    let mut second = universe(&site, &store);
    assert_eq!(second.load_or_seed(None), Startup::Restored { authors: first.authors().len() });
    assert!(site.hits().is_empty());
    assert_eq!(second.graph(), first.graph());
    assert_eq!(second.authors(), first.authors());
}

#[test]
fn corrupt_store_falls_back_to_seeding() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("myauthors.json");
    std::fs::write(&store, "[1, 2").unwrap();

    let site = seeded_site();
    let mut u = universe(&site, &store);
    assert!(matches!(u.load_or_seed(None), Startup::Seeded { .. }));
    assert!(u.record("Bram Stoker").is_some());
}

#[test]
fn accented_influence_and_later_search_share_one_node() {
    let dir = tempfile::tempdir().unwrap();
    let site = PageMap::new();
    let author = profile_url("1.Some_Author");
    let gabo = profile_url("13450.Gabriel_Garcia_Marquez");
    site.put_search("Some Author", &[("Some Author", author.as_str())]);
    site.put_search("Gabriel Garcia Marquez", &[("Gabriel García Márquez", gabo.as_str())]);
    site.put(&author, profile_page(None, None, Some(&[("Gabriel García Márquez", gabo.as_str())][..])));
    site.put(&gabo, profile_page(None, Some(&["Magical Realism"][..]), None));
    let mut u = universe(&site, &dir.path().join("a.json"));

    u.add_author("Some Author").unwrap();
    let name = u.add_author("Gabriel Garcia Marquez").unwrap();

    assert_eq!(name.as_deref(), Some("Gabriel Garcia Marquez"));
    let keys: Vec<&str> = u.authors().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Gabriel Garcia Marquez", "Some Author"]);
    assert_eq!(u.graph().node_count(), 2);
    assert!(u.graph().contains_edge("Some Author", "Gabriel Garcia Marquez"));
    assert_eq!(u.record("Gabriel Garcia Marquez").unwrap().genres, Some(vec!["Magical Realism".to_string()]));
    assert!(u.is_consistent());
}

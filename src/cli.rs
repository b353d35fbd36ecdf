// src/cli.rs

// Interactive menu over stdin/stdout. Generic over the streams so a session
// can be driven from a script or a test.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::{error, warn};

use crate::{
    config::consts::{GRAPH_DOT_FILE, RETAIL_SEARCH_URL},
    core::net::url_with_query,
    file,
    model::AuthorName,
    progress::Progress,
    universe::{Startup, Universe},
};

pub const MSG_WELCOME: &str =
    "Welcome to Author Search! In the 'Action' prompt below, choose what you want to do";
pub const MSG_PROMPT: &str = "Type 'new' to clear previous session data, search for a new author and then type 'view' for interaction options or type 'exit' to close and save: ";
pub const MSG_VIEW_PROMPT: &str = "Enter 1 to see a network of all your author searches and their influences, \
2 to see the main genres your last search writes for, \
3 to open your last search's personal website, \
and 4 to open the Amazon page for their books: ";
pub const MSG_AUTHOR_NOT_FOUND: &str =
    "Sorry, GoodReads did not find this author. Check the spelling or try another author";
pub const MSG_NO_INFLUENCES: &str = "Sorry, GoodReads has no influences for this author on record!";
pub const MSG_NO_WEBSITE: &str = "This author doesn't have a personal website listed on Goodreads :(";
pub const MSG_NO_GENRES: &str = "No genres on record for this author";
pub const MSG_REQUESTS: &str = "Error connecting to goodreads, please try again";
pub const MSG_LAST_SEARCH_FAILED: &str = "Last search failed! Try again";
pub const MSG_PROGRAM_FAILED: &str = "Program failed. Try searching for something else?";
pub const MSG_NEW_SESSION: &str = "Starting a new session!";
pub const MSG_GOODBYE: &str = "Goodbye!";
pub const MSG_SAVE_FAILED: &str = "Could not save your authors";

/// One line at the main prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    New,
    Exit,
    View,
    Search(String),
}

impl Command {
    /// Blank input is no command.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "" => None,
            "new" => Some(Command::New),
            "exit" => Some(Command::Exit),
            "view" => Some(Command::View),
            query => Some(Command::Search(s!(query))),
        }
    }
}

/// Numbered choices offered after `view`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewAction {
    Graph,
    Genres,
    Website,
    Retail,
}

impl ViewAction {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().parse::<u32>().ok()? {
            1 => Some(ViewAction::Graph),
            2 => Some(ViewAction::Genres),
            3 => Some(ViewAction::Website),
            4 => Some(ViewAction::Retail),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Where "open in browser" goes.
pub trait Browser {
    fn open(&mut self, url: &str) -> io::Result<()>;
}

/// The desktop's default browser.
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&mut self, url: &str) -> io::Result<()> {
        webbrowser::open(url)
    }
}

/// Prints one line per seeded author.
struct LineProgress<'a, W: Write> {
    out: &'a mut W,
}

impl<W: Write> Progress for LineProgress<'_, W> {
    fn begin(&mut self, total: usize) {
        let _ = writeln!(self.out, "Adding {total} authors…");
    }

    fn log(&mut self, msg: &str) {
        let _ = writeln!(self.out, "{msg}");
    }

    fn item_done(&mut self, _query: &str, name: &str) {
        let _ = writeln!(self.out, "  {name}");
    }

    fn item_failed(&mut self, query: &str, reason: &str) {
        let _ = writeln!(self.out, "  {query}: {reason}");
    }
}

pub struct Session<R, W> {
    universe: Universe,
    input: R,
    out: W,
    browser: Box<dyn Browser>,
    dot_path: PathBuf,
    last_search: Option<AuthorName>,
    started: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(universe: Universe, input: R, out: W) -> Self {
        Self {
            universe,
            input,
            out,
            browser: Box::new(SystemBrowser),
            dot_path: PathBuf::from(GRAPH_DOT_FILE),
            last_search: None,
            started: false,
        }
    }

    pub fn with_browser(mut self, browser: Box<dyn Browser>) -> Self {
        self.browser = browser;
        self
    }

    pub fn with_dot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dot_path = path.into();
        self
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn last_search(&self) -> Option<&str> {
        self.last_search.as_deref()
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Load the previous session or seed a fresh one.
    pub fn start(&mut self) -> io::Result<Startup> {
        let mut progress = LineProgress { out: &mut self.out };
        let startup = self.universe.load_or_seed(Some(&mut progress));
        match &startup {
            Startup::Restored { authors } => {
                writeln!(self.out, "Loaded {authors} authors from your last session.")?
            }
            Startup::Seeded { authors } => {
                writeln!(self.out, "Started a new universe with {} authors.", authors.len())?
            }
        }
        Ok(startup)
    }

    /// Prompt until `exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        while self.step()? == Flow::Continue {}
        Ok(())
    }

    pub fn step(&mut self) -> io::Result<Flow> {
        if !self.started {
            writeln!(self.out, "{MSG_WELCOME}")?;
            self.started = true;
        }

        let Some(line) = self.prompt(MSG_PROMPT)? else {
            return self.exit();
        };
        match Command::parse(&line) {
            None => Ok(Flow::Continue),
            Some(Command::New) => self.new_session(),
            Some(Command::Exit) => self.exit(),
            Some(Command::View) => self.view(),
            Some(Command::Search(query)) => self.search(&query),
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        let mut line = s!();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(s!(line.trim())))
    }

    fn new_session(&mut self) -> io::Result<Flow> {
        self.last_search = None;
        let mut progress = LineProgress { out: &mut self.out };
        match self.universe.reset_session(Some(&mut progress)) {
            Ok(_) => writeln!(self.out, "{MSG_NEW_SESSION}")?,
            Err(e) if e.is_persistence() => {
                error!(error = %e, "reset could not be saved");
                writeln!(self.out, "{MSG_NEW_SESSION} ({MSG_SAVE_FAILED}: {e})")?;
            }
            Err(e) => {
                error!(error = %e, "reset failed");
                writeln!(self.out, "{MSG_PROGRAM_FAILED}")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn exit(&mut self) -> io::Result<Flow> {
        match self.universe.persist() {
            Ok(()) => {}
            Err(e) if e.is_persistence() => {
                error!(error = %e, "could not save authors on exit");
                writeln!(self.out, "{MSG_SAVE_FAILED}: {e}")?;
            }
            Err(e) => {
                error!(error = %e, "exit failed");
                writeln!(self.out, "{MSG_PROGRAM_FAILED}")?;
            }
        }
        writeln!(self.out, "{MSG_GOODBYE}")?;
        Ok(Flow::Quit)
    }

    fn search(&mut self, query: &str) -> io::Result<Flow> {
        self.last_search = None;
        match self.universe.add_author(query) {
            Ok(Some(name)) => {
                writeln!(self.out, "{name}")?;
                let influences = self.universe.graph().influences_of(&name);
                if influences.is_empty() {
                    writeln!(self.out, "{MSG_NO_INFLUENCES}")?;
                } else {
                    writeln!(self.out, "Influenced by: {}", influences.join(", "))?;
                }
                self.last_search = Some(name);
            }
            Ok(None) => writeln!(self.out, "{MSG_AUTHOR_NOT_FOUND}")?,
            Err(e) if e.is_fetch() => {
                warn!(query, error = %e, "search failed");
                writeln!(self.out, "{MSG_REQUESTS}")?;
            }
            Err(e) => {
                error!(query, error = %e, "search failed");
                writeln!(self.out, "{MSG_PROGRAM_FAILED}")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn view(&mut self) -> io::Result<Flow> {
        let Some(name) = self.last_search.clone() else {
            writeln!(self.out, "{MSG_LAST_SEARCH_FAILED}")?;
            return Ok(Flow::Continue);
        };
        let Some(line) = self.prompt(MSG_VIEW_PROMPT)? else {
            return self.exit();
        };
        match ViewAction::parse(&line) {
            Some(ViewAction::Graph) => self.show_graph()?,
            Some(ViewAction::Genres) => self.show_genres(&name)?,
            Some(ViewAction::Website) => self.open_website(&name)?,
            Some(ViewAction::Retail) => self.open_retail(&name)?,
            None => writeln!(self.out, "Unknown option: {line}")?,
        }
        Ok(Flow::Continue)
    }

    fn show_graph(&mut self) -> io::Result<()> {
        let graph = self.universe.graph();
        match file::write_graph_dot(&self.dot_path, graph) {
            Ok(path) => writeln!(
                self.out,
                "Wrote {} authors and {} influences to {}. Render with: dot -Tsvg {} -o author_graph.svg",
                graph.node_count(),
                graph.edge_count(),
                path.display(),
                path.display(),
            ),
            Err(e) => {
                error!(error = %e, "graph export failed");
                writeln!(self.out, "Could not write the graph: {e}")
            }
        }
    }

    fn show_genres(&mut self, name: &str) -> io::Result<()> {
        match self.universe.record(name) {
            None => writeln!(self.out, "{MSG_PROGRAM_FAILED}"),
            Some(rec) => match &rec.genres {
                None => writeln!(self.out, "{MSG_NO_GENRES}"),
                Some(genres) if genres.is_empty() => writeln!(self.out, "{name} lists no genres"),
                Some(genres) => writeln!(self.out, "{}", genres.join(", ")),
            },
        }
    }

    fn open_website(&mut self, name: &str) -> io::Result<()> {
        let website = match self.universe.record(name) {
            None => return writeln!(self.out, "{MSG_PROGRAM_FAILED}"),
            Some(rec) => rec.website.clone(),
        };
        let Some(url) = website else {
            return writeln!(self.out, "{MSG_NO_WEBSITE}");
        };
        writeln!(self.out, "{url}")?;
        self.open(&url)
    }

    fn open_retail(&mut self, name: &str) -> io::Result<()> {
        match url_with_query(RETAIL_SEARCH_URL, "k", name) {
            Ok(url) => self.open(&url),
            Err(e) => {
                error!(error = %e, "retail url");
                writeln!(self.out, "{MSG_PROGRAM_FAILED}")
            }
        }
    }

    fn open(&mut self, url: &str) -> io::Result<()> {
        if let Err(e) = self.browser.open(url) {
            warn!(url, error = %e, "browser");
            writeln!(self.out, "Can't open {url}: {e}")?;
        }
        Ok(())
    }
}

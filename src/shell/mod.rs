//! Interactive menu shell
//!
//! A small state machine over a [`Terminal`]:
//!
//! * `MainMenu` - add, view, manage or remove playlists, or exit
//! * `ViewPlaylists` - list everything, then back to the main menu
//! * `ManagePlaylist(index)` - add/remove songs and change the rating
//! * `Exit` - session over
//!
//! The shell never touches the collection directly; every change goes
//! through [`Store`], which persists before returning.

pub mod input;
pub mod terminal;

pub use terminal::{ConsoleTerminal, Terminal, Tone};

use crate::config::AppConfig;
use crate::model::{MAX_NAME_LEN, MAX_RATING, MIN_RATING};
use crate::store::{ErrorKind, Store, StoreError};
use input::{read_bounded_string, read_confirmation, read_float, read_int};
use std::io;

/// Shell position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    MainMenu,
    ViewPlaylists,
    ManagePlaylist(usize),
    Exit,
}

/// Outcome of an action that may read input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Done,
    /// Input was closed mid-action
    Closed,
}

/// Menu-driven front end over a [`Store`]
pub struct Shell<'a, T: Terminal> {
    store: &'a mut Store,
    term: T,
    pause: bool,
    notice: Option<String>,
}

impl<'a, T: Terminal> Shell<'a, T> {
    /// Create a shell; only the pause setting is read from `config`
    pub fn new(store: &'a mut Store, term: T, config: &AppConfig) -> Self {
        Self {
            store,
            term,
            pause: config.pause,
            notice: None,
        }
    }

    /// Show a warning under the first main menu (e.g. a failed load)
    pub fn with_startup_warning(mut self, warning: impl Into<String>) -> Self {
        self.notice = Some(warning.into());
        self
    }

    /// Run until the user exits or input is closed
    pub fn run(&mut self) -> io::Result<()> {
        let mut state = State::MainMenu;
        while state != State::Exit {
            state = self.step(state)?;
        }

        self.term.line("Goodbye!")?;
        self.term.flush()
    }

    /// Handle one state and return the next
    pub fn step(&mut self, state: State) -> io::Result<State> {
        log::trace!("Shell state: {:?}", state);
        match state {
            State::MainMenu => self.main_menu(),
            State::ViewPlaylists => self.view_playlists(),
            State::ManagePlaylist(index) => self.manage_playlist(index),
            State::Exit => Ok(State::Exit),
        }
    }

    /// Consume the shell, returning the terminal
    pub fn into_terminal(self) -> T {
        self.term
    }

    fn main_menu(&mut self) -> io::Result<State> {
        self.term.clear()?;
        self.term.header("PLAYLIST MANAGER")?;
        if let Some(notice) = self.notice.take() {
            self.term.warning(&notice)?;
        }
        self.term.line("1. Add Playlist")?;
        self.term.line("2. View Playlists")?;
        self.term.line("3. Manage Playlist")?;
        self.term.line("4. Remove Playlist")?;
        self.term.line("5. Exit")?;

        let Some(choice) = self.read_choice()? else {
            return Ok(State::Exit);
        };

        match choice {
            Choice::Number(1) => {
                self.term.clear()?;
                let step = self.add_playlist()?;
                self.finish(step, State::MainMenu)
            }
            Choice::Number(2) => Ok(State::ViewPlaylists),
            Choice::Number(3) => {
                self.term.clear()?;
                self.select_playlist()
            }
            Choice::Number(4) => {
                self.term.clear()?;
                let step = self.remove_playlist()?;
                self.finish(step, State::MainMenu)
            }
            Choice::Number(5) => Ok(State::Exit),
            Choice::Number(_) => {
                self.term.error("Invalid choice!")?;
                self.finish(Step::Done, State::MainMenu)
            }
            Choice::Invalid => {
                self.term.error("Invalid input!")?;
                self.finish(Step::Done, State::MainMenu)
            }
        }
    }

    fn view_playlists(&mut self) -> io::Result<State> {
        self.term.clear()?;
        print_playlists(&mut self.term, self.store)?;
        self.finish(Step::Done, State::MainMenu)
    }

    fn manage_playlist(&mut self, index: usize) -> io::Result<State> {
        let Some(playlist) = self.store.playlist(index) else {
            log::warn!("Playlist {} no longer exists", index);
            return Ok(State::MainMenu);
        };

        self.term.clear()?;
        self.term.write(Tone::Plain, "=== MANAGING PLAYLIST: ")?;
        self.term.write(Tone::Name, &playlist.name)?;
        self.term.write(Tone::Plain, " ===\n")?;
        self.term.line("1. Add Song")?;
        self.term.line("2. Remove Song")?;
        self.term.line("3. Change Rating")?;
        self.term.line("4. Back to Main Menu")?;

        let Some(choice) = self.read_choice()? else {
            return Ok(State::Exit);
        };

        let here = State::ManagePlaylist(index);
        match choice {
            Choice::Number(1) => {
                self.term.clear()?;
                let step = self.add_song(index)?;
                self.finish(step, here)
            }
            Choice::Number(2) => {
                self.term.clear()?;
                let step = self.remove_song(index)?;
                self.finish(step, here)
            }
            Choice::Number(3) => {
                self.term.clear()?;
                let step = self.change_rating(index)?;
                self.finish(step, here)
            }
            Choice::Number(4) => {
                self.term.clear()?;
                Ok(State::MainMenu)
            }
            Choice::Number(_) | Choice::Invalid => {
                self.term.error("Invalid choice!")?;
                self.finish(Step::Done, here)
            }
        }
    }

    fn add_playlist(&mut self) -> io::Result<Step> {
        if self.store.collection().is_full() {
            self.term.error("Maximum playlists reached!")?;
            return Ok(Step::Done);
        }

        let name_prompt = format!("Enter playlist name (max {} characters):", MAX_NAME_LEN);
        let Some(name) = read_bounded_string(&mut self.term, &name_prompt)? else {
            return Ok(Step::Closed);
        };
        let Some(rating) = read_float(&mut self.term, "Enter rating (0-5):", MIN_RATING, MAX_RATING)?
        else {
            return Ok(Step::Closed);
        };

        let result = self.store.add_playlist(&name, rating);
        self.report(result, "Playlist added successfully!")?;
        Ok(Step::Done)
    }

    fn select_playlist(&mut self) -> io::Result<State> {
        if self.store.is_empty() {
            self.term.warning("No playlists available to manage!")?;
            return self.finish(Step::Done, State::MainMenu);
        }

        print_playlists(&mut self.term, self.store)?;
        let count = self.store.len();
        match read_int(
            &mut self.term,
            "\nEnter playlist number to manage (0 to cancel):",
            0,
            count,
        )? {
            None => Ok(State::Exit),
            Some(0) => Ok(State::MainMenu),
            Some(number) => Ok(State::ManagePlaylist(number - 1)),
        }
    }

    fn remove_playlist(&mut self) -> io::Result<Step> {
        if self.store.is_empty() {
            self.term.error("No playlists available to remove!")?;
            return Ok(Step::Done);
        }

        self.term.clear()?;
        print_playlists(&mut self.term, self.store)?;
        let count = self.store.len();
        let number = match read_int(
            &mut self.term,
            "\nEnter playlist number to remove (0 to cancel):",
            0,
            count,
        )? {
            None => return Ok(Step::Closed),
            Some(0) => return Ok(Step::Done),
            Some(number) => number,
        };

        let index = number - 1;
        let name = self
            .store
            .playlist(index)
            .map(|p| p.name.clone())
            .unwrap_or_default();
        let question = format!(
            "\nAre you sure you want to delete playlist '{}'? (y/n):",
            name
        );
        match read_confirmation(&mut self.term, &question)? {
            None => return Ok(Step::Closed),
            Some(false) => {
                self.term.warning("Playlist deletion cancelled.")?;
                return Ok(Step::Done);
            }
            Some(true) => {}
        }

        let result = self.store.remove_playlist(index);
        self.report(result, "Playlist removed successfully!")?;
        Ok(Step::Done)
    }

    fn add_song(&mut self, index: usize) -> io::Result<Step> {
        if self.store.playlist(index).is_some_and(|p| p.is_full()) {
            self.term.error("Playlist is full!")?;
            return Ok(Step::Done);
        }

        let prompt = format!("Enter song name (max {} characters):", MAX_NAME_LEN);
        let Some(song) = read_bounded_string(&mut self.term, &prompt)? else {
            return Ok(Step::Closed);
        };

        let result = self.store.add_song(index, &song);
        self.report(result, "Song added successfully!")?;
        Ok(Step::Done)
    }

    fn remove_song(&mut self, index: usize) -> io::Result<Step> {
        let Some(playlist) = self.store.playlist(index) else {
            return Ok(Step::Done);
        };
        if playlist.is_empty() {
            self.term.error("Playlist is already empty!")?;
            return Ok(Step::Done);
        }

        self.term.line("Current songs in playlist:")?;
        for (i, song) in playlist.songs().iter().enumerate() {
            self.term.line(&format!("{}. {}", i + 1, song))?;
        }

        let count = playlist.song_count();
        let number = match read_int(
            &mut self.term,
            "Enter song number to remove (0 to cancel):",
            0,
            count,
        )? {
            None => return Ok(Step::Closed),
            Some(0) => return Ok(Step::Done),
            Some(number) => number,
        };

        let result = self.store.remove_song(index, number - 1);
        self.report(result, "Song removed successfully!")?;
        Ok(Step::Done)
    }

    fn change_rating(&mut self, index: usize) -> io::Result<Step> {
        let Some(rating) = read_float(
            &mut self.term,
            "Enter new rating (0-5):",
            MIN_RATING,
            MAX_RATING,
        )?
        else {
            return Ok(Step::Closed);
        };

        let result = self.store.set_rating(index, rating);
        self.report(result, "Rating updated successfully!")?;
        Ok(Step::Done)
    }

    /// Report a store outcome to the user
    fn report<V>(&mut self, result: Result<V, StoreError>, success: &str) -> io::Result<()> {
        match result {
            Ok(_) => {
                self.term.success("Playlists saved successfully!")?;
                self.term.success(success)
            }
            Err(e) => {
                if e.kind() == ErrorKind::Io {
                    log::error!("{}", e);
                } else {
                    log::debug!("Rejected operation: {}", e);
                }
                self.term.error(&e.to_string())?;
                if matches!(e, StoreError::Save { .. }) {
                    self.term
                        .warning("The change is kept for this session but was not saved.")?;
                }
                Ok(())
            }
        }
    }

    /// Pause after a completed action, or exit if input closed
    fn finish(&mut self, step: Step, next: State) -> io::Result<State> {
        match step {
            Step::Closed => Ok(State::Exit),
            Step::Done => {
                if self.pause {
                    self.term.prompt("Press Enter to continue...")?;
                    if let Ok(None) = self.term.read_line() {
                        return Ok(State::Exit);
                    }
                }
                Ok(next)
            }
        }
    }

    /// Read a menu selection; `None` when input is closed
    fn read_choice(&mut self) -> io::Result<Option<Choice>> {
        self.term.prompt("Choice:")?;
        match self.term.read_line() {
            Ok(Some(line)) => Ok(Some(Choice::parse(&line))),
            Ok(None) => Ok(None),
            Err(e) => {
                log::warn!("Failed to read menu choice: {}", e);
                Ok(Some(Choice::Invalid))
            }
        }
    }
}

/// A parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Number(i64),
    Invalid,
}

impl Choice {
    fn parse(line: &str) -> Self {
        line.trim()
            .parse()
            .map(Choice::Number)
            .unwrap_or(Choice::Invalid)
    }
}

/// Print every playlist with its rating and songs
pub fn print_playlists<T: Terminal + ?Sized>(term: &mut T, store: &Store) -> io::Result<()> {
    if store.is_empty() {
        return term.warning("No playlists available.");
    }

    term.header("YOUR PLAYLISTS")?;
    for (i, playlist) in store.list().enumerate() {
        term.write(Tone::Plain, &format!("\n{}. ", i + 1))?;
        term.write(Tone::Name, &playlist.name)?;
        term.write(Tone::Plain, " (Rating: ")?;
        term.write(Tone::Rating, &format!("{:.2}", playlist.rating))?;
        term.write(Tone::Plain, ")\n")?;
        term.line(&format!("Songs ({}):", playlist.song_count()))?;
        for song in playlist.songs() {
            term.write(Tone::Plain, "  - ")?;
            term.write(Tone::Song, song)?;
            term.write(Tone::Plain, "\n")?;
        }
    }
    Ok(())
}

//! ## Menu
//! The interactive front end of the spellchecker. A [Menu] repeatedly offers the options of
//! [Command], reads the user's choice from its input and answers on its output until the user
//! exits or the input ends.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::{error, info};

use crate::trie::{MAX_SUGGESTIONS, Trie};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    WordInTrie,
    PrefixSearch,
    ChangeDictionary,
    PrintAllWords,
    RemoveWord,
    Exit,
}

impl Command {
    /// All commands in menu order.
    pub const ALL: [Command; 6] = [
        Command::WordInTrie,
        Command::PrefixSearch,
        Command::ChangeDictionary,
        Command::PrintAllWords,
        Command::RemoveWord,
        Command::Exit,
    ];

    /// Map a menu selection to its command.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Command::WordInTrie),
            "2" => Some(Command::PrefixSearch),
            "3" => Some(Command::ChangeDictionary),
            "4" => Some(Command::PrintAllWords),
            "5" => Some(Command::RemoveWord),
            "6" => Some(Command::Exit),
            _ => None,
        }
    }

    pub fn key(&self) -> char {
        match self {
            Command::WordInTrie => '1',
            Command::PrefixSearch => '2',
            Command::ChangeDictionary => '3',
            Command::PrintAllWords => '4',
            Command::RemoveWord => '5',
            Command::Exit => '6',
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::WordInTrie => "Check if word is in Trie.",
            Command::PrefixSearch => "Search with prefixes.",
            Command::ChangeDictionary => "Change dictionary for trie.",
            Command::PrintAllWords => "Print all words in trie.",
            Command::RemoveWord => "Remove word from trie.",
            Command::Exit => "Quit the program",
        }
    }
}

pub struct Menu<R, W> {
    trie: Trie,
    input: R,
    output: W,
    limit: usize,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(trie: Trie, input: R, output: W) -> Self {
        Self {
            trie,
            input,
            output,
            limit: MAX_SUGGESTIONS,
        }
    }

    /// Show up to `limit` suggestions per prefix search instead of [MAX_SUGGESTIONS].
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Run until [Command::Exit] is chosen or the input is exhausted.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter menu selection:\n-> ")? else {
                return Ok(());
            };
            match Command::from_choice(&choice.to_lowercase()) {
                Some(Command::Exit) => return Ok(()),
                Some(command) => self.dispatch(command)?,
                None => writeln!(self.output, "Invalid choice!")?,
            }
            if self.prompt("\nPress any key to continue ...")?.is_none() {
                return Ok(());
            }
        }
    }

    /// Execute a single command.
    pub fn dispatch(&mut self, command: Command) -> io::Result<()> {
        info!("Running {:?}", command);
        match command {
            Command::WordInTrie => self.word_in_trie(),
            Command::PrefixSearch => self.prefix_search(),
            Command::ChangeDictionary => self.change_dictionary(),
            Command::PrintAllWords => self.print_all_words(),
            Command::RemoveWord => self.remove_word(),
            Command::Exit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        for command in Command::ALL {
            writeln!(self.output, "{}: {}", command.key(), command.description())?;
        }
        writeln!(self.output)
    }

    // Read one line, `None` once the input is exhausted.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn word_in_trie(&mut self) -> io::Result<()> {
        let Some(word) = self.prompt("\nword: \n>>> ")? else {
            return Ok(());
        };
        if self.trie.contains(&word.to_lowercase()) {
            writeln!(self.output, "word is spelled correctly.")
        } else {
            writeln!(self.output, "word does not exist")
        }
    }

    fn prefix_search(&mut self) -> io::Result<()> {
        let Some(mut prefix) = self.prompt("\nEnter 3 letters: \n>>> ")? else {
            return Ok(());
        };
        self.suggest(&prefix)?;
        while let Some(letters) = self.prompt("\nEnter another letter or 'quit' to exit: \n>>>")? {
            if letters == "quit" {
                break;
            }
            prefix.push_str(&letters);
            self.suggest(&prefix)?;
        }
        Ok(())
    }

    fn suggest(&mut self, prefix: &str) -> io::Result<()> {
        match self.trie.complete(&prefix.to_lowercase(), self.limit) {
            Ok(words) => {
                for (word, _) in words {
                    writeln!(self.output, "{}", word)?;
                }
                Ok(())
            }
            Err(err) => writeln!(self.output, "{}", err),
        }
    }

    fn change_dictionary(&mut self) -> io::Result<()> {
        let Some(path) = self.prompt("\nnew file: \n>>> ")? else {
            return Ok(());
        };
        match Trie::from_file(PathBuf::from(path.trim())) {
            Ok(trie) => {
                info!("Loaded {} words", trie.len());
                self.trie = trie;
                writeln!(self.output, "dictionary changed")
            }
            Err(err) => {
                error!("{}", err);
                writeln!(self.output, "file doesn't exist or is malformed")
            }
        }
    }

    fn print_all_words(&mut self) -> io::Result<()> {
        for word in self.trie.all_words().into_keys() {
            writeln!(self.output, "{}", word)?;
        }
        Ok(())
    }

    fn remove_word(&mut self) -> io::Result<()> {
        let Some(word) = self.prompt("\nword: \n>>> ")? else {
            return Ok(());
        };
        match self.trie.delete_word(&word.to_lowercase()) {
            Ok(()) => writeln!(self.output, "deleted word"),
            Err(err) => writeln!(self.output, "{}", err),
        }
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::{Command, Menu};
    use crate::trie::Trie;

    fn run(trie: Trie, input: &str) -> (Trie, String) {
        let mut output = Vec::new();
        let mut menu = Menu::new(trie, Cursor::new(input.to_string()), &mut output);
        menu.run().unwrap();
        let trie = menu.trie().clone();
        (trie, String::from_utf8(output).unwrap())
    }

    fn sample() -> Trie {
        let mut trie = Trie::new();
        trie.add_word("cat", 50.0);
        trie.add_word("car", 80.0);
        trie.add_word("cap", 10.0);
        trie
    }

    #[test]
    fn choices_map_to_commands() {
        for command in Command::ALL {
            assert_eq!(
                Command::from_choice(&command.key().to_string()),
                Some(command)
            );
        }
        assert_eq!(Command::from_choice("7"), None);
        assert_eq!(Command::from_choice("word_in_trie"), None);
    }

    #[test]
    fn checks_spelling_case_insensitively() {
        let (_, out) = run(sample(), "1\nCAT\n\n1\ncow\n\n6\n");
        assert!(out.contains("word is spelled correctly."));
        // answers follow the prompt on the same line
        assert!(out.contains(">>> word is spelled correctly."));
        assert!(out.contains("word does not exist"));
    }

    #[test]
    fn prefix_search_extends_prefix() {
        let (_, out) = run(sample(), "2\nc\na\nr\nquit\n\n6\n");
        let car = out.find("car").unwrap();
        let cat = out.find("cat").unwrap();
        assert!(car < cat);
        assert!(out.ends_with("Enter menu selection:\n-> "));
    }

    #[test]
    fn prefix_search_reports_miss() {
        let (_, out) = run(sample(), "2\nxyz\nquit\n\n6\n");
        assert!(out.contains("no match for 'xyz'"));
    }

    #[test]
    fn removes_words() {
        let (trie, out) = run(sample(), "5\ncat\n\n5\ncat\n\n6\n");
        assert!(out.contains("deleted word"));
        assert!(out.contains("no match for 'cat'"));
        assert!(!trie.contains("cat"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn prints_all_words_alphabetically() {
        let (_, out) = run(sample(), "4\n\n6\n");
        let cap = out.find("cap\n").unwrap();
        let car = out.find("car\n").unwrap();
        let cat = out.find("cat\n").unwrap();
        assert!(cap < car && car < cat);
    }

    #[test]
    fn invalid_choice_and_eof() {
        let (trie, out) = run(sample(), "9\n");
        assert!(out.contains("Invalid choice!"));
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn missing_dictionary_keeps_trie() {
        let (trie, out) = run(sample(), "3\n/nonexistent/words.txt\n\n6\n");
        assert!(out.contains("file doesn't exist"));
        assert_eq!(trie.len(), 3);
    }
}

use rand::seq::SliceRandom;
use std::io::BufRead;
use std::io::Result;
use std::rc::Rc;

/// Contains every word the answer could be, all of the same length.
pub struct WordBank {
    all_words: Vec<Rc<str>>,
    word_length: usize,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word is trimmed and
    /// converted to lower case; lines that aren't exactly `word_length`
    /// alphabetic characters are skipped.
    pub fn from_reader<R: BufRead>(word_reader: &mut R, word_length: usize) -> Result<WordBank> {
        Ok(WordBank {
            all_words: word_reader
                .lines()
                .map(|maybe_line| maybe_line.map(|line| line.trim().to_lowercase()))
                .filter(|maybe_word| {
                    maybe_word
                        .as_ref()
                        .map_or(true, |word| is_playable(word, word_length))
                })
                .map(|maybe_word| maybe_word.map(|word| Rc::from(word.as_str())))
                .collect::<Result<Vec<Rc<str>>>>()?,
            word_length,
        })
    }

    /// Constructs a new `WordBank` from the given words, with the same
    /// filtering as [`WordBank::from_reader`].
    pub fn from_vec(words: Vec<String>, word_length: usize) -> WordBank {
        WordBank {
            all_words: words
                .iter()
                .filter_map(|word| {
                    let word = word.trim().to_lowercase();
                    if is_playable(&word, word_length) {
                        Some(Rc::from(word.as_str()))
                    } else {
                        None
                    }
                })
                .collect(),
            word_length,
        }
    }

    /// Retrieves the full list of words.
    pub fn all_words(&self) -> Vec<Rc<str>> {
        self.all_words.iter().map(Rc::clone).collect()
    }

    /// Returns the length of every word in the bank.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Returns the number of words in the bank.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    /// Returns whether the bank has no words at all.
    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }
}

fn is_playable(word: &str, word_length: usize) -> bool {
    word.len() == word_length && word.chars().all(|letter| letter.is_ascii_alphabetic())
}

/// Picks up to `count` distinct words from the list, uniformly at random.
pub fn sample_words(words: &[Rc<str>], count: usize) -> Vec<Rc<str>> {
    words
        .choose_multiple(&mut rand::thread_rng(), count)
        .map(Rc::clone)
        .collect()
}

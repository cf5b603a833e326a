use crate::constraints::WordConstraints;
use crate::data::WordBank;
use crate::results::ConstraintError;
use crate::results::GuessFeedback;
use std::collections::HashSet;
use std::rc::Rc;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Tracks everything learned from a game's feedback, along with the words
/// that are still consistent with it.
///
/// The engine is built once per game from the full vocabulary, fed the
/// feedback for each guess in order, and asked for the remaining candidates
/// in between. It is `Clone`, so a caller can keep a checkpoint to roll back
/// to if feedback turns out to be contradictory.
#[derive(Debug, Clone)]
pub struct ConstraintEngine {
    all_words: Vec<Rc<str>>,
    candidates: Vec<Rc<str>>,
    constraints: WordConstraints,
}

impl ConstraintEngine {
    /// Creates an engine with every word in the bank still a candidate.
    pub fn new(bank: &WordBank) -> ConstraintEngine {
        ConstraintEngine {
            all_words: bank.all_words(),
            candidates: bank.all_words(),
            constraints: WordConstraints::new(bank.word_length()),
        }
    }

    /// Returns the length of the words this engine works with.
    pub fn word_length(&self) -> usize {
        self.constraints.word_length()
    }

    /// Folds one guess's feedback into the constraints, then drops every
    /// candidate the updated constraints rule out.
    ///
    /// The candidate list only ever shrinks: filtering starts from the
    /// current candidates, not the full vocabulary. If the feedback
    /// contradicts earlier evidence an error is returned and the candidate
    /// list is left untouched.
    ///
    /// The guess and its feedback must match the engine's word length.
    pub fn apply_feedback(&mut self, feedback: &GuessFeedback) -> Result<(), ConstraintError> {
        self.constraints.update(feedback)?;
        self.candidates = self
            .candidates
            .iter()
            .filter_map(|word| {
                if self.constraints.is_satisfied_by(word) {
                    return Some(Rc::clone(word));
                }
                None
            })
            .collect();
        Ok(())
    }

    /// The words still consistent with every constraint seen so far.
    pub fn remaining_candidates(&self) -> &[Rc<str>] {
        &self.candidates
    }

    /// Drops a single word from the candidates, for when the game itself
    /// rejects a word the constraints allow. Constraint state is unaffected.
    pub fn remove_candidate(&mut self, word: &str) {
        if let Some(position) = self
            .candidates
            .iter()
            .position(|candidate| candidate.as_ref() == word)
        {
            self.candidates.swap_remove(position);
        }
    }

    /// Words suited to a first guess: no repeated letter and exactly one
    /// vowel. Drawn from the full vocabulary, not the remaining candidates.
    pub fn first_guess_candidates(&self) -> Vec<Rc<str>> {
        self.all_words
            .iter()
            .filter(|word| {
                let unique_letters: HashSet<char> = word.chars().collect();
                unique_letters.len() == word.chars().count()
                    && word.chars().filter(|letter| VOWELS.contains(letter)).count() == 1
            })
            .map(Rc::clone)
            .collect()
    }
}

use crate::results::ConstraintError;
use crate::results::GuessFeedback;
use crate::results::LetterFeedback;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::collections::HashSet;
use std::iter::zip;
use std::result::Result;

/// Knowledge about a letter that occurs in the answer but isn't pinned to a
/// position yet.
#[derive(Debug, PartialEq, Eq, Clone)]
struct FloatingLetter {
    /// The letter must occur at least this many times, beyond any occurrences
    /// already recorded as fixed.
    min_count: usize,
    /// The positions the letter could still occupy.
    possible_positions: HashSet<usize>,
}

impl FloatingLetter {
    /// Constructs a `FloatingLetter` that could be anywhere in a word of the
    /// given length.
    fn new(word_length: usize) -> FloatingLetter {
        FloatingLetter {
            min_count: 1,
            possible_positions: (0..word_length).collect(),
        }
    }

    /// Verifies that `letter` still has enough possible positions left to
    /// occur its minimum number of times.
    fn check_room(&self, letter: char) -> Result<(), ConstraintError> {
        if self.possible_positions.len() < self.min_count {
            return Err(ConstraintError::NoRoomForLetter {
                letter,
                required: self.min_count,
                left: self.possible_positions.len(),
            });
        }
        Ok(())
    }
}

/// The letter knowledge accumulated from every guess so far: letters proven to
/// be at a position, letters known to be in the answer somewhere, and letters
/// known to be absent.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct WordConstraints {
    word_length: usize,
    fixed: HashMap<usize, char>,
    floating: HashMap<char, FloatingLetter>,
    excluded: HashSet<char>,
}

impl WordConstraints {
    /// Creates a `WordConstraints` for the given word length with nothing
    /// known yet.
    pub fn new(word_length: usize) -> WordConstraints {
        WordConstraints {
            word_length,
            fixed: HashMap::new(),
            floating: HashMap::new(),
            excluded: HashSet::new(),
        }
    }

    /// Returns the word length these constraints apply to.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Folds the feedback for one guess into the accumulated knowledge.
    ///
    /// The guess and its feedback must match this constraint's word length.
    /// Returns an error if the new evidence contradicts what is already known;
    /// the state may be partially updated in that case, so callers that want
    /// to retry should update a clone.
    pub fn update(&mut self, feedback: &GuessFeedback) -> Result<(), ConstraintError> {
        assert_eq!(
            feedback.guess.len(),
            self.word_length,
            "guess length must match the word length"
        );
        assert_eq!(
            feedback.letters.len(),
            self.word_length,
            "feedback length must match the word length"
        );

        let word_length = self.word_length;
        let fixed_before: HashSet<usize> = self.fixed.keys().copied().collect();
        // Counts the misplaced occurrences of each letter within this guess
        // alone, so a letter misplaced twice raises its minimum count to two.
        let mut misplaced_so_far: HashMap<char, usize> = HashMap::new();
        for ((position, letter), result) in
            zip(feedback.guess.char_indices(), feedback.letters.iter())
        {
            match result {
                LetterFeedback::Correct => {
                    self.fix_letter(position, letter)?;
                    // One required floating occurrence is now accounted for.
                    if let Entry::Occupied(mut floating_entry) = self.floating.entry(letter) {
                        floating_entry.get_mut().min_count -= 1;
                        if floating_entry.get().min_count == 0 {
                            floating_entry.remove();
                        }
                    }
                }
                LetterFeedback::Misplaced => {
                    let seen = misplaced_so_far.entry(letter).or_insert(0);
                    *seen += 1;
                    let count = *seen;
                    let floating = self
                        .floating
                        .entry(letter)
                        .or_insert_with(|| FloatingLetter::new(word_length));
                    if floating.min_count < count {
                        floating.min_count = count;
                    }
                    floating.possible_positions.remove(&position);
                    floating.check_room(letter)?;
                }
                LetterFeedback::Absent => {
                    self.excluded.insert(letter);
                }
            }
        }
        self.converge(&fixed_before)
    }

    /// Returns `true` iff the given word is consistent with every constraint.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        word.len() == self.word_length
            && word
                .char_indices()
                .all(|(position, letter)| match self.fixed.get(&position) {
                    Some(&fixed_letter) => letter == fixed_letter,
                    None => true,
                })
            && self.floating.iter().all(|(&letter, floating)| {
                let mut count_in_possible = 0;
                for (position, word_letter) in word.char_indices() {
                    if word_letter != letter {
                        continue;
                    }
                    if floating.possible_positions.contains(&position) {
                        count_in_possible += 1;
                    } else if self.fixed.get(&position) != Some(&letter) {
                        // Outside its possible positions the letter is only
                        // acceptable where it is already fixed.
                        return false;
                    }
                }
                count_in_possible >= floating.min_count
            })
            && word.char_indices().all(|(position, letter)| {
                self.floating.contains_key(&letter)
                    || !self.excluded.contains(&letter)
                    || self.fixed.get(&position) == Some(&letter)
            })
    }

    /// Records that `letter` is at `position`. Fixing the same letter again is
    /// a no-op; a different letter is contradictory evidence.
    fn fix_letter(&mut self, position: usize, letter: char) -> Result<(), ConstraintError> {
        match self.fixed.entry(position) {
            Entry::Occupied(existing) => {
                let current = *existing.get();
                if current != letter {
                    return Err(ConstraintError::PositionConflict {
                        position,
                        current,
                        incoming: letter,
                    });
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(letter);
            }
        }
        Ok(())
    }

    /// Narrows every floating letter by the positions already fixed, promoting
    /// any letter whose possible positions collapse to exactly its minimum
    /// count, until a full pass changes nothing.
    ///
    /// A floating letter narrowed by a position that was already fixed to that
    /// same letter before this feedback arrived is old news, not a new
    /// occurrence, so the fixed position absorbs one required occurrence the
    /// same way a correct result does. Without this, guessing an already-fixed
    /// letter at the wrong spot would be reported as a contradiction.
    ///
    /// A promotion fixes new positions and can unblock further narrowing, so
    /// the pass restarts after each one. Termination is bounded: promotions
    /// only remove floating entries and narrowing only shrinks position sets.
    fn converge(&mut self, fixed_before: &HashSet<usize>) -> Result<(), ConstraintError> {
        loop {
            for (&letter, floating) in self.floating.iter_mut() {
                for (&position, &fixed_letter) in self.fixed.iter() {
                    if floating.possible_positions.remove(&position)
                        && fixed_letter == letter
                        && fixed_before.contains(&position)
                    {
                        floating.min_count = floating.min_count.saturating_sub(1);
                    }
                }
                floating.check_room(letter)?;
            }
            self.floating.retain(|_, floating| floating.min_count > 0);

            let promotable = self
                .floating
                .iter()
                .find(|(_, floating)| floating.possible_positions.len() == floating.min_count)
                .map(|(&letter, _)| letter);
            let letter = match promotable {
                Some(letter) => letter,
                None => return Ok(()),
            };
            // Every remaining possible position is proven correct.
            if let Some(floating) = self.floating.remove(&letter) {
                for position in floating.possible_positions {
                    self.fix_letter(position, letter)?;
                }
            }
        }
    }
}

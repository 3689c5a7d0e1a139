//! Knights-and-knaves puzzles
//!
//! Every character is either a knight, who always tells the truth, or a
//! knave, who always lies.

use crate::knights::error::Result;
use crate::knights::logic::{Sentence, model_check};
use std::fmt;
use tracing::info;

/// Puzzle character
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Character {
    /// First speaker
    A,
    /// Second speaker
    B,
    /// Third speaker
    C,
}

impl Character {
    /// Every character, in order
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
        }
    }

    /// "X is a Knight"
    pub fn knight(self) -> Sentence {
        Sentence::symbol(&format!("{} is a Knight", self.letter()))
    }

    /// "X is a Knave"
    pub fn knave(self) -> Sentence {
        Sentence::symbol(&format!("{} is a Knave", self.letter()))
    }

    /// The character is exactly one of knight and knave
    pub fn is_one_kind(self) -> Sentence {
        Sentence::exclusive_or(self.knight(), self.knave())
    }

    /// What follows from the character saying `statement`
    ///
    /// A knight's statement is true and a knave's statement is false.
    pub fn says(self, statement: Sentence) -> Sentence {
        Sentence::and([
            Sentence::iff(statement.clone(), self.knight()),
            Sentence::iff(Sentence::not(statement), self.knave()),
        ])
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A named puzzle and everything known about it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    /// Display name
    pub name: String,
    /// Characters appearing in the puzzle
    pub characters: Vec<Character>,
    /// Conjunction of the rules and the statements made
    pub knowledge: Sentence,
}

impl Puzzle {
    fn new(index: usize, characters: &[Character], statements: Vec<Sentence>) -> Self {
        let knowledge = Sentence::and(
            characters
                .iter()
                .map(|character| character.is_one_kind())
                .chain(statements),
        );
        Self {
            name: format!("Puzzle {index}"),
            characters: characters.to_vec(),
            knowledge,
        }
    }

    /// Every "is a Knight" or "is a Knave" symbol the knowledge entails
    ///
    /// # Errors
    ///
    /// Returns an error if model checking fails
    pub fn solve(&self) -> Result<Vec<Sentence>> {
        let mut entailed = Vec::new();
        for character in &self.characters {
            for query in [character.knight(), character.knave()] {
                if model_check(&self.knowledge, &query)? {
                    entailed.push(query);
                }
            }
        }
        info!(puzzle = %self.name, conclusions = entailed.len(), "puzzle solved");
        Ok(entailed)
    }
}

/// The four classic puzzles
pub fn puzzles() -> Vec<Puzzle> {
    use Character::{A, B, C};

    let same_kind = Sentence::or([
        Sentence::and([A.knight(), B.knight()]),
        Sentence::and([A.knave(), B.knave()]),
    ]);
    let different_kinds = Sentence::or([
        Sentence::and([A.knight(), B.knave()]),
        Sentence::and([A.knave(), B.knight()]),
    ]);

    // A said one of two sentences; B's claim about which one decides B's kind
    let a_said_knave = Sentence::exclusive_or(
        Sentence::and([A.says(A.knave()), B.knight()]),
        Sentence::and([A.says(A.knight()), B.knave()]),
    );

    vec![
        // A: "I am both a knight and a knave."
        Puzzle::new(0, &[A], vec![A.says(Sentence::and([A.knight(), A.knave()]))]),
        // A: "We are both knaves." B says nothing.
        Puzzle::new(1, &[A, B], vec![A.says(Sentence::and([A.knave(), B.knave()]))]),
        // A: "We are the same kind." B: "We are of different kinds."
        Puzzle::new(2, &[A, B], vec![A.says(same_kind), B.says(different_kinds)]),
        // A says "I am a knight." or "I am a knave."
        // B: "A said 'I am a knave'." B: "C is a knave." C: "A is a knight."
        Puzzle::new(
            3,
            &Character::ALL,
            vec![a_said_knave, B.says(C.knave()), C.says(A.knight())],
        ),
    ]
}

/// Render each puzzle's name followed by its indented conclusions
///
/// # Errors
///
/// Returns an error if any puzzle fails to solve
pub fn format_solutions(puzzles: &[Puzzle]) -> Result<String> {
    let mut report = String::new();
    for puzzle in puzzles {
        report.push_str(&format!("{}\n", puzzle.name));
        for conclusion in puzzle.solve()? {
            report.push_str(&format!("    {conclusion}\n"));
        }
    }
    Ok(report)
}

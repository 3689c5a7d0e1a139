//! Propositional sentences and entailment by truth-table enumeration

use crate::knights::MAX_SYMBOLS;
use crate::knights::error::{LogicError, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::debug;

/// Truth value of every symbol
pub type Model = BTreeMap<String, bool>;

/// Propositional logic sentence
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sentence {
    /// Atomic proposition
    Symbol(String),
    /// Negation
    Not(Box<Sentence>),
    /// True when every conjunct is true
    And(Vec<Sentence>),
    /// True when some disjunct is true
    Or(Vec<Sentence>),
    /// False only when the antecedent holds and the consequent does not
    Implication(Box<Sentence>, Box<Sentence>),
    /// True when both sides agree
    Biconditional(Box<Sentence>, Box<Sentence>),
}

impl Sentence {
    /// Atomic proposition named `name`
    pub fn symbol(name: &str) -> Self {
        Self::Symbol(name.to_string())
    }

    /// Negation of `operand`
    pub fn not(operand: Self) -> Self {
        Self::Not(Box::new(operand))
    }

    /// Conjunction of `conjuncts`
    pub fn and(conjuncts: impl IntoIterator<Item = Self>) -> Self {
        Self::And(conjuncts.into_iter().collect())
    }

    /// Disjunction of `disjuncts`
    pub fn or(disjuncts: impl IntoIterator<Item = Self>) -> Self {
        Self::Or(disjuncts.into_iter().collect())
    }

    /// `antecedent` implies `consequent`
    pub fn implies(antecedent: Self, consequent: Self) -> Self {
        Self::Implication(Box::new(antecedent), Box::new(consequent))
    }

    /// `left` holds exactly when `right` does
    pub fn iff(left: Self, right: Self) -> Self {
        Self::Biconditional(Box::new(left), Box::new(right))
    }

    /// Exactly one of `left` and `right`
    pub fn exclusive_or(left: Self, right: Self) -> Self {
        Self::and([
            Self::or([left.clone(), right.clone()]),
            Self::not(Self::and([left, right])),
        ])
    }

    /// Truth value of the sentence in `model`
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::UnknownSymbol`] if the model lacks a symbol that is evaluated
    pub fn evaluate(&self, model: &Model) -> Result<bool> {
        match self {
            Self::Symbol(name) => model
                .get(name)
                .copied()
                .ok_or_else(|| LogicError::UnknownSymbol {
                    symbol: name.clone(),
                }),
            Self::Not(operand) => Ok(!operand.evaluate(model)?),
            Self::And(conjuncts) => {
                for conjunct in conjuncts {
                    if !conjunct.evaluate(model)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Self::Or(disjuncts) => {
                for disjunct in disjuncts {
                    if disjunct.evaluate(model)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Self::Implication(antecedent, consequent) => {
                Ok(!antecedent.evaluate(model)? || consequent.evaluate(model)?)
            }
            Self::Biconditional(left, right) => {
                Ok(left.evaluate(model)? == right.evaluate(model)?)
            }
        }
    }

    /// Every symbol name used in the sentence
    pub fn symbols(&self) -> BTreeSet<String> {
        let mut symbols = BTreeSet::new();
        self.collect_symbols(&mut symbols);
        symbols
    }

    fn collect_symbols(&self, symbols: &mut BTreeSet<String>) {
        match self {
            Self::Symbol(name) => {
                symbols.insert(name.clone());
            }
            Self::Not(operand) => operand.collect_symbols(symbols),
            Self::And(operands) | Self::Or(operands) => {
                for operand in operands {
                    operand.collect_symbols(symbols);
                }
            }
            Self::Implication(left, right) | Self::Biconditional(left, right) => {
                left.collect_symbols(symbols);
                right.collect_symbols(symbols);
            }
        }
    }
}

fn join(f: &mut fmt::Formatter<'_>, operands: &[Sentence], separator: &str) -> fmt::Result {
    for (index, operand) in operands.iter().enumerate() {
        if index > 0 {
            write!(f, " {separator} ")?;
        }
        write!(f, "{operand}")?;
    }
    Ok(())
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(name) => write!(f, "{name}"),
            Self::Not(operand) => write!(f, "¬({operand})"),
            Self::And(conjuncts) => {
                write!(f, "(")?;
                join(f, conjuncts, "∧")?;
                write!(f, ")")
            }
            Self::Or(disjuncts) => {
                write!(f, "(")?;
                join(f, disjuncts, "∨")?;
                write!(f, ")")
            }
            Self::Implication(antecedent, consequent) => {
                write!(f, "({antecedent} => {consequent})")
            }
            Self::Biconditional(left, right) => write!(f, "({left} <=> {right})"),
        }
    }
}

/// Whether `knowledge` entails `query`
///
/// Every assignment of the symbols of both sentences is enumerated; the
/// query must hold in every model where the knowledge holds.
///
/// # Errors
///
/// Returns [`LogicError::TooManySymbols`] above [`MAX_SYMBOLS`] distinct symbols
pub fn model_check(knowledge: &Sentence, query: &Sentence) -> Result<bool> {
    let mut symbols = knowledge.symbols();
    symbols.extend(query.symbols());
    if symbols.len() > MAX_SYMBOLS {
        return Err(LogicError::TooManySymbols {
            count: symbols.len(),
            max: MAX_SYMBOLS,
        });
    }

    let symbols: Vec<String> = symbols.into_iter().collect();
    let mut model: Model = symbols.iter().map(|name| (name.clone(), false)).collect();
    let mut models = 0_u64;
    for assignment in 0..1_u64 << symbols.len() {
        for (bit, name) in symbols.iter().enumerate() {
            if let Some(value) = model.get_mut(name) {
                *value = (assignment >> bit) & 1 == 1;
            }
        }
        models += 1;

        if knowledge.evaluate(&model)? && !query.evaluate(&model)? {
            debug!(models, %query, "counter-model found");
            return Ok(false);
        }
    }

    debug!(models, %query, "entailed");
    Ok(true)
}

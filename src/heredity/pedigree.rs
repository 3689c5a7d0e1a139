//! People, their parents and observed traits

use crate::heredity::MAX_PEOPLE;
use crate::heredity::error::{HeredityError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// One member of the pedigree
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    /// Unique name
    pub name: String,
    /// Mother's name, if known
    pub mother: Option<String>,
    /// Father's name, if known
    pub father: Option<String>,
    /// Observed trait, `None` when unobserved
    pub has_trait: Option<bool>,
}

impl Person {
    /// A person without known parents
    pub fn new(name: &str, has_trait: Option<bool>) -> Self {
        Self {
            name: name.to_string(),
            mother: None,
            father: None,
            has_trait,
        }
    }

    /// A person whose mother and father are both known
    pub fn child(name: &str, mother: &str, father: &str, has_trait: Option<bool>) -> Self {
        Self {
            name: name.to_string(),
            mother: Some(mother.to_string()),
            father: Some(father.to_string()),
            has_trait,
        }
    }
}

/// Validated family with parents resolved to indices
///
/// People are kept sorted by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pedigree {
    people: Vec<Person>,
    parents: Vec<Option<(usize, usize)>>,
}

impl Pedigree {
    /// Validate `people` and resolve parent names
    ///
    /// # Errors
    ///
    /// Returns an error for repeated names, a single named parent, a parent
    /// outside the pedigree, or more than [`MAX_PEOPLE`] people
    pub fn new(mut people: Vec<Person>) -> Result<Self> {
        if people.len() > MAX_PEOPLE {
            return Err(HeredityError::TooManyPeople {
                count: people.len(),
                max: MAX_PEOPLE,
            });
        }
        people.sort_by(|a, b| a.name.cmp(&b.name));

        let mut index = HashMap::with_capacity(people.len());
        for (position, person) in people.iter().enumerate() {
            if index.insert(person.name.clone(), position).is_some() {
                return Err(HeredityError::DuplicatePerson {
                    name: person.name.clone(),
                });
            }
        }

        let resolve = |person: &Person, parent: &String| {
            index
                .get(parent)
                .copied()
                .ok_or_else(|| HeredityError::UnknownParent {
                    person: person.name.clone(),
                    parent: parent.clone(),
                })
        };

        let parents = people
            .iter()
            .map(|person| -> Result<Option<(usize, usize)>> {
                match (&person.mother, &person.father) {
                    (Some(mother), Some(father)) => {
                        Ok(Some((resolve(person, mother)?, resolve(person, father)?)))
                    }
                    (None, None) => Ok(None),
                    _ => Err(HeredityError::IncompleteParents {
                        person: person.name.clone(),
                    }),
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { people, parents })
    }

    /// Read a pedigree from CSV with the columns `name,mother,father,trait`
    ///
    /// Blank parents mean unknown; `trait` is `1`, `0` or blank.
    ///
    /// # Errors
    ///
    /// Returns [`HeredityError::InvalidRecord`] for malformed rows, and the
    /// validation errors of [`Pedigree::new`]
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|error| HeredityError::InvalidRecord {
                row: 0,
                reason: error.to_string(),
            })?
            .clone();
        let columns = ColumnIndices::locate(&headers)?;

        let mut people = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|error| HeredityError::InvalidRecord {
                row: row + 1,
                reason: error.to_string(),
            })?;
            people.push(columns.person(&record, row + 1)?);
        }

        Self::new(people)
    }

    /// Read a pedigree CSV file
    ///
    /// # Errors
    ///
    /// Returns [`HeredityError::Csv`] if the file cannot be opened, and the
    /// errors of [`Pedigree::from_reader`]
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|error| HeredityError::Csv {
            path: path.to_path_buf(),
            source: csv::Error::from(error),
        })?;
        let pedigree = Self::from_reader(file)?;
        info!(people = pedigree.len(), path = %path.display(), "pedigree loaded");
        Ok(pedigree)
    }

    /// Number of people
    pub const fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the pedigree has nobody in it
    pub const fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// People sorted by name
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Person by name
    pub fn person(&self, name: &str) -> Option<&Person> {
        self.people.iter().find(|person| person.name == name)
    }

    /// Indices of the mother and father of the person at `index`
    pub fn parents_of(&self, index: usize) -> Option<(usize, usize)> {
        self.parents.get(index).copied().flatten()
    }
}

struct ColumnIndices {
    name: usize,
    mother: usize,
    father: usize,
    has_trait: usize,
}

impl ColumnIndices {
    fn locate(headers: &StringRecord) -> Result<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|header| header == column)
                .ok_or_else(|| HeredityError::InvalidRecord {
                    row: 0,
                    reason: format!("missing column '{column}'"),
                })
        };

        Ok(Self {
            name: find("name")?,
            mother: find("mother")?,
            father: find("father")?,
            has_trait: find("trait")?,
        })
    }

    fn person(&self, record: &StringRecord, row: usize) -> Result<Person> {
        let optional = |index: usize| {
            record
                .get(index)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        let name = optional(self.name).ok_or_else(|| HeredityError::InvalidRecord {
            row,
            reason: "name is blank".to_string(),
        })?;
        let has_trait = match record.get(self.has_trait).unwrap_or_default() {
            "1" => Some(true),
            "0" => Some(false),
            "" => None,
            other => {
                return Err(HeredityError::InvalidRecord {
                    row,
                    reason: format!("trait must be 0, 1 or blank, found '{other}'"),
                });
            }
        };

        Ok(Person {
            name,
            mother: optional(self.mother),
            father: optional(self.father),
            has_trait,
        })
    }
}

//! Person record
//!
//! A `Record` is one row of the dataset: nine free-form text fields in a fixed
//! order. Fields are never validated, so an empty string is as good as any other
//! value. Once built a record is only ever read; pages hand out owned records and
//! drop them when the next page replaces them.

/// Number of fields carried by a [`Record`].
pub const FIELD_COUNT: usize = 9;

/// One person entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Record {
    id1: String,
    id2: String,
    first_name: String,
    last_name: String,
    gender: String,
    birth_place: String,
    current_place: String,
    job: String,
    date: String,
}

impl Record {
    /// Build a record from its fields in column order
    /// (ID1, ID2, first name, last name, gender, birth place, current place, job, date).
    pub fn from_fields(fields: [String; FIELD_COUNT]) -> Self {
        let [id1, id2, first_name, last_name, gender, birth_place, current_place, job, date] =
            fields;
        Self {
            id1,
            id2,
            first_name,
            last_name,
            gender,
            birth_place,
            current_place,
            job,
            date,
        }
    }

    /// All fields in column order.
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            &self.id1,
            &self.id2,
            &self.first_name,
            &self.last_name,
            &self.gender,
            &self.birth_place,
            &self.current_place,
            &self.job,
            &self.date,
        ]
    }

    pub fn id1(&self) -> &str {
        &self.id1
    }

    pub fn id2(&self) -> &str {
        &self.id2
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn birth_place(&self) -> &str {
        &self.birth_place
    }

    pub fn current_place(&self) -> &str {
        &self.current_place
    }

    pub fn job(&self) -> &str {
        &self.job
    }

    pub fn date(&self) -> &str {
        &self.date
    }
}

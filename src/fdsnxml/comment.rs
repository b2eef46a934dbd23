//! `Comment`: free text attached to an inventory item

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use super::person::Person;
use crate::collection::{Handle, OwnedCollection};
use crate::error::Result;
use crate::metaobject::MetaObject;
use crate::optional::Optional;
use crate::property::{collection_property, optional_property, property};
use crate::rtti::{Rtti, BASE_OBJECT};

/// Type descriptor of [`Comment`]
pub static COMMENT_RTTI: Rtti = Rtti::new("FDSNXML::Comment", &BASE_OBJECT);

static COMMENT_META: Lazy<MetaObject> = Lazy::new(|| {
    MetaObject::declare(
        &COMMENT_RTTI,
        None,
        [
            property(
                "Value",
                false,
                |o: &Comment| &o.value,
                |o: &mut Comment, v: String| o.value = v,
            ),
            optional_property(
                "BeginEffectiveTime",
                false,
                |o: &Comment| o.begin_effective_time.as_option(),
                |o: &mut Comment, v: Option<DateTime<Utc>>| o.begin_effective_time = v.into(),
            ),
            optional_property(
                "EndEffectiveTime",
                false,
                |o: &Comment| o.end_effective_time.as_option(),
                |o: &mut Comment, v: Option<DateTime<Utc>>| o.end_effective_time = v.into(),
            ),
            optional_property(
                "id",
                true,
                |o: &Comment| o.id.as_option(),
                |o: &mut Comment, v: Option<i64>| o.id = v.into(),
            ),
            optional_property(
                "subject",
                true,
                |o: &Comment| o.subject.as_option(),
                |o: &mut Comment, v: Option<String>| o.subject = v.into(),
            ),
            collection_property(
                "Author",
                |o: &Comment| &o.authors,
                |o: &mut Comment| &mut o.authors,
            ),
        ],
    )
});

/// Comment with optional validity window and authors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comment {
    value: String,
    begin_effective_time: Optional<DateTime<Utc>>,
    end_effective_time: Optional<DateTime<Utc>>,
    id: Optional<i64>,
    subject: Optional<String>,
    authors: OwnedCollection<Person>,
}

impl Comment {
    /// Create a comment with text `value`
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Comment text
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the comment text
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Start of the period the comment applies to
    pub fn begin_effective_time(&self) -> Result<DateTime<Utc>> {
        self.begin_effective_time
            .get("Comment.BeginEffectiveTime")
            .copied()
    }

    /// Set or clear the start of the validity period
    pub fn set_begin_effective_time(&mut self, time: Option<DateTime<Utc>>) {
        self.begin_effective_time = time.into();
    }

    /// End of the period the comment applies to
    pub fn end_effective_time(&self) -> Result<DateTime<Utc>> {
        self.end_effective_time
            .get("Comment.EndEffectiveTime")
            .copied()
    }

    /// Set or clear the end of the validity period
    pub fn set_end_effective_time(&mut self, time: Option<DateTime<Utc>>) {
        self.end_effective_time = time.into();
    }

    /// Comment identifier
    pub fn id(&self) -> Result<i64> {
        self.id.get("Comment.id").copied()
    }

    /// Set or clear the identifier
    pub fn set_id(&mut self, id: Option<i64>) {
        self.id = id.into();
    }

    /// Subject line
    pub fn subject(&self) -> Result<&str> {
        self.subject.get("Comment.subject").map(String::as_str)
    }

    /// Set or clear the subject line
    pub fn set_subject(&mut self, subject: Option<String>) {
        self.subject = subject.into();
    }

    /// Add an author at the end
    pub fn add_author(&mut self, author: &Handle<Person>) -> bool {
        self.authors.add(author)
    }

    /// Remove an author by identity
    pub fn remove_author(&mut self, author: &Handle<Person>) -> bool {
        self.authors.remove(author)
    }

    /// Remove the author at `index` and hand it back
    pub fn remove_author_at(&mut self, index: usize) -> Option<Handle<Person>> {
        self.authors.remove_at(index)
    }

    /// Number of authors
    pub fn author_count(&self) -> usize {
        self.authors.count()
    }

    /// Author at `index`
    pub fn author(&self, index: usize) -> Option<&Handle<Person>> {
        self.authors.at(index)
    }
}

crate::impl_class!(Comment, COMMENT_RTTI, COMMENT_META);

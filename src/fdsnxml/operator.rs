//! `Operator`: the agency operating a network or station

use once_cell::sync::Lazy;

use super::agency::Agency;
use super::person::Person;
use super::stringtype::StringType;
use crate::collection::{Handle, OwnedCollection};
use crate::error::Result;
use crate::metaobject::MetaObject;
use crate::optional::Optional;
use crate::property::{collection_property, optional_property, property};
use crate::rtti::{Rtti, BASE_OBJECT};

/// Type descriptor of [`Operator`]
pub static OPERATOR_RTTI: Rtti = Rtti::new("FDSNXML::Operator", &BASE_OBJECT);

static OPERATOR_META: Lazy<MetaObject> = Lazy::new(|| {
    MetaObject::declare(
        &OPERATOR_RTTI,
        None,
        [
            property("Agency", false, Operator::agency, Operator::set_agency),
            optional_property(
                "WebSite",
                false,
                |o: &Operator| o.web_site.as_option(),
                |o: &mut Operator, v: Option<StringType>| o.set_web_site(v),
            ),
            collection_property(
                "Contact",
                |o: &Operator| &o.contacts,
                |o: &mut Operator| &mut o.contacts,
            ),
        ],
    )
});

/// Operating agency with its contacts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Operator {
    agency: Agency,
    web_site: Optional<StringType>,
    contacts: OwnedCollection<Person>,
}

impl Operator {
    /// Operating agency
    pub fn agency(&self) -> &Agency {
        &self.agency
    }

    /// Operating agency, mutably
    pub fn agency_mut(&mut self) -> &mut Agency {
        &mut self.agency
    }

    /// Replace the operating agency
    pub fn set_agency(&mut self, agency: Agency) {
        self.agency = agency;
    }

    /// Web site of the agency
    pub fn web_site(&self) -> Result<&StringType> {
        self.web_site.get("Operator.WebSite")
    }

    /// Set or clear the web site
    pub fn set_web_site(&mut self, web_site: Option<StringType>) {
        self.web_site = web_site.into();
    }

    /// Add a contact at the end
    ///
    /// Returns `false` if the contact already belongs to an operator.
    pub fn add_contact(&mut self, contact: &Handle<Person>) -> bool {
        self.contacts.add(contact)
    }

    /// Remove a contact by identity
    pub fn remove_contact(&mut self, contact: &Handle<Person>) -> bool {
        self.contacts.remove(contact)
    }

    /// Remove the contact at `index` and hand it back
    pub fn remove_contact_at(&mut self, index: usize) -> Option<Handle<Person>> {
        self.contacts.remove_at(index)
    }

    /// Number of contacts
    pub fn contact_count(&self) -> usize {
        self.contacts.count()
    }

    /// Contact at `index`
    pub fn contact(&self, index: usize) -> Option<&Handle<Person>> {
        self.contacts.at(index)
    }

    /// All contacts in document order
    pub fn contacts(&self) -> &OwnedCollection<Person> {
        &self.contacts
    }
}

crate::impl_class!(Operator, OPERATOR_RTTI, OPERATOR_META);

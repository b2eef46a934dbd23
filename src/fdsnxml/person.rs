//! `Person`: a contact with names, agencies, e-mail addresses and phones

use once_cell::sync::Lazy;

use super::agency::Agency;
use super::email::Email;
use super::phonenumber::PhoneNumber;
use super::stringtype::StringType;
use crate::collection::{Handle, OwnedCollection};
use crate::metaobject::MetaObject;
use crate::property::collection_property;
use crate::rtti::{Rtti, BASE_OBJECT};

/// Type descriptor of [`Person`]
pub static PERSON_RTTI: Rtti = Rtti::new("FDSNXML::Person", &BASE_OBJECT);

static PERSON_META: Lazy<MetaObject> = Lazy::new(|| {
    MetaObject::declare(
        &PERSON_RTTI,
        None,
        [
            collection_property(
                "Name",
                |o: &Person| &o.names,
                |o: &mut Person| &mut o.names,
            ),
            collection_property(
                "Agency",
                |o: &Person| &o.agencies,
                |o: &mut Person| &mut o.agencies,
            ),
            collection_property(
                "Email",
                |o: &Person| &o.emails,
                |o: &mut Person| &mut o.emails,
            ),
            collection_property(
                "Phone",
                |o: &Person| &o.phones,
                |o: &mut Person| &mut o.phones,
            ),
        ],
    )
});

/// Contact person
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    names: OwnedCollection<StringType>,
    agencies: OwnedCollection<Agency>,
    emails: OwnedCollection<Email>,
    phones: OwnedCollection<PhoneNumber>,
}

impl Person {
    /// Names of the person
    pub fn names(&self) -> &OwnedCollection<StringType> {
        &self.names
    }

    /// Add a name; fails if it is owned already
    pub fn add_name(&mut self, name: &Handle<StringType>) -> bool {
        self.names.add(name)
    }

    /// Remove a name by identity
    pub fn remove_name(&mut self, name: &Handle<StringType>) -> bool {
        self.names.remove(name)
    }

    /// Remove the name at `index` and hand it back detached
    pub fn remove_name_at(&mut self, index: usize) -> Option<Handle<StringType>> {
        self.names.remove_at(index)
    }

    /// Number of names
    pub fn name_count(&self) -> usize {
        self.names.count()
    }

    /// Get the name at `index`
    pub fn name(&self, index: usize) -> Option<&Handle<StringType>> {
        self.names.at(index)
    }

    /// Agencies the person works for
    pub fn agencies(&self) -> &OwnedCollection<Agency> {
        &self.agencies
    }

    /// Add an agency; fails if it is owned already
    pub fn add_agency(&mut self, agency: &Handle<Agency>) -> bool {
        self.agencies.add(agency)
    }

    /// Remove an agency by identity
    pub fn remove_agency(&mut self, agency: &Handle<Agency>) -> bool {
        self.agencies.remove(agency)
    }

    /// Remove the agency at `index` and hand it back detached
    pub fn remove_agency_at(&mut self, index: usize) -> Option<Handle<Agency>> {
        self.agencies.remove_at(index)
    }

    /// Number of agencies
    pub fn agency_count(&self) -> usize {
        self.agencies.count()
    }

    /// Get the agency at `index`
    pub fn agency(&self, index: usize) -> Option<&Handle<Agency>> {
        self.agencies.at(index)
    }

    /// E-mail addresses
    pub fn emails(&self) -> &OwnedCollection<Email> {
        &self.emails
    }

    /// Add an e-mail address; fails if it is owned already
    pub fn add_email(&mut self, email: &Handle<Email>) -> bool {
        self.emails.add(email)
    }

    /// Remove an e-mail address by identity
    pub fn remove_email(&mut self, email: &Handle<Email>) -> bool {
        self.emails.remove(email)
    }

    /// Remove the e-mail address at `index` and hand it back detached
    pub fn remove_email_at(&mut self, index: usize) -> Option<Handle<Email>> {
        self.emails.remove_at(index)
    }

    /// Number of e-mail addresses
    pub fn email_count(&self) -> usize {
        self.emails.count()
    }

    /// Get the e-mail address at `index`
    pub fn email(&self, index: usize) -> Option<&Handle<Email>> {
        self.emails.at(index)
    }

    /// Phone numbers
    pub fn phones(&self) -> &OwnedCollection<PhoneNumber> {
        &self.phones
    }

    /// Add a phone number; fails if it is owned already
    pub fn add_phone(&mut self, phone: &Handle<PhoneNumber>) -> bool {
        self.phones.add(phone)
    }

    /// Remove a phone number by identity
    pub fn remove_phone(&mut self, phone: &Handle<PhoneNumber>) -> bool {
        self.phones.remove(phone)
    }

    /// Remove the phone number at `index` and hand it back detached
    pub fn remove_phone_at(&mut self, index: usize) -> Option<Handle<PhoneNumber>> {
        self.phones.remove_at(index)
    }

    /// Number of phone numbers
    pub fn phone_count(&self) -> usize {
        self.phones.count()
    }

    /// Get the phone number at `index`
    pub fn phone(&self, index: usize) -> Option<&Handle<PhoneNumber>> {
        self.phones.at(index)
    }
}

crate::impl_class!(Person, PERSON_RTTI, PERSON_META);

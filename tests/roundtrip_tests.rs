//! End-to-end tests writing objects to element trees and reading them back

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use fdsnxml::archive::{Node, Reader, Writer};
use fdsnxml::fdsnxml::{
    Agency, Comment, CounterType, Email, FloatNoUnitWithNumberType, FloatType, Operator, Person,
    PhoneNumber, StringType,
};
use fdsnxml::{cast, Handle};

fn round_trip_json(node: &Node) -> Node {
    let json = node.to_json().unwrap();
    Node::from_json(&json).unwrap()
}

#[test]
fn test_operator_with_empty_contacts_and_unset_web_site() {
    let mut op = Operator::default();
    op.set_agency(Agency::new("GEOFON"));
    assert_eq!(op.contact_count(), 0);
    assert!(op.web_site().is_err());

    let node = Writer::new().write(&op).unwrap();
    assert!(node.find_child("WebSite").is_none());
    assert!(node.find_child("Contact").is_none());

    let obj = Reader::new().read(&round_trip_json(&node)).unwrap();
    let copy = cast::<Operator>(&*obj).unwrap();
    assert_eq!(copy, &op);
    assert!(copy.web_site().unwrap_err().is_value_not_set());
    assert_eq!(copy.contact_count(), 0);
}

#[test]
fn test_full_operator() {
    let mut contact = Person::default();
    contact.add_name(&Handle::new(StringType::new("Jane Doe")));
    contact.add_agency(&Handle::new(Agency::new("GFZ")));
    contact.add_email(&Handle::new(Email::new("jane@example.org")));
    let mut phone = PhoneNumber::new(331, "2880");
    phone.set_country_code(Some(49));
    phone.set_description(Some("office".to_string()));
    contact.add_phone(&Handle::new(phone));

    let mut op = Operator::default();
    op.set_agency(Agency::new("GFZ"));
    op.set_web_site(Some(StringType::new("https://geofon.gfz.de")));
    op.add_contact(&Handle::new(contact));
    op.add_contact(&Handle::new(Person::default()));

    let node = Writer::new().write(&op).unwrap();
    let copy: Operator = Reader::new().read_as(&round_trip_json(&node)).unwrap();
    assert_eq!(copy, op);
    assert_eq!(copy.contact_count(), 2);

    let first = copy.contact(0).unwrap().borrow();
    let phone = first.phones().at(0).unwrap().borrow();
    assert_eq!(phone.description().unwrap(), "office");
    assert_eq!(phone.country_code().unwrap(), 49);
}

#[test]
fn test_comment_with_times() {
    let mut comment = Comment::new("Sensor replaced");
    comment.set_id(Some(7));
    comment.set_begin_effective_time(Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()));
    let mut author = Person::default();
    author.add_name(&Handle::new(StringType::new("A")));
    comment.add_author(&Handle::new(author));

    let node = Writer::new().write(&comment).unwrap();
    assert_eq!(node.get_attribute("id"), Some("7"));
    assert_eq!(
        node.child_text("BeginEffectiveTime"),
        Some("2020-01-01T00:00:00Z")
    );
    assert!(node.find_child("EndEffectiveTime").is_none());

    let copy: Comment = Reader::new().read_as(&round_trip_json(&node)).unwrap();
    assert_eq!(copy, comment);
    assert!(copy.end_effective_time().is_err());
    assert!(copy.subject().is_err());
}

#[test]
fn test_comment_accepts_zone_less_times() {
    let node = Node::new("Comment")
        .with_child(Node::new("Value").with_text("x"))
        .with_child(Node::new("EndEffectiveTime").with_text("2021-06-01T12:30:00"));
    let comment: Comment = Reader::new().read_as(&node).unwrap();
    assert_eq!(
        comment.end_effective_time().unwrap(),
        Utc.with_ymd_and_hms(2021, 6, 1, 12, 30, 0).unwrap()
    );
}

#[test]
fn test_derived_value_types() {
    let mut value = FloatNoUnitWithNumberType::default();
    value.set_value(-0.125);
    value.set_minus_error(Some(0.5));
    value.set_number(Some(CounterType::new(2)));

    let node = Writer::new().write(&value).unwrap();
    let copy: FloatNoUnitWithNumberType = Reader::new().read_as(&node).unwrap();
    assert_eq!(copy, value);
    assert!(copy.plus_error().is_err());

    let mut float = FloatType::default();
    float.set_value(f64::INFINITY);
    float.set_unit(Some("HZ".to_string()));
    let node = Writer::new().write(&float).unwrap();
    let copy: FloatType = Reader::new().read_as(&node).unwrap();
    assert_eq!(copy, float);
}

#[test]
fn test_special_float_values_survive_text() {
    let mut float = FloatType::default();
    float.set_value(f64::NEG_INFINITY);
    float.set_plus_error(Some(f64::NAN));

    let node = round_trip_json(&Writer::new().write(&float).unwrap());
    assert_eq!(node.text.as_deref(), Some("-INF"));
    assert_eq!(node.get_attribute("plusError"), Some("NaN"));

    let copy: FloatType = Reader::new().read_as(&node).unwrap();
    assert_eq!(copy.value(), f64::NEG_INFINITY);
    assert!(copy.plus_error().unwrap().is_nan());
    assert!(copy.minus_error().is_err());
}

#[test]
fn test_dump_is_stable() {
    let mut op = Operator::default();
    op.set_agency(Agency::new("GFZ"));
    let node = Writer::new().write(&op).unwrap();
    assert_eq!(
        node.to_json().unwrap(),
        r#"{"tag":"Operator","children":[{"tag":"Agency","text":"GFZ"}]}"#
    );
}

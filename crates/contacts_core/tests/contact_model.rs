use contacts_core::{Contact, ContactId};
use std::collections::HashSet;

#[test]
fn contact_new_sets_defaults() {
    let contact = Contact::new(1, "Nguyễn Văn An", "0901234567").with_email("an.nguyen@email.com");

    assert_eq!(contact.id, ContactId(1));
    assert_eq!(contact.name, "Nguyễn Văn An");
    assert_eq!(contact.phone_number, "0901234567");
    assert_eq!(contact.email.as_deref(), Some("an.nguyen@email.com"));
    assert!(!contact.has_profile_image());
    assert!(contact.validate().is_ok());
}

#[test]
fn equality_uses_id_only() {
    let contact = Contact::new(1, "Nguyễn Văn An", "0901234567");
    let same_id = Contact::new(1, "Different Name", "Different Phone").with_email("different@email.com");
    let other = Contact::new(3, "Lê Văn Cường", "0912345678");

    assert_eq!(contact, same_id);
    assert_ne!(contact, other);

    let set: HashSet<Contact> = [contact, same_id, other].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn serialization_uses_snake_case_fields() {
    let contact = Contact::new(2, "Trần Thị Bình", "0907654321")
        .with_email("binh.tran@email.com")
        .with_profile_image_ref("avatars/2.png");

    let json = serde_json::to_value(&contact).unwrap();
    assert_eq!(json["id"], 2);
    assert_eq!(json["phone_number"], "0907654321");
    assert_eq!(json["email"], "binh.tran@email.com");
    assert_eq!(json["profile_image_ref"], "avatars/2.png");
    assert!(json.get("selected").is_none());

    let decoded: Contact = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.name, contact.name);
    assert!(decoded.has_profile_image());
}

#[test]
fn deserialization_drops_blank_optional_fields() {
    let contact: Contact = serde_json::from_str(
        r#"{"id":1,"name":"An","phone_number":"0901","email":"","profile_image_ref":"  "}"#,
    )
    .unwrap();

    assert_eq!(contact.email, None);
    assert_eq!(contact.profile_image_ref, None);
    assert_eq!(contact.display_email(), None);
    assert!(!contact.has_profile_image());
}

#[test]
fn deserialization_accepts_missing_optional_fields() {
    let contact: Contact =
        serde_json::from_str(r#"{"id":4,"name":"Dung","phone_number":"0987654321"}"#).unwrap();

    assert_eq!(contact.id, ContactId::from(4));
    assert_eq!(contact.email, None);
    assert!(!contact.has_profile_image());
}

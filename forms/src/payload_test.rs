use super::*;

#[test]
fn empty_username_defaults_to_guest() {
    let msg = OutgoingMessage::from_inputs("lobby".to_owned(), String::new(), "hello".to_owned());
    assert_eq!(msg.username, "guest");
}

#[test]
fn whitespace_username_is_kept_as_typed() {
    let msg = OutgoingMessage::from_inputs("lobby".to_owned(), " ".to_owned(), "hello".to_owned());
    assert_eq!(msg.username, " ");
}

#[test]
fn message_body_orders_room_username_message() {
    let msg = OutgoingMessage::from_inputs("lobby".to_owned(), String::new(), "hello".to_owned());
    assert_eq!(msg.encode().expect("encode"), "room=lobby&username=guest&message=hello");
}

#[test]
fn reserved_characters_are_escaped() {
    let msg = OutgoingMessage {
        room: "a&b".to_owned(),
        username: "x=y".to_owned(),
        message: "1+1 is 100%".to_owned(),
    };
    assert_eq!(
        msg.encode().expect("encode"),
        "room=a%26b&username=x%3Dy&message=1%2B1+is+100%25"
    );
}

#[test]
fn blob_text_goes_under_message_key() {
    let blob = OutgoingBlob { message: "blobabc".to_owned() };
    assert_eq!(blob.encode().expect("encode"), "message=blobabc");
}

#[test]
fn empty_blob_still_encodes_key() {
    let blob = OutgoingBlob { message: String::new() };
    assert_eq!(blob.encode().expect("encode"), "message=");
}

use super::requester::screen;
use crate::protocol::Reply;

fn reply_payload(correlation_id: &str, body: &str) -> String {
    serde_json::to_string(&Reply {
        correlation_id: correlation_id.to_string(),
        body: body.to_string(),
    })
    .unwrap()
}

#[test]
fn test_screen_accepts_matching_reply() {
    let payload = reply_payload("corr-1", "HELLO");
    assert_eq!(screen(&payload, "corr-1"), Some("HELLO".to_string()));
}

#[test]
fn test_screen_drops_stray_reply() {
    let payload = reply_payload("someone-else", "HELLO");
    assert_eq!(screen(&payload, "corr-1"), None);
}

#[test]
fn test_screen_drops_malformed_reply() {
    assert_eq!(screen("not json", "corr-1"), None);
    assert_eq!(screen("", "corr-1"), None);
}

#[test]
fn test_screen_keeps_empty_bodies() {
    // An empty transform result is still a valid reply.
    let payload = reply_payload("corr-1", "");
    assert_eq!(screen(&payload, "corr-1"), Some(String::new()));
}

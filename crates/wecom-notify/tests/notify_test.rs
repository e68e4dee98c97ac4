//! Tests for [`WeComNotifyClient`] against a mock webhook.

use wecom_notify::{Notifier, NotifyError, WeComNotifyClient};

/// **Test: posts the text payload with the key query parameter; errmsg "ok" is success.**
#[tokio::test]
async fn send_plain_text_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/cgi-bin/webhook/send")
        .match_query(mockito::Matcher::UrlEncoded("key".into(), "abc-123".into()))
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "msgtype": "text",
            "text": {"content": "gptbot is dead!"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"errcode": 0, "errmsg": "ok"}"#)
        .create_async()
        .await;

    let client = WeComNotifyClient::with_endpoint("abc-123".to_string(), server.url()).unwrap();
    client.send_plain_text("gptbot is dead!").await.unwrap();
    mock.assert_async().await;
}

/// **Test: errmsg other than "ok" is a rejection carrying the code and message.**
#[tokio::test]
async fn send_plain_text_rejected() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/cgi-bin/webhook/send")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(r#"{"errcode": 40008, "errmsg": "invalid message type"}"#)
        .create_async()
        .await;

    let client = WeComNotifyClient::with_endpoint("abc-123".to_string(), server.url()).unwrap();
    let err = client.send_plain_text("x").await.unwrap_err();
    match err {
        NotifyError::Rejected { errcode, errmsg } => {
            assert_eq!(errcode, 40008);
            assert_eq!(errmsg, "invalid message type");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

/// **Test: non-200 status is reported with the body.**
#[tokio::test]
async fn send_plain_text_bad_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/cgi-bin/webhook/send")
        .match_query(mockito::Matcher::Any)
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let client = WeComNotifyClient::with_endpoint("abc-123".to_string(), server.url()).unwrap();
    let err = client.send_plain_text("x").await.unwrap_err();
    assert!(matches!(err, NotifyError::Status { status: 502, ref body } if body == "bad gateway"));
}

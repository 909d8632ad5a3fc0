//! Integration tests for the HTTP client functionality.
//!
//! These tests verify the client configuration, request building,
//! response handling, and error behavior against a mock gateway.

use fedex_api::clients::{DataType, HttpClient, HttpError, HttpRequest, InvalidHttpRequestError};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_full_workflow_client_to_request_to_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/xml/"))
        .and(header("Accept", "application/xml"))
        .and(header("Accept", "text/xml"))
        .and(body_string("<TrackRequest/>"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/xml")
                .set_body_string("<TrackReply/>"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(None).unwrap();
    let request = HttpRequest::builder(format!("{}/xml/", server.uri()))
        .body("<TrackRequest/>")
        .build()
        .unwrap();

    let response = client.post(request).await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.content_type(), Some("text/xml"));
    assert_eq!(response.body, "<TrackReply/>");
}

#[tokio::test]
async fn test_text_xml_body_type_and_extra_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("Content-Type", "text/xml"))
        .and(header("SOAPAction", "track"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<TrackReply/>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(Some("Warehouse/2.1")).unwrap();
    let request = HttpRequest::builder(server.uri())
        .body("<TrackRequest/>")
        .body_type(DataType::TextXml)
        .header("SOAPAction", "track")
        .build()
        .unwrap();

    assert!(client.post(request).await.unwrap().is_ok());
}

#[tokio::test]
async fn test_fault_status_is_returned_not_raised() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<soapenv:Fault/>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(None).unwrap();
    let request = HttpRequest::builder(server.uri())
        .body("<RateRequest/>")
        .build()
        .unwrap();

    let response = client.post(request).await.unwrap();
    assert!(!response.is_ok());
    assert_eq!(response.code, 500);
    assert_eq!(response.body, "<soapenv:Fault/>");
}

#[test]
fn test_invalid_request_produces_correct_error() {
    let missing_body = HttpRequest::builder("https://gatewaybeta.fedex.com:443/xml/").build();
    assert!(matches!(
        missing_body,
        Err(InvalidHttpRequestError::MissingBody)
    ));

    let bad_url = HttpRequest::builder("gatewaybeta.fedex.com/xml/")
        .body("<TrackRequest/>")
        .build();
    assert!(matches!(
        bad_url,
        Err(InvalidHttpRequestError::InvalidUrl { .. })
    ));
}

#[tokio::test]
async fn test_unreachable_gateway_is_network_error() {
    let client = HttpClient::new(None).unwrap();
    let request = HttpRequest::builder("http://127.0.0.1:1/xml/")
        .body("<TrackRequest/>")
        .build()
        .unwrap();

    let result = client.post(request).await;
    assert!(matches!(result, Err(HttpError::Network(_))));
}

use anyhow::Result;
use discord_ip_lookup::{DiscordClient, LookupEngine, LookupError};
use httpmock::prelude::*;
use std::io::Cursor;

const PROMPT: &str = "Enter Discord User ID: ";

async fn run_lookup(server: &MockServer, stdin: &str) -> (discord_ip_lookup::Result<String>, String) {
    let engine = LookupEngine::new(DiscordClient::new(server.base_url()));
    let mut input = Cursor::new(stdin.to_string());
    let mut output = Vec::new();
    let result = engine.run(&mut input, &mut output).await;
    (result, String::from_utf8(output).unwrap())
}

#[tokio::test]
async fn test_lookup_prints_ip_field() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v9/users/id");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"ip": "1.2.3.4"}));
    });

    let (result, stdout) = run_lookup(&server, "id\n").await;

    api_mock.assert();
    assert_eq!(
        result?,
        "The IP address associated with Discord ID id is: 1.2.3.4"
    );
    assert_eq!(
        stdout,
        format!("{}The IP address associated with Discord ID id is: 1.2.3.4\n", PROMPT)
    );
    Ok(())
}

#[tokio::test]
async fn test_lookup_missing_ip_uses_placeholder() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v9/users/80351110224678912");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({}));
    });

    let (result, _) = run_lookup(&server, "80351110224678912\n").await;

    api_mock.assert();
    assert_eq!(
        result?,
        "The IP address associated with Discord ID 80351110224678912 is: IP Address not found"
    );
    Ok(())
}

#[tokio::test]
async fn test_lookup_not_found_prints_status() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v9/users/404me");
        then.status(404);
    });

    let (result, stdout) = run_lookup(&server, "404me\n").await;

    api_mock.assert();
    assert_eq!(
        result?,
        "Error: Failed to retrieve IP address. Status code: 404"
    );
    assert!(stdout.ends_with("Error: Failed to retrieve IP address. Status code: 404\n"));
    Ok(())
}

#[tokio::test]
async fn test_error_line_carries_only_the_returned_status() -> Result<()> {
    for status in [201u16, 204, 301, 400, 401, 403, 429, 500, 502, 503] {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/v9/users/42");
            then.status(status);
        });

        let (result, _) = run_lookup(&server, "42\n").await;
        let line = result?;

        api_mock.assert();
        assert_eq!(
            line,
            format!("Error: Failed to retrieve IP address. Status code: {}", status)
        );
    }
    Ok(())
}

#[tokio::test]
async fn test_identifier_is_used_verbatim_in_path() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v9/users/user.name-01_x~");
        then.status(200).json_body(serde_json::json!({"ip": "10.1.2.3"}));
    });

    let (result, _) = run_lookup(&server, "user.name-01_x~\r\n").await;

    api_mock.assert();
    assert_eq!(
        result?,
        "The IP address associated with Discord ID user.name-01_x~ is: 10.1.2.3"
    );
    Ok(())
}

#[tokio::test]
async fn test_non_object_body_is_not_recovered() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v9/users/7");
        then.status(200).json_body(serde_json::json!(["1.2.3.4"]));
    });

    let (result, stdout) = run_lookup(&server, "7\n").await;

    api_mock.assert();
    assert!(matches!(result, Err(LookupError::UnexpectedBody { .. })));
    assert_eq!(stdout, PROMPT);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_host_is_not_recovered() {
    // Nothing listens on the discard port locally.
    let engine = LookupEngine::new(DiscordClient::new("http://127.0.0.1:9"));
    let mut input = Cursor::new("1\n".to_string());
    let mut output = Vec::new();

    let result = engine.run(&mut input, &mut output).await;

    assert!(matches!(result, Err(LookupError::ApiError(_))));
}

#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;

use artistscope::clients::{Credentials, Endpoints, SpotifyClient};
use tiny_http::{Header, Response, Server};

pub const TOKEN_BODY: &str =
    r#"{"access_token": "BQC-test-token", "token_type": "Bearer", "expires_in": 3600}"#;

pub const SEARCH_BODY: &str = r#"{
    "artists": {
        "href": "https://api.spotify.com/v1/search?query=daft+punk&type=artist&offset=0&limit=1",
        "items": [{
            "id": "4tZwfgrHOc3mvqYlEYSvVi",
            "name": "Daft Punk",
            "followers": {"href": null, "total": 9812345},
            "genres": ["filter house", "french house"],
            "popularity": 79,
            "type": "artist"
        }],
        "limit": 1,
        "total": 12
    }
}"#;

pub const EMPTY_SEARCH_BODY: &str = r#"{"artists": {"items": [], "limit": 1, "total": 0}}"#;

pub const TOP_TRACKS_BODY: &str = r#"{
    "tracks": [
        {"name": "Get Lucky", "duration_ms": 369626, "popularity": 84, "explicit": false},
        {"name": "Instant Crush", "duration_ms": 337560, "popularity": 80, "explicit": false}
    ]
}"#;

pub const RELATED_BODY: &str = r#"{
    "artists": [
        {"id": "1gR0gsQYfi6joyO1dlp76N", "name": "Justice"},
        {"id": "3l0CmX0FuQjFxr8SK7Vqag", "name": "Cassius"}
    ]
}"#;

pub const ARTIST_ID: &str = "4tZwfgrHOc3mvqYlEYSvVi";

/// A request as seen by the mock catalog.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub url: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl Recorded {
    pub fn path(&self) -> &str {
        self.url.split('?').next().unwrap_or_default()
    }
}

/// Local HTTP server standing in for both the token endpoint and the Web API.
pub struct MockCatalog {
    base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockCatalog {
    /// Serve every request with `route(method, path) -> (status, json body)`.
    pub fn start<F>(route: F) -> Self
    where
        F: Fn(&str, &str) -> (u16, String) + Send + 'static,
    {
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = requests.clone();

        thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                request.as_reader().read_to_string(&mut body).unwrap();

                let header = |name: &str| {
                    request
                        .headers()
                        .iter()
                        .find(|h| h.field.as_str().as_str().eq_ignore_ascii_case(name))
                        .map(|h| h.value.as_str().to_string())
                };
                let recorded = Recorded {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    authorization: header("Authorization"),
                    content_type: header("Content-Type"),
                    body,
                };

                let (status, payload) = route(&recorded.method, recorded.path());
                log.lock().unwrap().push(recorded);

                let response = Response::from_string(payload)
                    .with_status_code(status)
                    .with_header(
                        Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                            .unwrap(),
                    );
                let _ = request.respond(response);
            }
        });

        MockCatalog {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    /// Happy-path catalog answering every endpoint with the fixtures above.
    pub fn catalog() -> Self {
        MockCatalog::start(default_route)
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(
            format!("{}/api/token", self.base_url),
            format!("{}/v1", self.base_url),
        )
    }

    pub fn client(&self) -> SpotifyClient {
        SpotifyClient::new(Credentials::new("id", "secret"), self.endpoints())
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn default_route(method: &str, path: &str) -> (u16, String) {
    let top_tracks = format!("/v1/artists/{ARTIST_ID}/top-tracks");
    let related = format!("/v1/artists/{ARTIST_ID}/related-artists");
    match (method, path) {
        ("POST", "/api/token") => (200, TOKEN_BODY.to_string()),
        ("GET", "/v1/search") => (200, SEARCH_BODY.to_string()),
        ("GET", p) if p == top_tracks => (200, TOP_TRACKS_BODY.to_string()),
        ("GET", p) if p == related => (200, RELATED_BODY.to_string()),
        _ => (404, r#"{"error": {"status": 404, "message": "Not found"}}"#.to_string()),
    }
}

#![allow(dead_code)]

use std::{
    convert::Infallible,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use hyper::{
    service::{make_service_fn, service_fn},
    Body, Request, Response, Server, StatusCode,
};
use portal_lib::{RemoteClient, RemoteConfig, Session};

/// A request as seen by the test server.
#[derive(Debug, Clone)]
pub struct Seen {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
}

pub type Log = Arc<Mutex<Vec<Seen>>>;

/// Serves `handler` on an ephemeral local port and returns the base URL plus a log of requests.
pub async fn serve<F>(handler: F) -> (String, Log)
where
    F: Fn(&Request<Body>) -> Response<Body> + Send + Sync + 'static,
{
    let handler = Arc::new(handler);
    let log: Log = Arc::default();
    let server_log = log.clone();

    let make_service = make_service_fn(move |_conn| {
        let handler = handler.clone();
        let log = server_log.clone();
        async move {
            Ok::<_, Infallible>(service_fn(move |request: Request<Body>| {
                log.lock().unwrap().push(Seen {
                    method: request.method().to_string(),
                    path: request
                        .uri()
                        .path_and_query()
                        .map(ToString::to_string)
                        .unwrap_or_default(),
                    authorization: request
                        .headers()
                        .get(hyper::header::AUTHORIZATION)
                        .and_then(|value| value.to_str().ok())
                        .map(ToOwned::to_owned),
                });
                let response = (*handler)(&request);
                async move { Ok::<_, Infallible>(response) }
            }))
        }
    });

    let server = Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0))).serve(make_service);
    let addr = server.local_addr();
    tokio::spawn(server);

    (format!("http://{addr}"), log)
}

pub fn json(body: &str) -> Response<Body> {
    Response::builder()
        .header(hyper::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub fn status(status: StatusCode, body: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub fn client(base_url: Option<&str>) -> RemoteClient<hyper::client::HttpConnector> {
    RemoteClient::http(
        RemoteConfig::new(base_url.map(ToOwned::to_owned)),
        Session::default(),
    )
}

/// Nothing listens here, so connecting fails right away.
pub const UNREACHABLE: &str = "http://127.0.0.1:1";

pub const COURSES: &str = r#"[
    {"id":"10","code":"CS310","name":"Software Engineering","professor":"Dr. Ada Byron","credits":3,
     "schedule":"MW 9:00-10:30 AM","location":"Tech Building 110","enrolled":12,"capacity":40,
     "status":"available","color":"course-blue"},
    {"id":"11","code":"CS450","name":"Operating Systems","professor":"Dr. Ken Thompson","credits":3,
     "schedule":"TTh 1:00-2:30 PM","location":"Tech Building 120","enrolled":45,"capacity":45,
     "status":"full","color":"course-red"}
]"#;

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use spacetrack_api::transport::{Connection, Transport};
use spacetrack_api::types::{Gp, GpField};
use spacetrack_api::{Client, ClientConfig, Credentials, Error, Predicate, Query};
use url::Url;

/// What the fake connection does when the form is posted.
#[derive(Clone)]
enum Reply {
    Body(&'static str),
    Status(u16),
    SocketClosed,
}

#[derive(Default)]
struct Counters {
    opens: AtomicUsize,
    closes: AtomicUsize,
    endpoints: Mutex<Vec<String>>,
    forms: Mutex<Vec<Vec<(String, String)>>>,
}

struct FakeTransport {
    reply: Reply,
    fail_close: bool,
    counters: Arc<Counters>,
}

struct FakeConnection {
    reply: Reply,
    fail_close: bool,
    counters: Arc<Counters>,
}

#[async_trait]
impl Transport for FakeTransport {
    async fn open(&self, endpoint: &Url) -> Result<Box<dyn Connection>, Error> {
        self.counters.opens.fetch_add(1, Ordering::SeqCst);
        self.counters
            .endpoints
            .lock()
            .unwrap()
            .push(endpoint.to_string());
        Ok(Box::new(FakeConnection {
            reply: self.reply.clone(),
            fail_close: self.fail_close,
            counters: self.counters.clone(),
        }))
    }
}

#[async_trait]
impl Connection for FakeConnection {
    async fn post_form(&mut self, form: &[(&str, &str)]) -> Result<String, Error> {
        self.counters.forms.lock().unwrap().push(
            form.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        match &self.reply {
            Reply::Body(body) => Ok(body.to_string()),
            Reply::Status(status) => Err(Error::HttpStatus {
                status: *status,
                body: String::new(),
            }),
            Reply::SocketClosed => Err(Error::RequestFailed("socket closed".to_string())),
        }
    }

    fn close(&mut self) -> Result<(), Error> {
        self.counters.closes.fetch_add(1, Ordering::SeqCst);
        if self.fail_close {
            Err(Error::RequestFailed("close failed".to_string()))
        } else {
            Ok(())
        }
    }
}

fn client(reply: Reply, fail_close: bool) -> (Client<FakeTransport>, Arc<Counters>) {
    let counters = Arc::new(Counters::default());
    let transport = FakeTransport {
        reply,
        fail_close,
        counters: counters.clone(),
    };
    let client = Client::with_transport(
        ClientConfig::default(),
        Credentials::new("user", "pass").unwrap(),
        transport,
    );
    (client, counters)
}

fn iss_query() -> Query<GpField> {
    Query::for_class::<Gp>().with_predicate(Predicate::equal(GpField::NoradCatId, 25544).unwrap())
}

fn assert_released_once(counters: &Counters) {
    assert_eq!(counters.opens.load(Ordering::SeqCst), 1);
    assert_eq!(counters.closes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn success_closes_connection() {
    let (client, counters) = client(Reply::Body(r#"[{"NORAD_CAT_ID":"25544"}]"#), false);
    let rows = client.fetch::<Gp>(&iss_query()).await.unwrap();
    assert_eq!(rows[0].norad_cat_id, Some(25544));
    assert_released_once(&counters);

    assert_eq!(
        counters.endpoints.lock().unwrap().as_slice(),
        ["https://www.space-track.org/ajaxauth/login"]
    );
    let forms = counters.forms.lock().unwrap();
    let keys: Vec<&str> = forms[0].iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["identity", "password", "query"]);
    assert_eq!(
        forms[0][2].1,
        "https://www.space-track.org/basicspacedata/query/class/gp/NORAD_CAT_ID/25544/format/json"
    );
}

#[tokio::test]
async fn socket_failure_closes_connection() {
    let (client, counters) = client(Reply::SocketClosed, false);
    let result = client.fetch::<Gp>(&iss_query()).await;
    assert!(matches!(result, Err(Error::RequestFailed(_))));
    assert_released_once(&counters);
}

#[tokio::test]
async fn non_success_status_closes_connection() {
    let (client, counters) = client(Reply::Status(503), false);
    let result = client.fetch::<Gp>(&iss_query()).await;
    assert!(matches!(result, Err(Error::HttpStatus { status: 503, .. })));
    assert_released_once(&counters);
}

#[tokio::test]
async fn decode_failure_closes_connection() {
    let (client, counters) = client(Reply::Body("<html>maintenance</html>"), false);
    let result = client.fetch::<Gp>(&iss_query()).await;
    assert!(matches!(result, Err(Error::Decode { .. })));
    assert_released_once(&counters);
}

#[tokio::test]
async fn close_failure_does_not_mask_success() {
    let (client, counters) = client(Reply::Body("[]"), true);
    let rows = client.fetch::<Gp>(&iss_query()).await.unwrap();
    assert!(rows.is_empty());
    assert_released_once(&counters);
}

#[tokio::test]
async fn close_failure_does_not_mask_primary_error() {
    let (client, counters) = client(Reply::Status(401), true);
    let result = client.fetch::<Gp>(&iss_query()).await;
    assert!(matches!(result, Err(Error::HttpStatus { status: 401, .. })));
    assert_released_once(&counters);
}

#[tokio::test]
async fn each_execution_reauthenticates() {
    let (client, counters) = client(Reply::Body("[]"), false);
    client.fetch::<Gp>(&iss_query()).await.unwrap();
    client.fetch::<Gp>(&iss_query()).await.unwrap();
    assert_eq!(counters.opens.load(Ordering::SeqCst), 2);
    assert_eq!(counters.closes.load(Ordering::SeqCst), 2);
    let forms = counters.forms.lock().unwrap();
    assert!(forms.iter().all(|form| form[0] == ("identity".to_string(), "user".to_string())));
}

use {
  super::*,
  axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    routing::post,
    Router,
  },
  axum_server::Handle,
  tokio::runtime::Runtime,
};

#[derive(Default)]
struct Script {
  requests: Vec<(String, String)>,
  responses: VecDeque<(u16, String)>,
}

/// An Esplora `/tx` endpoint. Each request is answered with the next
/// scripted status and body, and is recorded.
pub(crate) struct MockEsplora {
  handle: Handle,
  port: u16,
  script: Arc<Mutex<Script>>,
}

impl MockEsplora {
  pub(crate) fn spawn(responses: &[(u16, &str)]) -> Self {
    let script = Arc::new(Mutex::new(Script {
      requests: Vec::new(),
      responses: responses
        .iter()
        .map(|(status, body)| (*status, body.to_string()))
        .collect(),
    }));

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();

    let port = listener.local_addr().unwrap().port();

    let router = Router::new()
      .route("/tx", post(Self::tx))
      .with_state(script.clone());

    let handle = Handle::new();

    {
      let handle = handle.clone();
      thread::spawn(move || {
        Runtime::new().unwrap().block_on(async {
          axum_server::from_tcp(listener)
            .handle(handle)
            .serve(router.into_make_service())
            .await
            .unwrap()
        })
      });
    }

    Self {
      handle,
      port,
      script,
    }
  }

  async fn tx(
    method: Method,
    uri: Uri,
    State(script): State<Arc<Mutex<Script>>>,
    body: String,
  ) -> (StatusCode, String) {
    let mut script = script.lock().unwrap();

    script.requests.push((format!("{method} {uri}"), body));

    let (status, body) = script
      .responses
      .pop_front()
      .unwrap_or((500, "no scripted response".into()));

    (StatusCode::from_u16(status).unwrap(), body)
  }

  pub(crate) fn url(&self) -> String {
    format!("http://127.0.0.1:{}", self.port)
  }

  pub(crate) fn requests(&self) -> Vec<(String, String)> {
    self.script.lock().unwrap().requests.clone()
  }
}

impl Drop for MockEsplora {
  fn drop(&mut self) {
    self.handle.shutdown();
  }
}

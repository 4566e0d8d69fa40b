use std::time::Duration;

use egui_kittest::Harness;
use roster_ui::RosterApp;
use roster_ui::state::State;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const FIRST_PAGE: [(u32, &str, &str); 5] = [
    (1, "Leanne Graham", "Bret"),
    (2, "Ervin Howell", "Antonette"),
    (3, "Clementine Bauch", "Samantha"),
    (4, "Patricia Lebsack", "Karianne"),
    (5, "Chelsey Dietrich", "Kamren"),
];

pub const SECOND_PAGE: [(u32, &str, &str); 5] = [
    (6, "Mrs. Dennis Schulist", "Leopoldo_Corkery"),
    (7, "Kurtis Weissnat", "Elwyn.Skiles"),
    (8, "Nicholas Runolfsdottir V", "Maxime_Nienow"),
    (9, "Glenna Reichert", "Delphine"),
    (10, "Clementina DuBuque", "Moriah.Stanton"),
];

pub struct TestCtx<'a> {
    _mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    /// App pointed at a mock upstream serving two pages of five users.
    pub async fn new_app() -> Self {
        let mock_server = MockServer::start().await;
        mount_page(&mock_server, 1, &FIRST_PAGE).await;
        mount_page(&mock_server, 2, &SECOND_PAGE).await;
        Self::with_server(mock_server)
    }

    /// App pointed at an upstream the caller has already mocked.
    ///
    /// Mount everything before calling this; the first frame issues a request.
    pub fn with_server(mock_server: MockServer) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let app = RosterApp::new(State::test(mock_server.uri()));
        let harness = Harness::new_eframe(|_| app);
        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    /// Steps frames while giving spawned commands time to finish.
    pub async fn settle(&mut self) {
        for _ in 0..10 {
            self.harness.step();
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        self.harness.step();
    }
}

pub fn users(entries: &[(u32, &str, &str)]) -> Value {
    Value::Array(
        entries
            .iter()
            .map(|(id, name, username)| {
                json!({
                    "id": id,
                    "name": name,
                    "username": username,
                    "email": format!("{}@example.com", username.to_lowercase()),
                    "website": format!("{}.org", username.to_lowercase())
                })
            })
            .collect(),
    )
}

pub async fn mount_page(server: &MockServer, page: u32, entries: &[(u32, &str, &str)]) {
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("_page", page.to_string()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(users(entries))
                .insert_header("x-total-count", "10"),
        )
        .mount(server)
        .await;
}

use std::sync::{Arc, Mutex};

use maintainer_collector_core::collect::{collect, generate};
use maintainer_collector_core::config::CollectorConfig;
use maintainer_collector_core::contract::MockFetcher;
use maintainer_collector_core::model::{CURATORS, DOCS_MAINTAINERS};
use maintainer_collector_core::output::{assemble_default, HEADER};
use maintainer_collector_core::render::render;
use tempfile::tempdir;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Layer, Registry};

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    fields: String,
}

/// Custom Layer to collect emitted events with their fields.
struct EventCollector {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct FieldWriter<'a>(&'a mut String);

impl Visit for FieldWriter<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.push_str(&format!("{}={:?} ", field.name(), value));
    }
}

impl<S> Layer<S> for EventCollector
where
    S: tracing::Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = String::new();
        event.record(&mut FieldWriter(&mut fields));
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields,
        });
    }
}

fn scripted_fetcher() -> MockFetcher {
    let mut fetcher = MockFetcher::new();
    fetcher
        .expect_fetch()
        .returning(|org: &str, project: &str| match (org, project) {
            ("docker", "foo") => Ok(br#"
[Org]
    [Org.Maintainers]
        people = ["Zed", "amy"]
    [Org."Core maintainers"]
        people = ["ignored"]
    [Org.Curators]
        people = ["Tom"]

[people]
    [people.Amy]
        Name = "Amy from foo"
    [people.zed]
        Name = "Zed"
"#
            .to_vec()),
            ("bar", "baz") => Err("network unreachable".into()),
            ("docker", "last") => Ok(br#"
[Org]
    [Org.Curators]
        people = ["Tom", "Sam"]
    [Org."Docs maintainers"]
        people = ["amy"]

[people]
    [people.amy]
        Name = "Amy from last"
"#
            .to_vec()),
            other => panic!("unexpected fetch {other:?}"),
        });
    fetcher
}

fn configured_projects() -> Vec<String> {
    vec!["foo".into(), "bar/baz".into(), "last".into()]
}

#[tokio::test]
async fn end_to_end_scenario_merges_and_logs_skips() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = Registry::default().with(EventCollector {
        events: events.clone(),
    });
    let _guard = tracing::subscriber::set_default(subscriber);

    let fetcher = scripted_fetcher();
    let collection = collect(&fetcher, &configured_projects(), "docker").await;
    let model = collection.model;

    assert_eq!(model.org["foo"].people, vec!["amy", "zed"]);
    assert_eq!(model.org["last"].people, Vec::<String>::new());
    assert!(!model.org.contains_key("baz"));
    assert_eq!(model.org[CURATORS].people, vec!["Sam", "Tom"]);
    assert_eq!(model.org[DOCS_MAINTAINERS].people, vec!["amy"]);

    assert!(model.people.keys().all(|k| *k == k.to_lowercase()));
    assert_eq!(model.people["amy"].name(), Some("Amy from last"));

    let events = events.lock().unwrap();
    let errors: Vec<_> = events
        .iter()
        .filter(|e| e.level == tracing::Level::ERROR)
        .collect();
    assert_eq!(errors.len(), 1, "expected one error event, got {errors:?}");
    assert!(errors[0].fields.contains("bar/baz"));
    assert!(events
        .iter()
        .any(|e| e.level == tracing::Level::INFO && e.fields.contains("docker/last")));
}

#[tokio::test]
async fn generate_writes_header_prose_and_body() {
    let dir = tempdir().unwrap();
    let config = CollectorConfig {
        projects: configured_projects(),
        output: dir.path().join("MAINTAINERS"),
        ..CollectorConfig::default()
    };

    let report = generate(&config, &scripted_fetcher())
        .await
        .expect("generation succeeds despite the failed project");
    assert_eq!(report.merged, vec!["docker/foo", "docker/last"]);
    assert_eq!(report.skipped.len(), 1);

    let written = std::fs::read_to_string(&config.output).unwrap();
    assert!(written.starts_with(HEADER));

    let parsed: toml::Table = toml::from_str(&written).expect("output is one TOML document");
    assert!(parsed.contains_key("Rules"));
    assert!(parsed.contains_key("Roles"));
    let foo = parsed["Org"]["foo"]["people"].as_array().unwrap();
    assert_eq!(foo.len(), 2);
    assert_eq!(parsed["people"]["zed"]["Name"].as_str(), Some("Zed"));
}

#[tokio::test]
async fn rendering_the_same_model_twice_is_byte_identical() {
    let collection = collect(&scripted_fetcher(), &configured_projects(), "docker").await;
    let first = assemble_default(&render(&collection.model).unwrap());
    let second = assemble_default(&render(&collection.model).unwrap());
    assert_eq!(first, second);
}

#[tokio::test]
async fn write_failure_is_fatal() {
    let dir = tempdir().unwrap();
    let config = CollectorConfig {
        projects: configured_projects(),
        output: dir.path().join("no-such-dir").join("MAINTAINERS"),
        ..CollectorConfig::default()
    };

    let err = generate(&config, &scripted_fetcher()).await.unwrap_err();
    assert!(err.to_string().contains("no-such-dir"));
}

//! Crate-level scenario tests driving the engine through the fake host.

use std::rc::Rc;

use lamplight_config::{ConfigTable, GlobalDefaults, ProviderDefinition};
use lamplight_host::{ActivationRoute, LifecycleEvent};
use serde_json::json;

use crate::activator::Activator;
use crate::tracking::CheckState;

pub(crate) mod support;

use support::FakeHost;

fn table(value: serde_json::Value) -> ConfigTable {
    let serde_json::Value::Object(map) = value else {
        panic!("test input must be an object");
    };
    map
}

#[test]
fn filetype_pass_activates_and_replays_for_open_buffers() {
    let host = Rc::new(FakeHost::new(ActivationRoute::ModernFunction));
    host.open_buffer(1, "go");
    host.open_buffer(2, "rust");
    host.open_buffer(3, "go");

    let activator = Activator::new(
        Rc::clone(&host),
        [(
            "alpha".to_owned(),
            ProviderDefinition::new()
                .with_table(ConfigTable::new())
                .with_tags(["go"]),
        )],
        GlobalDefaults::from_table(table(json!({"root": "."}))),
    );

    activator.check_filetype("go", false);
    host.run_queue();

    assert_eq!(activator.provider_state("alpha"), CheckState::Succeeded);
    let calls = host.configure_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].name, "alpha");
    // The empty provider table still picks up the global defaults.
    assert_eq!(calls[0].config.get("root"), Some(&json!(".")));

    let emitted = host.emitted();
    assert_eq!(emitted.len(), 2);
    assert!(
        emitted
            .iter()
            .all(|event| event.event == LifecycleEvent::FileType)
    );
    let raw: Vec<u64> = emitted.iter().map(|event| event.buffer.raw()).collect();
    assert_eq!(raw, [1, 3]);
}

#[test]
fn missing_executable_fails_silently_without_adapter_call() {
    let host = Rc::new(FakeHost::new(ActivationRoute::ModernFunction));
    let activator = Activator::new(
        Rc::clone(&host),
        [(
            "beta".to_owned(),
            ProviderDefinition::new()
                .with_executable("betalsp")
                .with_tags(["beta"]),
        )],
        GlobalDefaults::default(),
    );

    activator.check_server("beta", false);

    assert_eq!(activator.provider_state("beta"), CheckState::Failed);
    assert!(host.configure_calls().is_empty());
    assert!(host.notifications().is_empty());
    assert!(host.emitted().is_empty());
}

#[test]
fn refresh_retries_only_failed_providers() {
    let host = Rc::new(FakeHost::new(ActivationRoute::ModernFunction));
    host.open_buffer(1, "go");
    let activator = Activator::new(
        Rc::clone(&host),
        [
            (
                "alpha".to_owned(),
                ProviderDefinition::new()
                    .with_flag(true)
                    .with_tags(["go"]),
            ),
            (
                "beta".to_owned(),
                ProviderDefinition::new()
                    .with_executable("betalsp")
                    .with_tags(["beta"]),
            ),
        ],
        GlobalDefaults::default(),
    );

    activator.check_server("alpha", false);
    activator.check_server("beta", false);
    assert_eq!(activator.provider_state("alpha"), CheckState::Succeeded);
    assert_eq!(activator.provider_state("beta"), CheckState::Failed);

    // The user installs the missing executable, then refreshes.
    host.install_executable("betalsp");
    activator.refresh();
    host.run_queue();

    assert_eq!(activator.provider_state("beta"), CheckState::Succeeded);
    assert_eq!(host.configured_names(), ["alpha", "beta"]);

    let events: Vec<LifecycleEvent> = host.emitted().iter().map(|event| event.event).collect();
    assert_eq!(events, [LifecycleEvent::FileType, LifecycleEvent::BufRead]);
}

#[test]
fn generic_providers_run_regardless_of_tags() {
    let host = Rc::new(FakeHost::new(ActivationRoute::ModernFunction));
    host.open_buffer(1, "go");
    host.open_untagged_buffer(2);
    let activator = Activator::new(
        Rc::clone(&host),
        [
            ("copilot".to_owned(), ProviderDefinition::new().with_flag(true)),
            (
                "alpha".to_owned(),
                ProviderDefinition::new()
                    .with_flag(true)
                    .with_tags(["go"]),
            ),
        ],
        GlobalDefaults::default(),
    );

    activator.check_generics(false);
    host.run_queue();

    assert_eq!(activator.provider_state("copilot"), CheckState::Succeeded);
    assert_eq!(activator.provider_state("alpha"), CheckState::Unchecked);

    let emitted = host.emitted();
    assert_eq!(emitted.len(), 2);
    assert!(
        emitted
            .iter()
            .all(|event| event.event == LifecycleEvent::BufRead)
    );
}
